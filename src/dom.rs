//! Small wrappers around raw web-sys calls shared by the sensors and widgets.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, FocusEvent, Node};

/// Milliseconds since the epoch, as seen by the browser clock.
pub fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Elements where arrow keys move a caret or a selection.
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}

/// True when the event was aimed at a form field or an editable element.
pub fn targets_text_entry(e: &Event) -> bool {
    let Some(element) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    is_text_entry_tag(&element.tag_name())
        || element
            .get_attribute("contenteditable")
            .map_or(false, |v| v != "false")
}

/// True when a `focusout` moves focus outside the element that handles it,
/// rather than between two of its children.
pub fn focus_left(e: &FocusEvent) -> bool {
    let Some(root) = e.current_target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return true;
    };
    let next = e.related_target().and_then(|t| t.dyn_into::<Node>().ok());
    !root.contains(next.as_ref())
}

/// A registered event listener. Dropping it removes the listener again, so
/// holding one inside an effect's destructor ties the listener to the
/// component's lifetime.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn on<F>(target: &EventTarget, event: &'static str, passive: bool, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            debug!("could not listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    pub fn window<F>(event: &'static str, passive: bool, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        Self::on(window.as_ref(), event, passive, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Coalesces bursts of events into at most one callback per animation frame.
pub struct FrameThrottle {
    pending: Rc<Cell<Option<i32>>>,
    frame: Closure<dyn FnMut()>,
}

impl FrameThrottle {
    pub fn new<F>(mut work: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let pending = Rc::new(Cell::new(None));
        let frame = {
            let pending = pending.clone();
            Closure::wrap(Box::new(move || {
                pending.set(None);
                work();
            }) as Box<dyn FnMut()>)
        };
        Self { pending, frame }
    }

    pub fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.request_animation_frame(self.frame.as_ref().unchecked_ref()) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(e) => debug!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

impl Drop for FrameThrottle {
    fn drop(&mut self) {
        if let (Some(handle), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_take_arrow_keys() {
        assert!(is_text_entry_tag("INPUT"));
        assert!(is_text_entry_tag("textarea"));
        assert!(is_text_entry_tag("SELECT"));
        assert!(!is_text_entry_tag("BUTTON"));
        assert!(!is_text_entry_tag("DIV"));
    }
}

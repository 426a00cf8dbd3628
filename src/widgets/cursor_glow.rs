use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::dom::{FrameThrottle, Listener};

/// Moves the glow element directly. Pointer tracking runs on every frame, so
/// it stays out of component state and never re-renders.
pub fn update_cursor_glow_position(glow: &HtmlElement, x: f64, y: f64) {
    let style = glow.style();
    let _ = style.set_property("left", &format!("{}px", x));
    let _ = style.set_property("top", &format!("{}px", y));
}

#[function_component(CursorGlow)]
pub fn cursor_glow() -> Html {
    let glow = use_node_ref();

    {
        let glow = glow.clone();
        use_effect_with_deps(
            move |_| {
                let last = Rc::new(Cell::new((0.0_f64, 0.0_f64)));
                let throttle = {
                    let last = last.clone();
                    Rc::new(FrameThrottle::new(move || {
                        if let Some(el) = glow.cast::<HtmlElement>() {
                            let (x, y) = last.get();
                            update_cursor_glow_position(&el, x, y);
                        }
                    }))
                };
                let listener = {
                    let throttle = throttle.clone();
                    Listener::window("mousemove", true, move |e: Event| {
                        if let Some(m) = e.dyn_ref::<MouseEvent>() {
                            last.set((m.client_x() as f64, m.client_y() as f64));
                            throttle.schedule();
                        }
                    })
                };
                move || {
                    drop(listener);
                    drop(throttle);
                }
            },
            (),
        );
    }

    html! {
        <div ref={glow} class="cursor-glow" aria-hidden="true" style="left: 0; top: 0;" />
    }
}

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::dom::{self, FrameThrottle, Listener};

/// How far the page has scrolled past `element`, as 0..=1 of its height.
pub fn scroll_progress(rect_top: f64, rect_height: f64) -> f64 {
    if rect_height <= 0.0 || !rect_top.is_finite() {
        return 0.0;
    }
    (-rect_top / rect_height).clamp(0.0, 1.0)
}

/// Background translation for the `index`th parallax layer.
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    let depth = 0.12 + (index % 3) as f64 * 0.02;
    scroll_y * depth
}

pub fn is_scrolled_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| is_scrolled_past(dom::scroll_y(), threshold));

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                scrolled.set(is_scrolled_past(dom::scroll_y(), threshold));
                let listener = Listener::window("scroll", true, move |_| {
                    scrolled.set(is_scrolled_past(dom::scroll_y(), threshold));
                });
                move || drop(listener)
            },
            threshold,
        );
    }

    *scrolled
}

/// Scroll progress through the element behind `node`, sampled once per frame.
#[hook]
pub fn use_scroll_progress(node: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |node| {
                let node = node.clone();
                let throttle = Rc::new(FrameThrottle::new(move || {
                    if let Some(el) = node.cast::<Element>() {
                        let rect = el.get_bounding_client_rect();
                        progress.set(scroll_progress(rect.top(), rect.height()));
                    }
                }));
                throttle.schedule();
                let listener = {
                    let throttle = throttle.clone();
                    Listener::window("scroll", true, move |_| throttle.schedule())
                };
                move || {
                    drop(listener);
                    drop(throttle);
                }
            },
            node,
        );
    }

    *progress
}

/// Writes parallax transforms straight onto the layers. This runs on every
/// frame of a scroll so it bypasses component state entirely.
#[hook]
pub fn use_parallax(layers: Rc<Vec<NodeRef>>) {
    use_effect_with_deps(
        move |layers| {
            let layers = layers.clone();
            let throttle = Rc::new(FrameThrottle::new(move || {
                let y = dom::scroll_y();
                for (i, layer) in layers.iter().enumerate() {
                    if let Some(el) = layer.get().and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                        let _ = el.style().set_property(
                            "transform",
                            &format!("translate3d(0, {:.2}px, 0)", parallax_offset(y, i)),
                        );
                    }
                }
            }));
            throttle.schedule();
            let listener = {
                let throttle = throttle.clone();
                Listener::window("scroll", true, move |_| throttle.schedule())
            };
            move || {
                drop(listener);
                drop(throttle);
            }
        },
        layers,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(100.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-200.0, 800.0), 0.25);
        assert_eq!(scroll_progress(-5000.0, 800.0), 1.0);
    }

    #[test]
    fn zero_height_has_no_progress() {
        assert_eq!(scroll_progress(-100.0, 0.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn parallax_depth_cycles_every_three_layers() {
        assert!((parallax_offset(100.0, 0) - 12.0).abs() < 1e-9);
        assert!((parallax_offset(100.0, 1) - 14.0).abs() < 1e-9);
        assert!((parallax_offset(100.0, 2) - 16.0).abs() < 1e-9);
        assert!((parallax_offset(100.0, 3) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(!is_scrolled_past(50.0, 50.0));
        assert!(is_scrolled_past(50.5, 50.0));
    }
}

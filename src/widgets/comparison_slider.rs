use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config;
use crate::content::ComparisonImage;
use crate::dom::Listener;

pub const RESET_POSITION: f64 = 50.0;

/// Divider position for a pointer at `pointer_x`, as a percentage of the
/// container. `None` when the container has no measurable width.
pub fn position_from_pointer(pointer_x: f64, container_left: f64, container_width: f64) -> Option<f64> {
    if container_width <= 0.0 || !container_width.is_finite() || !pointer_x.is_finite() {
        return None;
    }
    Some((((pointer_x - container_left) / container_width) * 100.0).clamp(0.0, 100.0))
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SliderAction {
    /// Pointer went down on the handle.
    Grab,
    Move {
        pointer_x: f64,
        container_left: f64,
        container_width: f64,
    },
    /// Any pointer-up or touch-end, whichever input started the drag.
    Release,
    SnapTo(Side),
    Reset,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SliderState {
    pub position: f64,
    pub dragging: bool,
    /// Flips on the first grab or label click and never flips back.
    pub interacted: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            position: RESET_POSITION,
            dragging: false,
            interacted: false,
        }
    }
}

impl SliderState {
    pub fn apply(self, action: SliderAction) -> Self {
        match action {
            SliderAction::Grab => Self {
                dragging: true,
                interacted: true,
                ..self
            },
            SliderAction::Move {
                pointer_x,
                container_left,
                container_width,
            } => {
                if !self.dragging {
                    return self;
                }
                match position_from_pointer(pointer_x, container_left, container_width) {
                    Some(position) => Self { position, ..self },
                    None => self,
                }
            }
            SliderAction::Release => Self {
                dragging: false,
                ..self
            },
            SliderAction::SnapTo(side) => Self {
                position: match side {
                    Side::Left => 0.0,
                    Side::Right => 100.0,
                },
                interacted: true,
                ..self
            },
            SliderAction::Reset => Self {
                position: RESET_POSITION,
                dragging: false,
                ..self
            },
        }
    }
}

impl Reducible for SliderState {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn pointer_x(event: &Event) -> Option<f64> {
    if let Some(touch) = event.dyn_ref::<TouchEvent>() {
        return touch.touches().get(0).map(|t| t.client_x() as f64);
    }
    event.dyn_ref::<MouseEvent>().map(|m| m.client_x() as f64)
}

#[derive(Properties, PartialEq)]
pub struct ComparisonSliderProps {
    pub before: ComparisonImage,
    pub after: ComparisonImage,
    /// Fires whenever a drag session starts or ends.
    #[prop_or_default]
    pub on_drag: Callback<bool>,
}

#[function_component(ComparisonSlider)]
pub fn comparison_slider(props: &ComparisonSliderProps) -> Html {
    let state = use_reducer_eq(SliderState::default);
    let container = use_node_ref();

    // Moves and releases are tracked on the window for the whole drag, so the
    // divider keeps following a pointer that has left the widget.
    {
        let dispatcher = state.dispatcher();
        let container = container.clone();
        use_effect_with_deps(
            move |dragging| {
                let mut listeners: Vec<Listener> = Vec::new();
                if *dragging {
                    let on_move = {
                        let dispatcher = dispatcher.clone();
                        move |e: Event| {
                            let (Some(x), Some(el)) = (pointer_x(&e), container.cast::<Element>()) else {
                                return;
                            };
                            let rect = el.get_bounding_client_rect();
                            if rect.width() <= 0.0 {
                                debug!("comparison slider has no width, ignoring move");
                                return;
                            }
                            if e.type_() == "touchmove" {
                                e.prevent_default();
                            }
                            dispatcher.dispatch(SliderAction::Move {
                                pointer_x: x,
                                container_left: rect.left(),
                                container_width: rect.width(),
                            });
                        }
                    };
                    let on_release = move |_: Event| dispatcher.dispatch(SliderAction::Release);
                    listeners.extend(Listener::window("mousemove", true, on_move.clone()));
                    listeners.extend(Listener::window("touchmove", false, on_move));
                    for event in ["mouseup", "touchend", "touchcancel"] {
                        listeners.extend(Listener::window(event, true, on_release.clone()));
                    }
                }
                move || drop(listeners)
            },
            state.dragging,
        );
    }

    {
        let on_drag = props.on_drag.clone();
        use_effect_with_deps(
            move |dragging| {
                on_drag.emit(*dragging);
                || ()
            },
            state.dragging,
        );
    }

    let on_mouse_grab = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(SliderAction::Grab);
        })
    };
    let on_touch_grab = {
        let state = state.clone();
        Callback::from(move |e: TouchEvent| {
            // Touches on the handle drag; everything else is left to bubble up as a swipe.
            e.stop_propagation();
            state.dispatch(SliderAction::Grab);
        })
    };
    let snap = |side: Side| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(SliderAction::SnapTo(side)))
    };
    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(SliderAction::Reset))
    };

    let position = state.position;
    html! {
        <div
            ref={container}
            class={classes!("compare", state.dragging.then(|| "compare--dragging"))}
        >
            <style>
                {r#"
                .compare {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                    border-radius: 12px;
                    user-select: none;
                    touch-action: pan-y;
                }
                .compare__layer {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                }
                .compare__handle {
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    width: 44px;
                    margin-left: -22px;
                    cursor: ew-resize;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    touch-action: none;
                }
                .compare__handle::before {
                    content: '';
                    position: absolute;
                    top: 0;
                    bottom: 0;
                    left: 50%;
                    width: 2px;
                    background: #fff;
                }
                .compare__grip {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: #CC0000;
                    border: 2px solid #fff;
                    z-index: 1;
                }
                .compare__label {
                    position: absolute;
                    bottom: 1rem;
                    padding: 0.4rem 0.9rem;
                    background: rgba(0, 0, 0, 0.6);
                    color: #fff;
                    border: none;
                    border-radius: 999px;
                    cursor: pointer;
                }
                .compare__label--left { left: 1rem; }
                .compare__label--right { right: 1rem; }
                .compare__hint {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -160%);
                    color: #fff;
                    font-size: 0.85rem;
                    pointer-events: none;
                    animation: compareHint 2s ease-in-out infinite;
                }
                .compare__reset {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: rgba(255, 255, 255, 0.15);
                    color: #fff;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 6px;
                    padding: 0.3rem 0.7rem;
                    cursor: pointer;
                }
                @keyframes compareHint {
                    0%, 100% { opacity: 0.4; }
                    50% { opacity: 1; }
                }
                "#}
            </style>
            <div
                class="compare__layer compare__layer--after"
                style={format!("background-image: url({});", config::asset_url(&props.after.src))}
                role="img"
                aria-label={props.after.label.clone()}
            />
            <div
                class="compare__layer compare__layer--before"
                style={format!(
                    "background-image: url({}); clip-path: inset(0 {:.2}% 0 0);",
                    config::asset_url(&props.before.src),
                    100.0 - position
                )}
                role="img"
                aria-label={props.before.label.clone()}
            />
            <div
                class="compare__handle"
                style={format!("left: {:.2}%;", position)}
                role="slider"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={format!("{:.0}", position)}
                onmousedown={on_mouse_grab}
                ontouchstart={on_touch_grab}
            >
                <span class="compare__grip" />
            </div>
            <button class="compare__label compare__label--left" onclick={snap(Side::Left)}>
                {&props.before.label}
            </button>
            <button class="compare__label compare__label--right" onclick={snap(Side::Right)}>
                {&props.after.label}
            </button>
            <button class="compare__reset" onclick={on_reset}>{"Reset"}</button>
            {
                if !state.interacted {
                    html! { <span class="compare__hint">{"Drag to compare"}</span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag_to(state: SliderState, x: f64) -> SliderState {
        state.apply(SliderAction::Move {
            pointer_x: x,
            container_left: 200.0,
            container_width: 400.0,
        })
    }

    #[test]
    fn pointer_maps_to_percentage() {
        assert_eq!(position_from_pointer(300.0, 200.0, 400.0), Some(25.0));
        assert_eq!(position_from_pointer(600.0, 200.0, 400.0), Some(100.0));
    }

    #[test]
    fn zero_width_container_skips_update() {
        assert_eq!(position_from_pointer(10.0, 0.0, 0.0), None);
        let grabbed = SliderState::default().apply(SliderAction::Grab);
        let moved = grabbed.apply(SliderAction::Move {
            pointer_x: 10.0,
            container_left: 0.0,
            container_width: 0.0,
        });
        assert_eq!(moved.position, RESET_POSITION);
    }

    #[test]
    fn position_stays_in_range_for_any_pointer() {
        let mut state = SliderState::default().apply(SliderAction::Grab);
        for x in [-10_000.0, -1.0, 0.0, 199.0, 250.0, 400.0, 599.0, 601.0, 1e9] {
            state = drag_to(state, x);
            assert!((0.0..=100.0).contains(&state.position), "{} -> {}", x, state.position);
        }
        assert_eq!(state.position, 100.0);
    }

    #[test]
    fn moves_without_a_grab_are_ignored() {
        let state = drag_to(SliderState::default(), 300.0);
        assert_eq!(state.position, RESET_POSITION);
        assert!(!state.interacted);
    }

    #[test]
    fn release_always_ends_the_drag() {
        let state = SliderState::default()
            .apply(SliderAction::Grab)
            .apply(SliderAction::Release)
            .apply(SliderAction::Release);
        assert!(!state.dragging);
        // A stray release after a stray move must not resurrect the drag.
        let state = drag_to(state, 300.0).apply(SliderAction::Release);
        assert!(!state.dragging);
        assert_eq!(state.position, RESET_POSITION);
    }

    #[test]
    fn reset_returns_to_exact_middle() {
        let state = drag_to(SliderState::default().apply(SliderAction::Grab), 237.3)
            .apply(SliderAction::Release)
            .apply(SliderAction::Reset);
        assert_eq!(state.position, 50.0);
        assert!(state.interacted);
    }

    #[test]
    fn labels_snap_and_count_as_interaction() {
        let left = SliderState::default().apply(SliderAction::SnapTo(Side::Left));
        assert_eq!(left.position, 0.0);
        assert!(left.interacted);
        let right = left.apply(SliderAction::SnapTo(Side::Right));
        assert_eq!(right.position, 100.0);
        assert!(!right.dragging);
    }

    #[test]
    fn interaction_flag_is_sticky() {
        let state = SliderState::default()
            .apply(SliderAction::Grab)
            .apply(SliderAction::Release)
            .apply(SliderAction::Reset);
        assert!(state.interacted);
    }

    #[test]
    fn quarter_of_a_400px_container() {
        let state = SliderState::default()
            .apply(SliderAction::Grab)
            .apply(SliderAction::Move {
                pointer_x: 100.0,
                container_left: 0.0,
                container_width: 400.0,
            });
        assert_eq!(state.position, 25.0);
    }

    #[test]
    fn unchanged_state_is_not_reallocated() {
        let state = Rc::new(SliderState::default());
        let next = state.clone().reduce(SliderAction::Release);
        assert!(Rc::ptr_eq(&state, &next));
    }
}

use web_sys::MediaQueryList;
use yew::prelude::*;

use crate::config::{MOBILE_BREAKPOINT_PX, REDUCED_MOTION_QUERY, TOUCH_PRIMARY_QUERY};
use crate::dom::{self, Listener};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Viewport {
    pub is_mobile: bool,
    pub reduced_motion: bool,
    /// No hover-capable pointer, so hover affordances are skipped.
    pub touch_primary: bool,
}

pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

fn media_query(query: &str) -> Option<MediaQueryList> {
    web_sys::window()?.match_media(query).ok().flatten()
}

fn matches(query: &str) -> bool {
    media_query(query).map(|q| q.matches()).unwrap_or(false)
}

fn read_viewport() -> Viewport {
    Viewport {
        is_mobile: dom::viewport_width().map(is_mobile_width).unwrap_or(false),
        reduced_motion: matches(REDUCED_MOTION_QUERY),
        touch_primary: matches(TOUCH_PRIMARY_QUERY),
    }
}

/// Tracks the mobile breakpoint and the user's motion/pointer preferences.
#[hook]
pub fn use_viewport() -> Viewport {
    let viewport = use_state_eq(read_viewport);

    {
        let viewport = viewport.clone();
        use_effect_with_deps(
            move |_| {
                let refresh = {
                    let viewport = viewport.clone();
                    move |_: web_sys::Event| viewport.set(read_viewport())
                };
                let mut listeners: Vec<Listener> = Vec::new();
                listeners.extend(Listener::window("resize", true, refresh.clone()));
                for query in [REDUCED_MOTION_QUERY, TOUCH_PRIMARY_QUERY] {
                    if let Some(list) = media_query(query) {
                        listeners.extend(Listener::on(list.as_ref(), "change", true, refresh.clone()));
                    }
                }
                // Preferences can change between first render and mount.
                viewport.set(read_viewport());

                move || drop(listeners)
            },
            (),
        );
    }

    *viewport
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile_width(375.0));
        assert!(is_mobile_width(768.0));
        assert!(!is_mobile_width(769.0));
        assert!(!is_mobile_width(1440.0));
    }
}

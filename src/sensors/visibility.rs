use std::collections::BTreeSet;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Regions that have been scrolled into view at least once. There is no way
/// to hide a region again: entries only ever get added.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct VisibilityMap {
    revealed: BTreeSet<String>,
}

impl VisibilityMap {
    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    /// Returns true if this call revealed `key` for the first time.
    pub fn reveal(&mut self, key: &str) -> bool {
        if self.revealed.contains(key) {
            return false;
        }
        self.revealed.insert(key.to_string())
    }
}

pub enum RevealAction {
    Reveal(String),
}

impl Reducible for VisibilityMap {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Reveal(key) => {
                if self.is_revealed(&key) {
                    return self;
                }
                let mut next = (*self).clone();
                next.reveal(&key);
                Rc::new(next)
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct RevealTarget {
    pub key: String,
    pub node: NodeRef,
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealTarget {
    pub fn new(key: impl Into<String>, threshold: f64, root_margin: &'static str) -> Self {
        Self {
            key: key.into(),
            node: NodeRef::default(),
            threshold,
            root_margin,
        }
    }
}

/// Looks up the node for `key`, falling back to a detached ref.
pub fn node_for(targets: &[RevealTarget], key: &str) -> NodeRef {
    targets
        .iter()
        .find(|t| t.key == key)
        .map(|t| t.node.clone())
        .unwrap_or_default()
}

struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(target: &RevealTarget, dispatcher: UseReducerDispatcher<VisibilityMap>) -> Option<Observation> {
    let element = target.node.cast::<Element>()?;
    let key = target.key.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let entry = match entries.get(0).dyn_into::<IntersectionObserverEntry>() {
            Ok(entry) => entry,
            Err(_) => return,
        };
        if entry.is_intersecting() {
            dispatcher.dispatch(RevealAction::Reveal(key.clone()));
            // Once revealed there is nothing left to watch for.
            observer.unobserve(&entry.target());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(target.threshold));
    options.set_root_margin(target.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Some(Observation {
                observer,
                _callback: callback,
            })
        }
        Err(e) => {
            debug!("no observer for {}: {:?}", target.key, e);
            None
        }
    }
}

/// Observes each target independently and records the first time it enters
/// the viewport. Observers are disconnected when the component unmounts.
#[hook]
pub fn use_reveal(targets: Rc<Vec<RevealTarget>>) -> UseReducerHandle<VisibilityMap> {
    let visibility = use_reducer_eq(VisibilityMap::default);

    {
        let dispatcher = visibility.dispatcher();
        use_effect_with_deps(
            move |targets| {
                let observations: Vec<Observation> = targets
                    .iter()
                    .filter_map(|t| observe(t, dispatcher.clone()))
                    .collect();
                move || drop(observations)
            },
            targets,
        );
    }

    visibility
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_set_once() {
        let mut map = VisibilityMap::default();
        assert!(!map.is_revealed("hero"));
        assert!(map.reveal("hero"));
        assert!(!map.reveal("hero"));
        assert!(map.is_revealed("hero"));
        assert!(!map.is_revealed("safety"));
    }

    #[test]
    fn repeated_reveal_keeps_the_same_state() {
        let state = Rc::new(VisibilityMap::default());
        let once = state.reduce(RevealAction::Reveal("safety".into()));
        let twice = once.clone().reduce(RevealAction::Reveal("safety".into()));
        assert!(Rc::ptr_eq(&once, &twice));
        assert!(twice.is_revealed("safety"));
    }

    #[test]
    fn revealing_others_never_hides_earlier_keys() {
        let mut state = Rc::new(VisibilityMap::default());
        let keys = ["hero", "safety", "hero", "specs", "showcase-0", "safety"];
        for key in keys {
            state = state.reduce(RevealAction::Reveal(key.into()));
            assert!(state.is_revealed("hero"));
        }
        for key in ["safety", "specs", "showcase-0"] {
            assert!(state.is_revealed(key));
        }
        assert!(!state.is_revealed("cta"));
    }

    #[test]
    fn unknown_key_gets_detached_node() {
        let targets = vec![RevealTarget::new("hero", 0.15, "0px")];
        assert!(node_for(&targets, "hero") == targets[0].node);
        assert!(node_for(&targets, "nope").get().is_none());
    }
}

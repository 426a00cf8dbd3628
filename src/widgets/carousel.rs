use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::dom;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum CarouselAction {
    /// The auto-advance timer fired at `now`.
    Tick { now: f64 },
    Next { now: f64 },
    Prev { now: f64 },
    GoTo { index: usize, now: f64 },
    /// Pointer entered the carousel.
    HoverPause,
    HoverResume { now: f64 },
    /// Keyboard focus moved inside the carousel.
    FocusPause,
    FocusResume { now: f64 },
    /// A drag inside the carousel owns the slide until it ends.
    Hold,
    Unhold { now: f64 },
    SetAutoplay { enabled: bool, now: f64 },
    SetCount { count: usize, now: f64 },
}

/// Slide index plus the auto-advance schedule. Times are plain milliseconds
/// so the schedule can be driven by a fake clock.
#[derive(Clone, PartialEq, Debug)]
pub struct CarouselState {
    pub index: usize,
    pub count: usize,
    pub interval_ms: f64,
    pub autoplay: bool,
    pub hover_paused: bool,
    pub focus_paused: bool,
    pub held: bool,
    /// When the next automatic advance is due, if one is scheduled.
    pub due_at: Option<f64>,
    /// Bumped every time the schedule changes so the timer can be re-armed.
    pub generation: u32,
}

impl CarouselState {
    pub fn new(count: usize, interval_ms: u32, autoplay: bool, now: f64) -> Self {
        let mut state = Self {
            index: 0,
            count,
            interval_ms: interval_ms as f64,
            autoplay,
            hover_paused: false,
            focus_paused: false,
            held: false,
            due_at: None,
            generation: 0,
        };
        state.reschedule(now);
        state
    }

    pub fn is_paused(&self) -> bool {
        self.hover_paused || self.focus_paused || self.held
    }

    fn runs(&self) -> bool {
        self.autoplay && !self.is_paused() && self.count > 1
    }

    /// Starts a full interval from `now`, or clears the schedule when auto
    /// advance can't run.
    fn reschedule(&mut self, now: f64) {
        self.due_at = self.runs().then(|| now + self.interval_ms);
        self.generation = self.generation.wrapping_add(1);
    }

    fn go_to(&mut self, index: usize, now: f64) {
        if self.count == 0 {
            return;
        }
        self.index = index % self.count;
        self.reschedule(now);
    }

    /// Milliseconds until the next automatic advance.
    pub fn remaining(&self, now: f64) -> Option<u32> {
        self.due_at.map(|due| (due - now).max(0.0).ceil() as u32)
    }

    pub fn apply(mut self, action: CarouselAction) -> Self {
        match action {
            CarouselAction::Tick { now } => match self.due_at {
                Some(due) if self.runs() && now >= due => {
                    self.go_to(self.index + 1, now);
                }
                Some(_) if self.runs() => {
                    // Fired early: arm again for what is left.
                    self.generation = self.generation.wrapping_add(1);
                }
                _ => {}
            },
            CarouselAction::Next { now } => self.go_to(self.index + 1, now),
            CarouselAction::Prev { now } => {
                if self.count > 0 {
                    self.go_to(self.index + self.count - 1, now);
                }
            }
            CarouselAction::GoTo { index, now } => {
                if index < self.count {
                    self.go_to(index, now);
                }
            }
            CarouselAction::HoverPause => {
                if self.hover_paused {
                    return self;
                }
                self.hover_paused = true;
                self.reschedule(0.0);
            }
            CarouselAction::HoverResume { now } => {
                if !self.hover_paused {
                    return self;
                }
                self.hover_paused = false;
                self.reschedule(now);
            }
            CarouselAction::FocusPause => {
                if self.focus_paused {
                    return self;
                }
                self.focus_paused = true;
                self.reschedule(0.0);
            }
            CarouselAction::FocusResume { now } => {
                if !self.focus_paused {
                    return self;
                }
                self.focus_paused = false;
                self.reschedule(now);
            }
            CarouselAction::Hold => {
                if self.held {
                    return self;
                }
                self.held = true;
                self.reschedule(0.0);
            }
            CarouselAction::Unhold { now } => {
                if !self.held {
                    return self;
                }
                self.held = false;
                self.reschedule(now);
            }
            CarouselAction::SetAutoplay { enabled, now } => {
                if enabled == self.autoplay {
                    return self;
                }
                self.autoplay = enabled;
                self.reschedule(now);
            }
            CarouselAction::SetCount { count, now } => {
                if count == self.count {
                    return self;
                }
                self.count = count;
                self.index = if count == 0 { 0 } else { self.index.min(count - 1) };
                self.reschedule(now);
            }
        }
        self
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).clone().apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// A carousel over `count` slides that advances every `interval_ms` while
/// `autoplay` holds. Manual navigation restarts the interval.
#[hook]
pub fn use_carousel(count: usize, interval_ms: u32, autoplay: bool) -> UseReducerHandle<CarouselState> {
    let carousel = use_reducer_eq(move || CarouselState::new(count, interval_ms, autoplay, dom::now_ms()));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |autoplay| {
                dispatcher.dispatch(CarouselAction::SetAutoplay {
                    enabled: *autoplay,
                    now: dom::now_ms(),
                });
                || ()
            },
            autoplay,
        );
    }

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |count| {
                dispatcher.dispatch(CarouselAction::SetCount {
                    count: *count,
                    now: dom::now_ms(),
                });
                || ()
            },
            count,
        );
    }

    // One pending timeout at a time; a new generation drops (and so cancels) the old one.
    {
        let dispatcher = carousel.dispatcher();
        let remaining = carousel.remaining(dom::now_ms());
        use_effect_with_deps(
            move |_| {
                let timeout = remaining.map(|ms| {
                    Timeout::new(ms, move || {
                        dispatcher.dispatch(CarouselAction::Tick { now: dom::now_ms() });
                    })
                });
                move || drop(timeout)
            },
            carousel.generation,
        );
    }

    carousel
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: u32 = 6000;

    fn carousel(count: usize) -> CarouselState {
        CarouselState::new(count, INTERVAL, true, 0.0)
    }

    #[test]
    fn auto_advance_wraps_modulo_count() {
        for count in 1..=5 {
            let mut state = carousel(count);
            let start = state.index;
            for k in 1..=12usize {
                let now = match state.due_at {
                    Some(due) => due,
                    None => k as f64 * 6000.0,
                };
                state = state.apply(CarouselAction::Tick { now });
                if count > 1 {
                    assert_eq!(state.index, (start + k) % count);
                } else {
                    assert_eq!(state.index, 0);
                }
            }
        }
    }

    #[test]
    fn manual_navigation_restarts_the_interval() {
        let state = carousel(3)
            .apply(CarouselAction::Tick { now: 6000.0 })
            .apply(CarouselAction::Tick { now: 12000.0 });
        assert_eq!(state.index, 2);

        let state = state.apply(CarouselAction::GoTo { index: 0, now: 13000.0 });
        assert_eq!(state.index, 0);
        assert_eq!(state.due_at, Some(19000.0));

        // The old phase would have fired at 18000; it must not.
        let state = state.apply(CarouselAction::Tick { now: 18000.0 });
        assert_eq!(state.index, 0);
        let state = state.apply(CarouselAction::Tick { now: 19000.0 });
        assert_eq!(state.index, 1);
    }

    #[test]
    fn early_tick_rearms_without_advancing() {
        let state = carousel(3);
        let generation = state.generation;
        let state = state.apply(CarouselAction::Tick { now: 5999.0 });
        assert_eq!(state.index, 0);
        assert_ne!(state.generation, generation);
        assert_eq!(state.remaining(5999.0), Some(1));
    }

    #[test]
    fn arrows_wrap_both_ways() {
        let state = carousel(3).apply(CarouselAction::Prev { now: 1.0 });
        assert_eq!(state.index, 2);
        let state = state.apply(CarouselAction::Next { now: 2.0 });
        assert_eq!(state.index, 0);
    }

    #[test]
    fn out_of_range_goto_is_ignored() {
        let state = carousel(3).apply(CarouselAction::GoTo { index: 7, now: 1.0 });
        assert_eq!(state.index, 0);
        assert_eq!(state.due_at, Some(6000.0));
    }

    #[test]
    fn hover_pause_stops_ticks_and_resume_restarts_the_interval() {
        let state = carousel(3).apply(CarouselAction::HoverPause);
        assert!(state.due_at.is_none());
        let state = state.apply(CarouselAction::Tick { now: 6000.0 });
        assert_eq!(state.index, 0);
        let state = state.apply(CarouselAction::HoverResume { now: 7000.0 });
        assert_eq!(state.due_at, Some(13000.0));
    }

    #[test]
    fn hold_and_hover_pause_independently() {
        let state = carousel(3)
            .apply(CarouselAction::HoverPause)
            .apply(CarouselAction::Hold)
            .apply(CarouselAction::HoverResume { now: 10.0 });
        assert!(state.is_paused());
        assert!(state.due_at.is_none());
        let state = state.apply(CarouselAction::Unhold { now: 20.0 });
        assert_eq!(state.due_at, Some(6020.0));
    }

    #[test]
    fn focus_and_hover_pause_overlap() {
        let state = carousel(3)
            .apply(CarouselAction::FocusPause)
            .apply(CarouselAction::HoverPause)
            .apply(CarouselAction::FocusResume { now: 100.0 });
        assert!(state.is_paused());
        assert!(state.due_at.is_none());
        let state = state.apply(CarouselAction::Tick { now: 6000.0 });
        assert_eq!(state.index, 0);

        let state = state
            .apply(CarouselAction::FocusPause)
            .apply(CarouselAction::HoverResume { now: 200.0 });
        assert!(state.is_paused());
        let state = state.apply(CarouselAction::FocusResume { now: 300.0 });
        assert!(!state.is_paused());
        assert_eq!(state.due_at, Some(6300.0));
    }

    #[test]
    fn repeated_focus_pause_keeps_the_same_schedule() {
        let paused = carousel(3).apply(CarouselAction::FocusPause);
        let again = paused.clone().apply(CarouselAction::FocusPause);
        assert_eq!(paused, again);
        let resumed = carousel(3).apply(CarouselAction::FocusResume { now: 50.0 });
        assert_eq!(resumed, carousel(3));
    }

    #[test]
    fn reduced_motion_disables_the_timer_but_not_navigation() {
        let state = carousel(3).apply(CarouselAction::SetAutoplay {
            enabled: false,
            now: 0.0,
        });
        assert!(state.due_at.is_none());
        let state = state
            .apply(CarouselAction::Tick { now: 60000.0 })
            .apply(CarouselAction::Next { now: 60001.0 });
        assert_eq!(state.index, 1);
        assert!(state.due_at.is_none());
    }

    #[test]
    fn empty_carousel_never_moves() {
        let state = carousel(0)
            .apply(CarouselAction::Next { now: 1.0 })
            .apply(CarouselAction::Prev { now: 2.0 })
            .apply(CarouselAction::Tick { now: 10000.0 });
        assert_eq!(state.index, 0);
        assert!(state.due_at.is_none());
    }

    #[test]
    fn shrinking_count_clamps_index() {
        let state = carousel(5)
            .apply(CarouselAction::GoTo { index: 4, now: 1.0 })
            .apply(CarouselAction::SetCount { count: 2, now: 2.0 });
        assert_eq!(state.index, 1);
    }
}

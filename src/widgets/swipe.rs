use crate::config::SWIPE_THRESHOLD_PX;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Swipe {
    /// Finger moved left: show the next slide.
    Left,
    /// Finger moved right: show the previous slide.
    Right,
}

/// Horizontal swipe detection from a touch's start and end positions.
#[derive(Clone, Copy, Default, Debug)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Ends the gesture. Touches that never began here (for example ones
    /// that started on a drag handle) produce nothing.
    pub fn finish(&mut self, x: f64) -> Option<Swipe> {
        let start = self.start_x.take()?;
        let delta = x - start;
        if delta.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        Some(if delta < 0.0 { Swipe::Left } else { Swipe::Right })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_moves_are_not_swipes() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(100.0);
        assert_eq!(tracker.finish(150.0), None);
        tracker.begin(100.0);
        assert_eq!(tracker.finish(50.0), None);
    }

    #[test]
    fn direction_follows_the_finger() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        assert_eq!(tracker.finish(200.0), Some(Swipe::Left));
        tracker.begin(100.0);
        assert_eq!(tracker.finish(151.0), Some(Swipe::Right));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.finish(500.0), None);
        tracker.begin(0.0);
        tracker.cancel();
        assert_eq!(tracker.finish(500.0), None);
    }

    #[test]
    fn each_start_is_used_once() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(0.0);
        assert_eq!(tracker.finish(100.0), Some(Swipe::Right));
        assert_eq!(tracker.finish(200.0), None);
    }
}

use log::debug;
use web_sys::HtmlElement;

/// Something whose `overflow` style can be read and written.
pub trait OverflowTarget {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: Option<&str>);
}

impl OverflowTarget for HtmlElement {
    fn overflow(&self) -> String {
        self.style().get_property_value("overflow").unwrap_or_default()
    }

    fn set_overflow(&self, value: Option<&str>) {
        let style = self.style();
        let result = match value {
            Some(v) => style.set_property("overflow", v),
            None => style.remove_property("overflow").map(|_| ()),
        };
        if let Err(e) = result {
            debug!("could not update overflow: {:?}", e);
        }
    }
}

/// Page scrolling stays locked for as long as this value lives. Dropping it
/// puts back whatever overflow the target had before, on every exit path.
pub struct ScrollLock<T: OverflowTarget = HtmlElement> {
    target: T,
    previous: String,
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn new(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow(Some("hidden"));
        Self { target, previous }
    }
}

impl ScrollLock<HtmlElement> {
    /// Locks the document body.
    pub fn acquire() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        Some(Self::new(body))
    }
}

impl<T: OverflowTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        if self.previous.is_empty() {
            self.target.set_overflow(None);
        } else {
            self.target.set_overflow(Some(&self.previous));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody(Rc<RefCell<Option<String>>>);

    impl OverflowTarget for FakeBody {
        fn overflow(&self) -> String {
            self.0.borrow().clone().unwrap_or_default()
        }

        fn set_overflow(&self, value: Option<&str>) {
            *self.0.borrow_mut() = value.map(str::to_string);
        }
    }

    #[test]
    fn lock_hides_and_drop_clears() {
        let body = FakeBody::default();
        let lock = ScrollLock::new(body.clone());
        assert_eq!(body.overflow(), "hidden");
        drop(lock);
        assert_eq!(*body.0.borrow(), None);
    }

    #[test]
    fn previous_value_is_restored() {
        let body = FakeBody(Rc::new(RefCell::new(Some("auto".into()))));
        {
            let _lock = ScrollLock::new(body.clone());
            assert_eq!(body.overflow(), "hidden");
        }
        assert_eq!(body.overflow(), "auto");
    }

    #[test]
    fn lock_released_when_owner_unwinds() {
        let body = FakeBody::default();
        let locked = body.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _lock = ScrollLock::new(locked);
            panic!("teardown");
        }));
        assert!(result.is_err());
        assert_eq!(body.overflow(), "");
    }
}

/// Live registration on an event source.
///
/// The release callback runs at most once: on the first call to
/// [`Subscription::unsubscribe`] or when the handle is dropped, whichever
/// comes first. Later calls are no-ops.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting() -> (Rc<Cell<u32>>, Subscription) {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        (released, subscription)
    }

    #[test]
    fn test_unsubscribe_twice_releases_once() {
        let (released, mut subscription) = counting();
        assert_eq!(released.get(), 0);

        subscription.unsubscribe();
        subscription.unsubscribe();

        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_drop_releases() {
        let (released, subscription) = counting();
        drop(subscription);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_drop_after_unsubscribe_does_not_release_again() {
        let (released, mut subscription) = counting();
        subscription.unsubscribe();
        drop(subscription);
        assert_eq!(released.get(), 1);
    }
}

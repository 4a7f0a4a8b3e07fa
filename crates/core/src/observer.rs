/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers monitor or steer a solver without changing its API,
/// enabling logging, early stopping, or custom control policies.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    #[test]
    fn unit_observer_never_acts() {
        let mut observer = ();
        let action: Option<Stop> = observer.observe(&42_usize);
        assert_eq!(action, None);
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &usize| {
            seen.push(*event);
            (*event >= 2).then_some(Stop::Now)
        };

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some(Stop::Now));
        assert_eq!(seen, vec![1, 2]);
    }
}

use leptos::ev::MouseEvent;

/// Events whose default action can be cancelled.
pub trait ClickEvent {
    fn cancel(&self);
}

impl ClickEvent for MouseEvent {
    fn cancel(&self) {
        self.prevent_default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The handler ran with the event.
    Dispatched,
    /// Disabled or loading: default action cancelled, handler skipped.
    Suppressed,
    /// Enabled but nothing to call.
    Unhandled,
}

/// Pre-dispatch check built from the live state at click time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickGate {
    pub disabled: bool,
    pub loading: bool,
}

impl ClickGate {
    pub fn new(disabled: bool, loading: bool) -> Self {
        Self { disabled, loading }
    }

    pub fn is_blocked(self) -> bool {
        self.disabled || self.loading
    }

    pub fn dispatch<E, F>(self, event: E, on_click: Option<F>) -> ClickOutcome
    where
        E: ClickEvent,
        F: FnOnce(E),
    {
        if self.is_blocked() {
            event.cancel();
            return ClickOutcome::Suppressed;
        }
        match on_click {
            Some(handler) => {
                handler(event);
                ClickOutcome::Dispatched
            }
            None => ClickOutcome::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default, Clone)]
    struct FakeClick {
        id: u32,
        cancelled: Rc<Cell<bool>>,
    }

    impl ClickEvent for FakeClick {
        fn cancel(&self) {
            self.cancelled.set(true);
        }
    }

    #[test]
    fn test_blocked_states_never_call_handler() {
        for (disabled, loading) in [(true, false), (false, true), (true, true)] {
            let calls = Cell::new(0);
            let event = FakeClick::default();
            let outcome = ClickGate::new(disabled, loading)
                .dispatch(event.clone(), Some(|_: FakeClick| calls.set(calls.get() + 1)));
            assert_eq!(outcome, ClickOutcome::Suppressed);
            assert_eq!(calls.get(), 0);
            assert!(event.cancelled.get());
        }
    }

    #[test]
    fn test_enabled_calls_handler_once_with_event() {
        let seen = Cell::new(None);
        let event = FakeClick {
            id: 7,
            ..Default::default()
        };
        let outcome =
            ClickGate::new(false, false).dispatch(event.clone(), Some(|e: FakeClick| seen.set(Some(e.id))));
        assert_eq!(outcome, ClickOutcome::Dispatched);
        assert_eq!(seen.get(), Some(7));
        assert!(!event.cancelled.get());
    }

    #[test]
    fn test_disabled_three_clicks() {
        let calls = Cell::new(0);
        let gate = ClickGate::new(true, false);
        for _ in 0..3 {
            gate.dispatch(FakeClick::default(), Some(|_: FakeClick| calls.set(calls.get() + 1)));
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_missing_handler_is_not_an_error() {
        let outcome = ClickGate::default().dispatch(FakeClick::default(), None::<fn(FakeClick)>);
        assert_eq!(outcome, ClickOutcome::Unhandled);
    }

    #[test]
    fn test_gate_reads_state_per_click() {
        let calls = Cell::new(0);
        let mut loading = true;
        for _ in 0..2 {
            ClickGate::new(false, loading)
                .dispatch(FakeClick::default(), Some(|_: FakeClick| calls.set(calls.get() + 1)));
            loading = false;
        }
        assert_eq!(calls.get(), 1);
    }
}

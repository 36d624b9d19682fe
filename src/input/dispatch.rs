//! Capture-phase event dispatcher.
//!
//! The switcher must see key events ahead of the host page and be able to
//! stop them from propagating. Instead of relying on ambient capture-phase
//! listeners, dispatch is modeled explicitly: handlers register once with a
//! [`Phase`], capture handlers run before bubble handlers, handlers within
//! a phase run in registration order, and a handler returning
//! [`Outcome::Consumed`] ends the dispatch. Handlers are installed at
//! startup and live for the dispatcher's lifetime; there is no teardown.

use crate::input::event::Event;

/// Dispatch phase. Capture handlers run before bubble handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Runs first; where the switcher intercepts the chord.
    Capture,
    /// Runs after capture, in document order; where the host page listens.
    Bubble,
}

/// Result of a handler observing an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Event handled; propagation stops here.
    Consumed,
    /// Event not handled; continue to later handlers.
    Propagate,
}

/// Identifier for a registered handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type HandlerFn<T> = Box<dyn FnMut(&mut T, &Event) -> Outcome>;

struct Registration<T> {
    id: HandlerId,
    handler: HandlerFn<T>,
}

/// Ordered event dispatcher over a shared context `T`.
///
/// The context is the state the handlers mutate (for the switcher, the
/// controller itself); it is borrowed exclusively for the duration of a
/// dispatch, which is what makes the single-threaded mutation safe.
pub struct EventDispatcher<T> {
    next_id: u64,
    capture: Vec<Registration<T>>,
    bubble: Vec<Registration<T>>,
}

impl<T> EventDispatcher<T> {
    /// Create an empty dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            capture: Vec::new(),
            bubble: Vec::new(),
        }
    }

    /// Register a handler in the given phase.
    ///
    /// Handlers run in registration order within their phase and are never
    /// torn down.
    pub fn register<F>(&mut self, phase: Phase, handler: F) -> HandlerId
    where
        F: FnMut(&mut T, &Event) -> Outcome + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        let registration = Registration {
            id,
            handler: Box::new(handler),
        };
        match phase {
            Phase::Capture => self.capture.push(registration),
            Phase::Bubble => self.bubble.push(registration),
        }
        id
    }

    /// Number of registered handlers across both phases.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.capture.len() + self.bubble.len()
    }

    /// Whether a handler id is registered.
    #[must_use]
    pub fn has_handler(&self, id: HandlerId) -> bool {
        self.capture
            .iter()
            .chain(self.bubble.iter())
            .any(|r| r.id == id)
    }

    /// Dispatch one event through capture then bubble handlers.
    ///
    /// Returns [`Outcome::Consumed`] if any handler consumed the event, in
    /// which case later handlers never observed it.
    pub fn dispatch(&mut self, ctx: &mut T, event: &Event) -> Outcome {
        for registration in self.capture.iter_mut().chain(self.bubble.iter_mut()) {
            if (registration.handler)(ctx, event) == Outcome::Consumed {
                return Outcome::Consumed;
            }
        }
        Outcome::Propagate
    }
}

impl<T> Default for EventDispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EventDispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("capture", &self.capture.len())
            .field("bubble", &self.bubble.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keyboard::KeyEvent;

    fn key_event() -> Event {
        Event::KeyDown(KeyEvent::char('q'))
    }

    #[test]
    fn test_capture_runs_before_bubble() {
        let mut dispatcher: EventDispatcher<Vec<&'static str>> = EventDispatcher::new();
        dispatcher.register(Phase::Bubble, |log: &mut Vec<&str>, _| {
            log.push("bubble");
            Outcome::Propagate
        });
        dispatcher.register(Phase::Capture, |log: &mut Vec<&str>, _| {
            log.push("capture");
            Outcome::Propagate
        });

        let mut log = Vec::new();
        let outcome = dispatcher.dispatch(&mut log, &key_event());
        assert_eq!(outcome, Outcome::Propagate);
        assert_eq!(log, vec!["capture", "bubble"]);
    }

    #[test]
    fn test_consumed_stops_propagation() {
        let mut dispatcher: EventDispatcher<Vec<&'static str>> = EventDispatcher::new();
        dispatcher.register(Phase::Capture, |log: &mut Vec<&str>, _| {
            log.push("switcher");
            Outcome::Consumed
        });
        dispatcher.register(Phase::Bubble, |log: &mut Vec<&str>, _| {
            log.push("page");
            Outcome::Propagate
        });

        let mut log = Vec::new();
        let outcome = dispatcher.dispatch(&mut log, &key_event());
        assert_eq!(outcome, Outcome::Consumed);
        assert_eq!(log, vec!["switcher"]);
    }

    #[test]
    fn test_registration_order_within_phase() {
        let mut dispatcher: EventDispatcher<Vec<u32>> = EventDispatcher::new();
        for n in 0..3 {
            dispatcher.register(Phase::Capture, move |log: &mut Vec<u32>, _| {
                log.push(n);
                Outcome::Propagate
            });
        }

        let mut log = Vec::new();
        dispatcher.dispatch(&mut log, &key_event());
        assert_eq!(log, vec![0, 1, 2]);
    }

    #[test]
    fn test_handler_ids_unique() {
        let mut dispatcher: EventDispatcher<()> = EventDispatcher::new();
        let a = dispatcher.register(Phase::Capture, |(), _| Outcome::Propagate);
        let b = dispatcher.register(Phase::Bubble, |(), _| Outcome::Propagate);
        assert_ne!(a, b);
        assert_eq!(dispatcher.handler_count(), 2);
        assert!(dispatcher.has_handler(a));
        assert!(dispatcher.has_handler(b));
        assert!(!dispatcher.has_handler(HandlerId(99)));
    }
}

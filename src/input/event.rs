//! Top-level input event type.

use crate::input::keyboard::KeyEvent;
use crate::input::pointer::PointerEvent;

/// An input event delivered to the dispatcher.
///
/// Key presses and releases are distinct events: the switcher opens and
/// cycles on key-down and commits on the key-up of the chord modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Key pressed.
    KeyDown(KeyEvent),
    /// Key released.
    KeyUp(KeyEvent),
    /// Pointer moved or pressed.
    Pointer(PointerEvent),
}

impl Event {
    /// Check if this is a key-down event.
    #[must_use]
    pub fn is_key_down(&self) -> bool {
        matches!(self, Self::KeyDown(_))
    }

    /// Check if this is a key-up event.
    #[must_use]
    pub fn is_key_up(&self) -> bool {
        matches!(self, Self::KeyUp(_))
    }

    /// Check if this is a pointer event.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    /// Get the key event if this is a key-down.
    #[must_use]
    pub fn key_down(&self) -> Option<&KeyEvent> {
        match self {
            Self::KeyDown(e) => Some(e),
            _ => None,
        }
    }

    /// Get the key event if this is a key-up.
    #[must_use]
    pub fn key_up(&self) -> Option<&KeyEvent> {
        match self {
            Self::KeyUp(e) => Some(e),
            _ => None,
        }
    }

    /// Get the pointer event if this is one.
    #[must_use]
    pub fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            Self::Pointer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PointerEvent> for Event {
    fn from(e: PointerEvent) -> Self {
        Self::Pointer(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keyboard::KeyCode;

    #[test]
    fn test_event_key_down() {
        let key = KeyEvent::char('q');
        let event = Event::KeyDown(key);
        assert!(event.is_key_down());
        assert!(!event.is_key_up());
        assert_eq!(event.key_down(), Some(&key));
        assert_eq!(event.key_up(), None);
    }

    #[test]
    fn test_event_key_up() {
        let key = KeyEvent::key(KeyCode::Alt);
        let event = Event::KeyUp(key);
        assert!(event.is_key_up());
        assert_eq!(event.key_up(), Some(&key));
    }

    #[test]
    fn test_event_pointer_conversion() {
        let pointer = PointerEvent::move_to(1, 2);
        let event: Event = pointer.into();
        assert!(event.is_pointer());
        assert_eq!(event.pointer(), Some(&pointer));
    }
}

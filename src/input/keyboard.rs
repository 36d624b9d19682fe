//! Keyboard event types and the switcher chord.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
        /// Super/Meta/Windows key.
        const SUPER = 0b0000_1000;
    }
}

/// A key code representing a keyboard key.
///
/// Bare modifier keys are listed so that a modifier release arrives as its
/// own key-up event; the switcher commits on the Alt release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (includes space).
    Char(char),
    /// Escape key.
    Esc,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Backspace key.
    Backspace,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Bare Alt/Option key.
    Alt,
    /// Bare Shift key.
    Shift,
    /// Bare Control key.
    Ctrl,
}

impl KeyCode {
    /// Check if this is a character key.
    #[must_use]
    pub fn is_char(&self) -> bool {
        matches!(self, Self::Char(_))
    }

    /// Check if this is a bare modifier key.
    #[must_use]
    pub fn is_modifier(&self) -> bool {
        matches!(self, Self::Alt | Self::Shift | Self::Ctrl)
    }

    /// Get the character if this is a character key.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// A keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// The letter half of the switcher chord.
    pub const CHORD_KEY: KeyCode = KeyCode::Char('q');

    /// Create a new key event.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key event with no modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Create a character key event.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// Create an Alt+key event.
    #[must_use]
    pub fn with_alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    /// Create a Shift+Alt+key event.
    #[must_use]
    pub fn with_shift_alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT | KeyModifiers::SHIFT)
    }

    /// Check if Shift is held.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Check if Alt is held.
    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    /// Check if this is the trigger chord (Alt+Q, Shift allowed).
    ///
    /// Shift selects the reverse direction but does not change whether the
    /// event counts as the chord. Ctrl or Super held alongside disqualifies
    /// the event: those combinations are left to the page and the platform
    /// rather than being swallowed as a switcher chord.
    #[must_use]
    pub fn is_chord(&self) -> bool {
        self.code == Self::CHORD_KEY
            && self.alt()
            && !self.modifiers.intersects(KeyModifiers::CTRL | KeyModifiers::SUPER)
    }

    /// Check if this is Escape.
    #[must_use]
    pub fn is_esc(&self) -> bool {
        self.code == KeyCode::Esc
    }

    /// Check if this key-up releases the chord modifier.
    #[must_use]
    pub fn is_chord_modifier(&self) -> bool {
        self.code == KeyCode::Alt
    }
}

impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        Self::char(c)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::key(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_creation() {
        let event = KeyEvent::char('a');
        assert_eq!(event.code, KeyCode::Char('a'));
        assert!(event.modifiers.is_empty());
    }

    #[test]
    fn test_chord_detection() {
        assert!(KeyEvent::with_alt(KeyCode::Char('q')).is_chord());
        assert!(KeyEvent::with_shift_alt(KeyCode::Char('q')).is_chord());
        assert!(!KeyEvent::char('q').is_chord());
        assert!(!KeyEvent::with_alt(KeyCode::Char('w')).is_chord());
        assert!(
            !KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT | KeyModifiers::CTRL).is_chord()
        );
    }

    #[test]
    fn test_chord_modifier_release() {
        assert!(KeyEvent::key(KeyCode::Alt).is_chord_modifier());
        assert!(!KeyEvent::key(KeyCode::Shift).is_chord_modifier());
        assert!(!KeyEvent::char('q').is_chord_modifier());
    }

    #[test]
    fn test_modifier_predicates() {
        let event = KeyEvent::with_shift_alt(KeyCode::Char('q'));
        assert!(event.alt());
        assert!(event.shift());
        assert!(KeyCode::Alt.is_modifier());
        assert!(!KeyCode::Char('a').is_modifier());
    }

    #[test]
    fn test_key_event_from_char() {
        let event: KeyEvent = 'z'.into();
        assert_eq!(event.code, KeyCode::Char('z'));
    }
}

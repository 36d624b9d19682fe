//! Pointer event types.

/// Kind of pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// Pointer moved (drives hover selection).
    Move,
    /// Button or touch press.
    Press,
}

/// A pointer event in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    /// X position (column).
    pub x: u32,
    /// Y position (row).
    pub y: u32,
    /// Kind of event.
    pub kind: PointerKind,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub fn new(x: u32, y: u32, kind: PointerKind) -> Self {
        Self { x, y, kind }
    }

    /// Create a move event.
    #[must_use]
    pub fn move_to(x: u32, y: u32) -> Self {
        Self::new(x, y, PointerKind::Move)
    }

    /// Create a press event.
    #[must_use]
    pub fn press(x: u32, y: u32) -> Self {
        Self::new(x, y, PointerKind::Press)
    }

    /// Check if this is a press event.
    #[must_use]
    pub fn is_press(&self) -> bool {
        self.kind == PointerKind::Press
    }
}

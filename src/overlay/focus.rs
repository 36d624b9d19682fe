//! Focus handles and the focus host seam.

/// Opaque handle to a focusable element in the embedding.
///
/// The embedding assigns handles to its own focusable elements; the
/// renderer holds one for the panel. Nothing here interprets the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FocusTarget(pub u64);

/// The embedding's focus authority.
///
/// The switcher records the active target before opening so cancel can
/// restore it, and pulls focus to the panel on open. Commit never restores
/// focus; the host is about to replace the whole context anyway.
pub trait FocusHost {
    /// The currently focused target, if any.
    fn active_target(&self) -> Option<FocusTarget>;

    /// Move focus to `target`.
    fn focus(&mut self, target: FocusTarget);
}

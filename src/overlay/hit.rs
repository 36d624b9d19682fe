//! Pointer hit testing for the overlay.

use super::view::Rect;

/// What a pointer position resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// The scrim outside the panel; a press here cancels.
    Backdrop,
    /// A candidate, by its index in the group sequence.
    Candidate(usize),
}

/// A hit map from viewport positions to overlay targets.
///
/// Regions are tested in reverse registration order, so a later
/// registration wins where regions overlap. The backdrop registers first
/// and covers the viewport; candidates register on top of it, which is why
/// a press on a candidate never reads as a backdrop press.
#[derive(Clone, Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    /// Create an empty hit map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Remove all registered regions.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register a hit region.
    pub fn register(&mut self, rect: Rect, target: HitTarget) {
        self.regions.push((rect, target));
    }

    /// Test which target is at a position.
    #[must_use]
    pub fn test(&self, x: u32, y: u32) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, target)| *target)
    }

    /// Number of registered regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no regions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

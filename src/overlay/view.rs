//! Overlay view-node types.
//!
//! The tree is plain owned data: a backdrop holding a panel holding one
//! candidate per group, in group order. The embedding paints from this
//! tree; nothing here touches rendering primitives.

/// Viewport dimensions in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check whether a point lies inside this rectangle.
    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x.saturating_add(self.width)
            && y < self.y.saturating_add(self.height)
    }
}

/// The full-viewport scrim behind the panel.
#[derive(Clone, Debug, PartialEq)]
pub struct BackdropView {
    /// Covers the whole viewport.
    pub rect: Rect,
    /// The selection panel.
    pub panel: PanelView,
}

/// The focusable panel listing the candidates.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    /// Panel bounds, centered in the viewport.
    pub rect: Rect,
    /// Focus handle the panel presents to the focus host.
    pub focus: super::FocusTarget,
    /// One candidate per group, in group order.
    pub candidates: Vec<CandidateView>,
}

/// One selectable entry representing a single group.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateView {
    /// Position in the group sequence; stable for the tree's lifetime.
    pub index: usize,
    /// Group title text.
    pub title: String,
    /// Solid swatch color hex.
    pub swatch: &'static str,
    /// Low-opacity background tint derived from the swatch hex.
    pub tint: String,
    /// Candidate bounds.
    pub rect: Rect,
    /// Whether this candidate carries the selected marker.
    pub selected: bool,
}

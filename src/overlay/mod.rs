//! Overlay rendering.
//!
//! The renderer owns the overlay's view-node tree while the switcher is
//! open: a full-viewport backdrop containing a centered, focusable panel
//! with one candidate node per group. It keeps the single selected marker
//! in sync with the controller's index, maintains the pointer hit map, and
//! moves focus to the panel on open so key events keep reaching the
//! switcher even if the page's focus was inside an embedded frame.

mod focus;
mod hit;
mod view;

pub use focus::{FocusHost, FocusTarget};
pub use hit::{HitMap, HitTarget};
pub use view::{BackdropView, CandidateView, PanelView, Rect, Size};

use unicode_width::UnicodeWidthStr;

use crate::color::{color_code, hex_to_rgba};
use crate::group::Group;
use crate::logging::{LogLevel, emit_log};

/// Alpha used for the candidate background tint.
const TINT_ALPHA: f32 = 0.2;

/// Horizontal padding inside the panel, in cells.
const PANEL_PAD_X: u32 = 2;

/// Vertical padding inside the panel, in cells.
const PANEL_PAD_Y: u32 = 1;

/// Width of the swatch column ("dot" plus gap).
const SWATCH_WIDTH: u32 = 2;

/// Materializes and destroys the overlay view tree.
///
/// The tree exists exactly while the switcher is open. Candidates are owned
/// nodes addressed by index; there is no lookup by synthesized identifier.
#[derive(Debug)]
pub struct OverlayRenderer {
    viewport: Size,
    panel_focus: FocusTarget,
    view: Option<BackdropView>,
    hits: HitMap,
}

impl OverlayRenderer {
    /// Create a renderer for the given viewport.
    ///
    /// `panel_focus` is the stable focus handle the panel presents to the
    /// embedding's focus host.
    #[must_use]
    pub fn new(viewport: Size, panel_focus: FocusTarget) -> Self {
        Self {
            viewport,
            panel_focus,
            view: None,
            hits: HitMap::new(),
        }
    }

    /// Whether an overlay tree currently exists.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.view.is_some()
    }

    /// The current view tree, if open.
    #[must_use]
    pub fn view(&self) -> Option<&BackdropView> {
        self.view.as_ref()
    }

    /// The panel's focus handle.
    #[must_use]
    pub fn panel_focus(&self) -> FocusTarget {
        self.panel_focus
    }

    /// Build the overlay tree for `groups` and focus the panel.
    ///
    /// A stale tree left over from a previous open is dropped first; the
    /// state machine should prevent that, but re-entrancy must not leave
    /// two overlays mounted.
    pub fn open<F: FocusHost>(&mut self, groups: &[Group], selected: usize, focus: &mut F) {
        if self.view.is_some() {
            emit_log(LogLevel::Warn, "overlay: stale tree dropped on re-open");
            self.close();
        }

        let backdrop = Rect::new(0, 0, self.viewport.width, self.viewport.height);
        let panel = self.layout_panel(groups);

        self.hits.register(backdrop, HitTarget::Backdrop);

        let mut candidates = Vec::with_capacity(groups.len());
        for (index, group) in groups.iter().enumerate() {
            let rect = Rect::new(
                panel.x + PANEL_PAD_X,
                panel.y + PANEL_PAD_Y + index as u32,
                panel.width.saturating_sub(PANEL_PAD_X * 2),
                1,
            );
            let swatch = color_code(group.color);
            let candidate = CandidateView {
                index,
                title: group.title.clone(),
                swatch,
                tint: hex_to_rgba(swatch, TINT_ALPHA),
                rect,
                selected: index == selected,
            };
            self.hits.register(rect, HitTarget::Candidate(index));
            candidates.push(candidate);
        }

        self.view = Some(BackdropView {
            rect: backdrop,
            panel: PanelView {
                rect: panel,
                focus: self.panel_focus,
                candidates,
            },
        });

        // Pull focus to the panel so the chord keys land on the dispatcher
        // even when the prior focus sat inside an embedded frame.
        focus.focus(self.panel_focus);
    }

    /// Move the selected marker to `selected`.
    ///
    /// A missing tree or out-of-range index makes this a no-op; a transient
    /// render/state mismatch must not take the page down.
    pub fn set_selected(&mut self, selected: usize) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        if selected >= view.panel.candidates.len() {
            emit_log(LogLevel::Warn, "overlay: selection index out of range");
            return;
        }
        for candidate in &mut view.panel.candidates {
            candidate.selected = candidate.index == selected;
        }
    }

    /// Drop the overlay tree and its hit regions.
    pub fn close(&mut self) {
        self.view = None;
        self.hits.clear();
    }

    /// Resolve a viewport position to whatever the pointer is over.
    #[must_use]
    pub fn hit_test(&self, x: u32, y: u32) -> Option<HitTarget> {
        self.hits.test(x, y)
    }

    fn layout_panel(&self, groups: &[Group]) -> Rect {
        let widest = groups
            .iter()
            .map(|g| g.title.width() as u32)
            .max()
            .unwrap_or(0);
        let width = (SWATCH_WIDTH + widest + PANEL_PAD_X * 2).min(self.viewport.width);
        let height = (groups.len() as u32 + PANEL_PAD_Y * 2).min(self.viewport.height);
        let x = (self.viewport.width - width) / 2;
        let y = (self.viewport.height - height) / 2;
        Rect::new(x, y, width, height)
    }
}

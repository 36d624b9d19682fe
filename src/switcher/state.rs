//! Selection state machine.

use crate::group::Group;

/// Cycle direction for a selection step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher indices, wrapping to 0.
    Forward,
    /// Toward lower indices, wrapping to the last index.
    Backward,
}

impl Direction {
    /// Direction selected by the chord: Shift reverses.
    #[must_use]
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse { Self::Backward } else { Self::Forward }
    }
}

/// The switcher's selection state: Closed, or Open over a group list.
///
/// While open and non-empty, `selected` is always a valid index. While
/// closed, the group list and index are stale and unobservable; every open
/// recomputes both from scratch.
#[derive(Clone, Debug, Default)]
pub struct SwitcherState {
    open: bool,
    groups: Vec<Group>,
    selected: usize,
}

impl SwitcherState {
    /// Create a closed state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the switcher is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The current group list. Meaningful only while open.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// The selected index. Meaningful only while open.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected group, if open and non-empty.
    #[must_use]
    pub fn selected_group(&self) -> Option<&Group> {
        if self.open {
            self.groups.get(self.selected)
        } else {
            None
        }
    }

    /// Transition Closed -> Open over `groups`.
    ///
    /// Entry index: with more than one group, index 1 when opening forward
    /// (the first tap jumps to the "next" group, index 0 being the current
    /// one) and the last index when opening in reverse; with exactly one
    /// group, index 0 either way. Empty lists refuse the transition.
    pub fn open_with(&mut self, groups: Vec<Group>, reverse: bool) -> bool {
        if groups.is_empty() {
            return false;
        }
        self.selected = if groups.len() > 1 {
            if reverse { groups.len() - 1 } else { 1 }
        } else {
            0
        };
        self.groups = groups;
        self.open = true;
        true
    }

    /// Step the selection one position, wrapping around.
    ///
    /// A no-op while closed; on a single-entry list the index stays 0.
    pub fn advance(&mut self, direction: Direction) {
        if !self.open || self.groups.is_empty() {
            return;
        }
        let len = self.groups.len();
        self.selected = match direction {
            Direction::Forward => (self.selected + 1) % len,
            Direction::Backward => (self.selected + len - 1) % len,
        };
    }

    /// Set the selection directly (pointer-driven).
    ///
    /// Out-of-range indices are ignored; the invariant that `selected` is
    /// valid while open must hold even against a stale hover.
    pub fn select(&mut self, index: usize) {
        if self.open && index < self.groups.len() {
            self.selected = index;
        }
    }

    /// Transition Open -> Closed, discarding the group list.
    pub fn close(&mut self) {
        self.open = false;
        self.groups.clear();
        self.selected = 0;
    }
}

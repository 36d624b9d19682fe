//! The interaction controller.
//!
//! [`Switcher`] ties the pieces together: key-down events drive the state
//! machine and trigger the group fetch, state changes drive the renderer,
//! and the key-up of the chord modifier commits the switch through the
//! host bridge. The bridge and the focus host are injected dependencies so
//! both are substitutable in tests.
//!
//! Event flow while closed: the trigger chord fetches groups and, on a
//! non-empty result, opens the overlay with the prior focus remembered.
//! While open: the chord cycles (Shift reverses), hover selects, a press on
//! a candidate commits, Escape or a press on the backdrop cancels, and the
//! Alt release commits.

mod state;

pub use state::{Direction, SwitcherState};

use crate::bridge::HostBridge;
use crate::input::{Event, EventDispatcher, KeyEvent, Outcome, Phase, PointerEvent, PointerKind};
use crate::logging::{LogLevel, emit_log};
use crate::overlay::{FocusHost, FocusTarget, HitTarget, OverlayRenderer, Size};

/// The switcher interaction controller.
///
/// One instance owns all mutable switcher state; every mutation happens
/// inside an event-handler call, which the single-threaded dispatch model
/// guarantees never run concurrently.
pub struct Switcher<B, F> {
    bridge: B,
    focus: F,
    state: SwitcherState,
    renderer: OverlayRenderer,
    last_focused: Option<FocusTarget>,
}

impl<B: HostBridge, F: FocusHost> Switcher<B, F> {
    /// Create a closed switcher.
    ///
    /// `panel_focus` is the focus handle the overlay panel will present to
    /// the focus host when it opens.
    #[must_use]
    pub fn new(bridge: B, focus: F, viewport: Size, panel_focus: FocusTarget) -> Self {
        Self {
            bridge,
            focus,
            state: SwitcherState::new(),
            renderer: OverlayRenderer::new(viewport, panel_focus),
            last_focused: None,
        }
    }

    /// Register the switcher's handler set on a dispatcher.
    ///
    /// Installed once at startup, at capture phase, ahead of any page
    /// handler; consumed events never propagate further. Never torn down.
    pub fn install(dispatcher: &mut EventDispatcher<Self>)
    where
        B: 'static,
        F: 'static,
    {
        dispatcher.register(Phase::Capture, |switcher: &mut Self, event| {
            match event {
                Event::KeyDown(key) => switcher.on_key_down(*key),
                _ => Outcome::Propagate,
            }
        });
        dispatcher.register(Phase::Capture, |switcher: &mut Self, event| {
            match event {
                Event::KeyUp(key) => switcher.on_key_up(*key),
                _ => Outcome::Propagate,
            }
        });
        dispatcher.register(Phase::Capture, |switcher: &mut Self, event| {
            match event {
                Event::Pointer(pointer) => switcher.on_pointer(*pointer),
                _ => Outcome::Propagate,
            }
        });
    }

    /// Whether the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The selection state.
    #[must_use]
    pub fn state(&self) -> &SwitcherState {
        &self.state
    }

    /// The overlay renderer (view tree access for the embedding's painter).
    #[must_use]
    pub fn renderer(&self) -> &OverlayRenderer {
        &self.renderer
    }

    /// The injected host bridge.
    #[must_use]
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Mutable access to the injected host bridge.
    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    /// The injected focus host.
    #[must_use]
    pub fn focus_host(&self) -> &F {
        &self.focus
    }

    /// Handle a key press.
    ///
    /// The trigger chord opens or cycles; Escape cancels while open. All
    /// other keys pass through untouched.
    pub fn on_key_down(&mut self, key: KeyEvent) -> Outcome {
        if key.is_chord() {
            if self.state.is_open() {
                self.advance(Direction::from_reverse(key.shift()));
            } else {
                self.try_open(key.shift());
            }
            return Outcome::Consumed;
        }

        if key.is_esc() && self.state.is_open() {
            self.cancel();
            return Outcome::Consumed;
        }

        Outcome::Propagate
    }

    /// Handle a key release. The chord modifier's release commits.
    pub fn on_key_up(&mut self, key: KeyEvent) -> Outcome {
        if key.is_chord_modifier() && self.state.is_open() {
            self.commit();
            return Outcome::Consumed;
        }
        Outcome::Propagate
    }

    /// Handle a pointer event.
    ///
    /// While open the overlay is modal: hover over a candidate selects it,
    /// a press on a candidate selects and commits, a press that lands on
    /// the backdrop itself cancels. While closed, pointer events pass
    /// through.
    pub fn on_pointer(&mut self, pointer: PointerEvent) -> Outcome {
        if !self.state.is_open() {
            return Outcome::Propagate;
        }

        match self.renderer.hit_test(pointer.x, pointer.y) {
            Some(HitTarget::Candidate(index)) => {
                self.select(index);
                if pointer.kind == PointerKind::Press {
                    self.commit();
                }
                Outcome::Consumed
            }
            Some(HitTarget::Backdrop) => {
                if pointer.kind == PointerKind::Press {
                    self.cancel();
                }
                Outcome::Consumed
            }
            // Overlay open but the position misses every region; should
            // not happen while the backdrop covers the viewport.
            None => Outcome::Propagate,
        }
    }

    /// Attempt the Closed -> Open transition.
    ///
    /// Fetches groups from the host; on error or an empty list the attempt
    /// is silently abandoned with a diagnostic log and no view mutation.
    fn try_open(&mut self, reverse: bool) {
        let groups = match self.bridge.fetch_groups() {
            Ok(groups) => groups,
            Err(e) => {
                emit_log(LogLevel::Warn, &format!("switcher: group fetch failed: {e}"));
                return;
            }
        };
        if groups.is_empty() {
            emit_log(LogLevel::Info, "switcher: no groups, open abandoned");
            return;
        }

        // Remember where focus was so cancel can put it back.
        self.last_focused = self.focus.active_target();

        self.state.open_with(groups, reverse);
        self.renderer.open(
            self.state.groups(),
            self.state.selected_index(),
            &mut self.focus,
        );
    }

    /// Step the selection and sync the marker.
    fn advance(&mut self, direction: Direction) {
        self.state.advance(direction);
        self.renderer.set_selected(self.state.selected_index());
    }

    /// Set the selection directly and sync the marker.
    fn select(&mut self, index: usize) {
        self.state.select(index);
        self.renderer.set_selected(self.state.selected_index());
    }

    /// Commit: one switch notification for the selected group, then close.
    ///
    /// Focus is not restored; the host is about to replace the context.
    fn commit(&mut self) {
        if let Some(group) = self.state.selected_group() {
            self.bridge.commit_switch(group.id);
        }
        self.last_focused = None;
        self.close_overlay();
    }

    /// Cancel: close without touching host state, restoring prior focus.
    fn cancel(&mut self) {
        self.close_overlay();
        if let Some(target) = self.last_focused.take() {
            self.focus.focus(target);
        }
    }

    fn close_overlay(&mut self) {
        self.state.close();
        self.renderer.close();
    }
}

impl<B: std::fmt::Debug, F: std::fmt::Debug> std::fmt::Debug for Switcher<B, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Switcher")
            .field("open", &self.state.is_open())
            .field("bridge", &self.bridge)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

//! `groupswitch` - Alt-tab style tab-group switcher
//!
//! An interaction engine for a keyboard-driven group switcher overlay:
//! a modifier+key chord opens an overlay listing groups, repeated chord
//! presses cycle the selection (Shift reverses), and releasing the
//! modifier commits the switch through a pluggable host bridge.

// Crate-level lint configuration
#![allow(dead_code)] // Public API functions not yet used internally
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)] // Allow OverlayRenderer etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod bridge;
pub mod color;
pub mod error;
pub mod group;
pub mod input;
pub mod logging;
pub mod overlay;
pub mod switcher;

// Re-export core types at crate root
pub use bridge::{
    GroupsResponse, HostBridge, HostRequest, MessagePort, PortBridge, UnreachableBridge,
};
pub use color::{FALLBACK_HEX, color_code, color_code_for_name, hex_channels, hex_to_rgba};
pub use error::{Error, Result};
pub use group::{Group, GroupColor, GroupId};
pub use logging::{LogLevel, emit_log, set_log_callback};

// Re-export input types
pub use input::{
    Event, EventDispatcher, HandlerId, KeyCode, KeyEvent, KeyModifiers, Outcome, Phase,
    PointerEvent, PointerKind,
};

// Re-export the controller and renderer surfaces
pub use overlay::{FocusHost, FocusTarget, HitTarget, OverlayRenderer, Rect, Size};
pub use switcher::{Direction, Switcher, SwitcherState};

//! Input events and dispatch.
//!
//! This module provides the event types the switcher consumes (key down,
//! key up, pointer) and an explicit capture-phase dispatcher: handlers
//! register once with a phase and receive events in a defined order, and a
//! handler that consumes an event stops it from reaching later handlers.

mod dispatch;
mod event;
mod keyboard;
mod pointer;

pub use dispatch::{EventDispatcher, HandlerId, Outcome, Phase};
pub use event::Event;
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use pointer::{PointerEvent, PointerKind};

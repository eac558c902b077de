//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It defines the
//! non-blocking [`InputSource`] contract the engine polls once per frame, maps
//! `crossterm` key events to plain characters, and owns the terminal's raw mode
//! for as long as a [`CrosstermInput`] is alive.

pub mod error;
pub mod map;
pub mod source;
pub mod terminal;

pub use tui_instant_types as types;

pub use error::InputError;
pub use map::key_to_char;
pub use source::{InputSource, ScriptedInput};
pub use terminal::{CrosstermInput, RawModeGuard};

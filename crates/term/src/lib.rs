//! Terminal output module.
//!
//! The engine hands every finished [`Grid`](crate::core::Grid) to a [`Screen`].
//! Three are provided:
//!
//! - [`PlainScreen`]: prints a run of blank lines then the rows, to any `Write`
//! - [`FrameLog`]: keeps every frame in memory, for headless runs and tests
//! - [`TerminalRenderer`]: redraws in place on the alternate screen, rewriting
//!   only the cells that changed since the previous frame

pub mod error;
pub mod palette;
pub mod renderer;
pub mod screen;

pub use tui_instant_core as core;
pub use tui_instant_types as types;

pub use error::DisplayError;
pub use palette::{GlyphStyle, Palette};
pub use renderer::{TerminalRenderer, CELL_COLUMNS, MAX_GRID_WIDTH};
pub use screen::{FrameLog, PlainScreen, Screen};

//! Instant terminal grid games (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_instant::{core,engine,input,term,types}`.

pub use tui_instant_core as core;
pub use tui_instant_engine as engine;
pub use tui_instant_input as input;
pub use tui_instant_term as term;
pub use tui_instant_types as types;

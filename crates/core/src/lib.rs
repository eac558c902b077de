//! Core game-object model - pure, deterministic, and testable
//!
//! This crate contains the playfield, the entity kinds and the registry that
//! orders them. It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: the same key sequence always produces the same frames
//! - **Testable**: every rule is exercised by plain unit tests
//! - **Portable**: can run headless, in a terminal, or behind any other display
//!
//! # Module Structure
//!
//! - [`grid`]: character buffer rebuilt every frame
//! - [`entity`]: positioned glyphs with a closed set of behaviors (player, wall, enemy, item, prop)
//! - [`context`]: read-only view of engine state handed to `Entity::update`
//! - [`registry`]: ordered entity collection; registration order is draw order
//! - [`arena`]: deterministic bordered-room generator
//!
//! # Example
//!
//! ```
//! use tui_instant_core::{Entity, FrameInput, Grid, TickContext};
//!
//! let mut grid = Grid::new(5, 5);
//! let mut player = Entity::player(1, 1);
//!
//! let ctx = TickContext::detached(FrameInput::new(5, 5).with_key('d'));
//! player.update(&ctx);
//! player.draw(&mut grid);
//!
//! assert_eq!(grid.render()[1], ". . @ . .");
//! ```

pub mod arena;
pub mod context;
pub mod entity;
pub mod grid;
pub mod registry;

pub use tui_instant_types as types;

// Re-export commonly used types for convenience
pub use arena::ArenaLayout;
pub use context::{FrameInput, TickContext};
pub use entity::{
    Behavior, Entity, Outcome, Patrol, PlayerControl, ENEMY_DAMAGE, PATROL_ORDER, PLAYER_ARMOR,
    PLAYER_HP,
};
pub use grid::Grid;
pub use registry::{EntityId, Registry, Slot};

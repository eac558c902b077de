//! Game loop engine.
//!
//! [`Engine`] owns the grid and the entity registry and drives the per-frame cycle:
//!
//! 1. poll at most one key from an [`InputSource`](crate::input::InputSource)
//!    (non-blocking), lower-case it, remember it as `last_key`; the quit key stops the loop
//! 2. update every active entity, then drop the inactive ones
//! 3. reset the grid, paint the entities in registration order, present it on a
//!    [`Screen`](crate::term::Screen)
//!
//! # Example
//!
//! ```
//! use tui_instant_core::Entity;
//! use tui_instant_engine::Engine;
//! use tui_instant_input::ScriptedInput;
//! use tui_instant_term::FrameLog;
//!
//! let mut engine = Engine::with_size(5, 5);
//! engine.add(Entity::player(1, 1));
//!
//! let mut input = ScriptedInput::from_keys(['d', 'q']);
//! let mut frames = FrameLog::new();
//! engine.run(&mut input, &mut frames).unwrap();
//!
//! assert_eq!(frames.frames()[0][1], ". . @ . .");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod pace;

pub use tui_instant_core as core;
pub use tui_instant_input as input;
pub use tui_instant_term as term;
pub use tui_instant_types as types;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::EngineError;
pub use pace::FramePacer;

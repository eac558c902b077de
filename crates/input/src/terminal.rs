//! Keyboard input from a real terminal via crossterm.
//!
//! Raw mode is held by a [`RawModeGuard`] for as long as the source lives and is
//! restored on drop, so every exit path (including `?` and unwinding) gives the
//! terminal back.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal;
use tracing::{debug, error, warn};

use crate::error::InputError;
use crate::map::key_to_char;
use crate::source::InputSource;

/// Scoped raw-mode acquisition.
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn acquire() -> Result<Self, InputError> {
        terminal::enable_raw_mode().map_err(InputError::TerminalUnavailable)?;
        debug!("raw mode enabled");
        Ok(Self { active: true })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Restore cooked mode. Later calls are no-ops.
    pub fn release(&mut self) -> Result<(), InputError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode().map_err(InputError::Restore)?;
        debug!("raw mode disabled");
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            error!(?err, "failed to disable raw mode");
        }
    }
}

/// Non-blocking keyboard source backed by crossterm's event queue.
#[derive(Debug)]
pub struct CrosstermInput {
    guard: RawModeGuard,
}

impl CrosstermInput {
    /// Put the terminal into raw mode. Fails if no terminal is attached.
    pub fn acquire() -> Result<Self, InputError> {
        Ok(Self {
            guard: RawModeGuard::acquire()?,
        })
    }

    fn next_key(&mut self) -> io::Result<Option<char>> {
        // Skip non-key events (resize, focus, mouse) until a usable key or an empty queue.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(ch) = key_to_char(key) {
                    return Ok(Some(ch));
                }
            }
        }
        Ok(None)
    }
}

impl InputSource for CrosstermInput {
    fn poll(&mut self) -> Option<char> {
        if !self.guard.is_active() {
            return None;
        }
        match self.next_key() {
            Ok(key) => key,
            Err(err) => {
                warn!(?err, "failed to read terminal event");
                None
            }
        }
    }

    fn release(&mut self) -> Result<(), InputError> {
        self.guard.release()
    }
}

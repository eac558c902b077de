use std::io;

use thiserror::Error;

/// Failures acquiring or releasing the keyboard.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("terminal input is not available: {0}")]
    TerminalUnavailable(#[source] io::Error),

    #[error("failed to restore terminal mode: {0}")]
    Restore(#[source] io::Error),
}

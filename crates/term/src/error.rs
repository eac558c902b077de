use std::io;

use thiserror::Error;

/// Failures writing a frame out.
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("failed to write frame: {0}")]
    Io(#[from] io::Error),

    #[error("grid is {width} cells wide, the terminal display fits at most {max}")]
    TooWide { width: u16, max: u16 },
}

//! The display contract plus the two non-interactive implementations.

use std::io::Write;

use crate::core::Grid;
use crate::error::DisplayError;
use crate::types::CLEAR_LINES;

/// Receives one finished frame per loop iteration.
pub trait Screen {
    fn present(&mut self, grid: &Grid) -> Result<(), DisplayError>;

    /// Give back any terminal state held by the screen. Safe to call twice.
    fn release(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}

impl<T: Screen + ?Sized> Screen for &mut T {
    fn present(&mut self, grid: &Grid) -> Result<(), DisplayError> {
        (**self).present(grid)
    }

    fn release(&mut self) -> Result<(), DisplayError> {
        (**self).release()
    }
}

impl<T: Screen + ?Sized> Screen for Box<T> {
    fn present(&mut self, grid: &Grid) -> Result<(), DisplayError> {
        (**self).present(grid)
    }

    fn release(&mut self) -> Result<(), DisplayError> {
        (**self).release()
    }
}

/// Line-oriented output: a run of blank lines "clears" the screen, then the rows follow.
#[derive(Debug)]
pub struct PlainScreen<W: Write> {
    out: W,
    clear_lines: usize,
    newline: &'static str,
}

impl<W: Write> PlainScreen<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            clear_lines: CLEAR_LINES,
            newline: "\n",
        }
    }

    /// Use `\r\n` line endings, required while the terminal is in raw mode.
    pub fn raw(mut self) -> Self {
        self.newline = "\r\n";
        self
    }

    pub fn with_clear_lines(mut self, lines: usize) -> Self {
        self.clear_lines = lines;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for PlainScreen<W> {
    fn present(&mut self, grid: &Grid) -> Result<(), DisplayError> {
        for _ in 0..self.clear_lines {
            self.out.write_all(self.newline.as_bytes())?;
        }
        for row in grid.render() {
            self.out.write_all(row.as_bytes())?;
            self.out.write_all(self.newline.as_bytes())?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps the rendered rows of every presented frame in memory.
#[derive(Debug, Clone, Default)]
pub struct FrameLog {
    frames: Vec<Vec<String>>,
}

impl FrameLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    pub fn last(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Screen for FrameLog {
    fn present(&mut self, grid: &Grid) -> Result<(), DisplayError> {
        self.frames.push(grid.render());
        Ok(())
    }
}

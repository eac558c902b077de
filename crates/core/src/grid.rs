//! Grid module - the visible playfield
//!
//! The grid is a `width x height` buffer of glyphs stored row-major in a flat `Vec`.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! It is rebuilt every frame: reset to the background glyph, then painted by entities.

use crate::types::BACKGROUND_GLYPH;

/// Rectangular character buffer representing one rendered frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    background: char,
    /// Flat array of glyphs, row-major order (y * width + x)
    cells: Vec<char>,
}

impl Grid {
    /// Create a grid filled with the default background glyph
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_background(width, height, BACKGROUND_GLYPH)
    }

    pub fn with_background(width: u16, height: u16, background: char) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            background,
            cells: vec![background; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn background(&self) -> char {
        self.background
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Check if (x, y) lies within `[0, width) x [0, height)`
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Get the glyph at (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Fill every cell with the background glyph
    pub fn reset(&mut self) {
        self.cells.fill(self.background);
    }

    /// Write a glyph at (x, y)
    /// Returns false (and leaves the grid untouched) if out of bounds
    pub fn paint(&mut self, x: i32, y: i32, glyph: char) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = glyph;
                true
            }
            None => false,
        }
    }

    /// Glyphs of row `y`, or an empty slice past the bottom edge
    pub fn row(&self, y: u16) -> &[char] {
        if y >= self.height {
            return &[];
        }
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    /// Rows of glyphs, each joined with a single space for display
    pub fn render(&self) -> Vec<String> {
        (0..self.height).map(|y| join_row(self.row(y))).collect()
    }

    /// All rendered rows joined with newlines
    pub fn to_text(&self) -> String {
        self.render().join("\n")
    }
}

fn join_row(row: &[char]) -> String {
    let mut line = String::with_capacity(row.len() * 2);
    for (i, ch) in row.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push(*ch);
    }
    line
}

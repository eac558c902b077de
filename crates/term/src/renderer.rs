//! TerminalRenderer: draws grids in place on the alternate screen.
//!
//! Each grid cell occupies two terminal columns (glyph + separator), matching the
//! plain row format. The first frame and any change in grid size trigger a full
//! redraw; after that only runs of changed cells are rewritten.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};
use tracing::{debug, error};

use crate::core::Grid;
use crate::error::DisplayError;
use crate::palette::{GlyphStyle, Palette};
use crate::screen::Screen;

/// Terminal columns per grid cell.
pub const CELL_COLUMNS: u16 = 2;

/// Widest grid whose every cell has an addressable terminal column.
pub const MAX_GRID_WIDTH: u16 = u16::MAX / CELL_COLUMNS;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    palette: Palette,
    last: Option<Grid>,
    entered: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_palette(Palette::default())
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            stdout: io::stdout(),
            palette,
            last: None,
            entered: false,
        }
    }

    pub fn enter(&mut self) -> Result<(), DisplayError> {
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        self.entered = true;
        self.invalidate();
        debug!("entered alternate screen");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<(), DisplayError> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        debug!("left alternate screen");
        Ok(())
    }

    /// Force the next frame to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    fn full_redraw(&mut self, grid: &Grid) -> Result<(), DisplayError> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<GlyphStyle> = None;
        for y in 0..grid.height() {
            for (x, &glyph) in grid.row(y).iter().enumerate() {
                if x > 0 {
                    self.stdout.queue(Print(' '))?;
                }
                self.print_glyph(glyph, &mut current)?;
            }
            if y + 1 < grid.height() {
                self.stdout.queue(Print("\r\n"))?;
            }
        }

        self.finish_frame()
    }

    fn diff_redraw(&mut self, next: &Grid, prev: &Grid) -> Result<(), DisplayError> {
        let mut current: Option<GlyphStyle> = None;

        for (x, y, len) in changed_runs(prev, next) {
            self.stdout.queue(cursor::MoveTo(column(x), y))?;
            let row = next.row(y);
            for dx in 0..len {
                if dx > 0 {
                    self.stdout.queue(Print(' '))?;
                }
                let glyph = row[(x + dx) as usize];
                self.print_glyph(glyph, &mut current)?;
            }
        }

        self.finish_frame()
    }

    fn print_glyph(
        &mut self,
        glyph: char,
        current: &mut Option<GlyphStyle>,
    ) -> Result<(), DisplayError> {
        let style = self.palette.style_for(glyph);
        if *current != Some(style) {
            self.apply_style(style)?;
            *current = Some(style);
        }
        self.stdout.queue(Print(glyph))?;
        Ok(())
    }

    fn apply_style(&mut self, style: GlyphStyle) -> Result<(), DisplayError> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(SetForegroundColor(style.fg))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }

    fn finish_frame(&mut self) -> Result<(), DisplayError> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Screen for TerminalRenderer {
    fn present(&mut self, grid: &Grid) -> Result<(), DisplayError> {
        check_width(grid)?;
        match self.last.take() {
            Some(mut prev) if same_size(&prev, grid) => {
                self.diff_redraw(grid, &prev)?;
                prev.clone_from(grid);
                self.last = Some(prev);
            }
            _ => {
                self.full_redraw(grid)?;
                self.last = Some(grid.clone());
            }
        }
        Ok(())
    }

    fn release(&mut self) -> Result<(), DisplayError> {
        self.exit()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(err) = self.exit() {
            error!(?err, "failed to leave alternate screen");
        }
    }
}

fn check_width(grid: &Grid) -> Result<(), DisplayError> {
    if grid.width() > MAX_GRID_WIDTH {
        return Err(DisplayError::TooWide {
            width: grid.width(),
            max: MAX_GRID_WIDTH,
        });
    }
    Ok(())
}

/// Terminal column of grid cell `x`. Saturates instead of wrapping.
fn column(x: u16) -> u16 {
    x.saturating_mul(CELL_COLUMNS)
}

fn same_size(a: &Grid, b: &Grid) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Horizontal runs of cells that differ between two equally sized grids,
/// as `(x, y, len)` in grid coordinates.
fn changed_runs(prev: &Grid, next: &Grid) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    if !same_size(prev, next) {
        // Size changed: treat every row as dirty.
        for y in 0..next.height() {
            runs.push((0, y, next.width()));
        }
        return runs;
    }

    for y in 0..next.height() {
        let (a, b) = (prev.row(y), next.row(y));
        let w = b.len();
        let mut x = 0;
        while x < w {
            if a[x] == b[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && a[x] != b[x] {
                x += 1;
            }
            runs.push((start as u16, y, (x - start) as u16));
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = Grid::new(5, 1);
        let mut b = Grid::new(5, 1);
        for x in 1..=3 {
            b.paint(x, 0, 'X');
        }
        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3)]);
    }

    #[test]
    fn changed_runs_split_on_unchanged_cells() {
        let a = Grid::new(5, 2);
        let mut b = Grid::new(5, 2);
        b.paint(0, 1, '@');
        b.paint(2, 1, '#');
        b.paint(4, 0, 'E');
        assert_eq!(changed_runs(&a, &b), vec![(4, 0, 1), (0, 1, 1), (2, 1, 1)]);
    }

    #[test]
    fn identical_grids_have_no_runs() {
        let a = Grid::new(4, 4);
        assert!(changed_runs(&a, &a.clone()).is_empty());
    }

    #[test]
    fn changed_runs_on_widest_grid_stay_addressable() {
        let a = Grid::new(MAX_GRID_WIDTH, 1);
        let mut b = a.clone();
        b.paint(MAX_GRID_WIDTH as i32 - 1, 0, '@');

        let runs = changed_runs(&a, &b);
        assert_eq!(runs, vec![(MAX_GRID_WIDTH - 1, 0, 1)]);
        assert_eq!(column(runs[0].0), u16::MAX - 3);
    }

    #[test]
    fn too_wide_grid_is_refused_before_drawing() {
        let mut renderer = TerminalRenderer::new();
        let mut grid = Grid::new(40_000, 1);
        let err = renderer.present(&grid).unwrap_err();
        assert!(matches!(
            err,
            DisplayError::TooWide {
                width: 40_000,
                max: MAX_GRID_WIDTH
            }
        ));

        grid.paint(39_999, 0, '@');
        assert!(renderer.present(&grid).is_err());
        assert!(renderer.last.is_none());
    }

    #[test]
    fn invalidate_drops_the_previous_frame() {
        let mut renderer = TerminalRenderer::new();
        renderer.last = Some(Grid::new(2, 2));
        renderer.invalidate();
        assert!(renderer.last.is_none());
    }

    #[test]
    fn column_saturates() {
        assert_eq!(column(3), 6);
        assert_eq!(column(u16::MAX), u16::MAX);
    }

    #[test]
    fn resized_grid_marks_every_row() {
        let a = Grid::new(2, 2);
        let b = Grid::new(3, 2);
        assert_eq!(changed_runs(&a, &b), vec![(0, 0, 3), (0, 1, 3)]);
    }
}

//! Glyph styling for the interactive renderer.

use crossterm::style::Color;

use crate::types::{BACKGROUND_GLYPH, ENEMY_GLYPH, ITEM_GLYPH, PLAYER_GLYPH, WALL_GLYPH};

/// Minimal per-glyph styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphStyle {
    pub fg: Color,
    pub bold: bool,
    pub dim: bool,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bold: false,
            dim: false,
        }
    }
}

impl GlyphStyle {
    pub const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// Lookup from glyph to style; unknown glyphs use the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<(char, GlyphStyle)>,
    fallback: GlyphStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
            .with(BACKGROUND_GLYPH, GlyphStyle::fg(Color::DarkGrey).dim())
            .with(WALL_GLYPH, GlyphStyle::fg(Color::Grey))
            .with(PLAYER_GLYPH, GlyphStyle::fg(Color::Yellow).bold())
            .with(ENEMY_GLYPH, GlyphStyle::fg(Color::Red).bold())
            .with(ITEM_GLYPH, GlyphStyle::fg(Color::Cyan))
    }
}

impl Palette {
    /// Every glyph in the terminal's default colors.
    pub fn plain() -> Self {
        Self {
            entries: Vec::new(),
            fallback: GlyphStyle::default(),
        }
    }

    /// Set (or replace) the style for `glyph`.
    pub fn with(mut self, glyph: char, style: GlyphStyle) -> Self {
        match self.entries.iter_mut().find(|(ch, _)| *ch == glyph) {
            Some(entry) => entry.1 = style,
            None => self.entries.push((glyph, style)),
        }
        self
    }

    pub fn style_for(&self, glyph: char) -> GlyphStyle {
        self.entries
            .iter()
            .find(|(ch, _)| *ch == glyph)
            .map(|(_, style)| *style)
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_glyphs_are_styled() {
        let palette = Palette::default();
        assert_eq!(palette.style_for('@').fg, Color::Yellow);
        assert!(palette.style_for('@').bold);
        assert!(palette.style_for('.').dim);
    }

    #[test]
    fn unknown_glyphs_fall_back() {
        assert_eq!(Palette::default().style_for('z'), GlyphStyle::default());
    }

    #[test]
    fn with_replaces_existing_entry() {
        let palette = Palette::plain()
            .with('#', GlyphStyle::fg(Color::Blue))
            .with('#', GlyphStyle::fg(Color::Green));
        assert_eq!(palette.style_for('#').fg, Color::Green);
    }
}

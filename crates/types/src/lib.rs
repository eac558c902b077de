//! Core types shared across the workspace
//! This module contains pure data types with no external dependencies

/// Default playfield dimensions
pub const DEFAULT_WIDTH: u16 = 20;
pub const DEFAULT_HEIGHT: u16 = 10;

/// Glyph every cell is reset to at the start of a frame
pub const BACKGROUND_GLYPH: char = '.';

/// Key that stops the game loop (compared after lower-casing)
pub const QUIT_KEY: char = 'q';

/// Blank lines printed by the plain display to push the previous frame away
pub const CLEAR_LINES: usize = 30;

/// Default glyphs for the built-in entity kinds
pub const PLAYER_GLYPH: char = '@';
pub const WALL_GLYPH: char = '#';
pub const ENEMY_GLYPH: char = 'E';
pub const ITEM_GLYPH: char = '!';

/// Movement keys
pub const KEY_UP: char = 'w';
pub const KEY_LEFT: char = 'a';
pub const KEY_DOWN: char = 's';
pub const KEY_RIGHT: char = 'd';

/// Cardinal movement direction on the grid.
///
/// Coordinates grow to the right (x) and downwards (y), so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a movement key to a direction (case-insensitive)
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            KEY_UP => Some(Direction::Up),
            KEY_DOWN => Some(Direction::Down),
            KEY_LEFT => Some(Direction::Left),
            KEY_RIGHT => Some(Direction::Right),
            _ => None,
        }
    }

    /// The key bound to this direction
    pub fn key(&self) -> char {
        match self {
            Direction::Up => KEY_UP,
            Direction::Down => KEY_DOWN,
            Direction::Left => KEY_LEFT,
            Direction::Right => KEY_RIGHT,
        }
    }

    /// Unit step `(dx, dy)`
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// How a player-controlled entity consumes keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Act only on the key polled during the current tick.
    #[default]
    OnPress,
    /// Keep acting on the most recent key every tick until another arrives.
    Held,
}

/// Engine lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

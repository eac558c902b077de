//! Bordered arena generator.
//!
//! Builds a rectangular room walled on every edge with the player in the
//! top-left interior corner, enemies in the other interior corners and a
//! single item in the middle. Fully deterministic.

use crate::entity::Entity;

/// Smallest arena with a non-empty interior.
pub const MIN_ARENA_SIZE: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaLayout {
    width: u16,
    height: u16,
}

impl ArenaLayout {
    /// Dimensions below [`MIN_ARENA_SIZE`] are raised to it.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width.max(MIN_ARENA_SIZE),
            height: height.max(MIN_ARENA_SIZE),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn right(&self) -> i32 {
        self.width as i32 - 1
    }

    fn bottom(&self) -> i32 {
        self.height as i32 - 1
    }

    /// Wall ring along every edge, each cell exactly once.
    pub fn walls(&self) -> Vec<Entity> {
        let mut walls = Vec::with_capacity(2 * (self.width as usize + self.height as usize));
        for x in 0..=self.right() {
            walls.push(Entity::wall(x, 0));
            walls.push(Entity::wall(x, self.bottom()));
        }
        for y in 1..self.bottom() {
            walls.push(Entity::wall(0, y));
            walls.push(Entity::wall(self.right(), y));
        }
        walls
    }

    pub fn player_start(&self) -> (i32, i32) {
        (1, 1)
    }

    /// Interior corners other than the player's, farthest first.
    pub fn enemy_starts(&self) -> Vec<(i32, i32)> {
        let (r, b) = (self.right() - 1, self.bottom() - 1);
        let mut spots: Vec<(i32, i32)> = Vec::with_capacity(3);
        for spot in [(r, b), (r, 1), (1, b)] {
            if spot != self.player_start() && !spots.contains(&spot) {
                spots.push(spot);
            }
        }
        spots
    }

    /// Center cell, unless it coincides with the player start.
    pub fn item_spot(&self) -> Option<(i32, i32)> {
        let center = (self.width as i32 / 2, self.height as i32 / 2);
        (center != self.player_start()).then_some(center)
    }

    /// All entities in draw order: walls, item, enemies, then the player on top.
    pub fn entities(&self, enemies: usize) -> Vec<Entity> {
        let mut out = self.walls();
        if let Some((x, y)) = self.item_spot() {
            out.push(Entity::item(x, y));
        }
        for (x, y) in self.enemy_starts().into_iter().take(enemies) {
            out.push(Entity::enemy(x, y));
        }
        let (px, py) = self.player_start();
        out.push(Entity::player(px, py));
        out
    }
}

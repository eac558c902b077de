//! Entity module - positioned, drawable, updatable units
//!
//! Every entity shares the same data (position, glyph, visibility) and carries a
//! [`Behavior`] from a closed set of kinds. `update` reads shared state through a
//! [`TickContext`] and mutates only the entity itself; `draw` paints the glyph.
//!
//! Movement never leaves the grid and never enters a cell held by a solid entity:
//! each step is checked against the context before it is committed.
//!
//! Enemies do not block. A player sharing a cell with an enemy at the end of its
//! own update takes that enemy's contact damage, reduced by armor but never below
//! one point. At zero hit points the player deactivates and asks the engine to stop.

use arrayvec::ArrayVec;

use crate::context::TickContext;
use crate::grid::Grid;
use crate::types::{Direction, KeyMode, ENEMY_GLYPH, ITEM_GLYPH, PLAYER_GLYPH, WALL_GLYPH};

/// Default patrol priority: right, down, left, up.
pub const PATROL_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Up,
];

/// Starting hit points of a player.
pub const PLAYER_HP: u32 = 100;
/// Starting armor of a player.
pub const PLAYER_ARMOR: u32 = 10;
/// Contact damage of an enemy.
pub const ENEMY_DAMAGE: u32 = 10;

/// What an entity asks of the engine after its update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Continue,
    /// End the game loop once the current frame is rendered.
    Stop,
}

/// Keyboard-driven movement settings and the player's health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerControl {
    /// Cells moved per accepted key
    pub speed: u8,
    pub mode: KeyMode,
    pub hp: u32,
    /// Subtracted from every hit
    pub armor: u32,
}

impl Default for PlayerControl {
    fn default() -> Self {
        Self {
            speed: 1,
            mode: KeyMode::OnPress,
            hp: PLAYER_HP,
            armor: PLAYER_ARMOR,
        }
    }
}

impl PlayerControl {
    /// Hit points lost to one hit of `damage`.
    pub fn hit_by(&self, damage: u32) -> u32 {
        damage.saturating_sub(self.armor).max(1)
    }
}

/// Scripted AI: try each direction in order, take the first that moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patrol {
    order: ArrayVec<Direction, 4>,
    /// Move once every `period` ticks
    period: u32,
    elapsed: u32,
    /// Dealt to a player on the same cell; 0 makes the enemy harmless
    damage: u32,
}

impl Default for Patrol {
    fn default() -> Self {
        Self {
            order: ArrayVec::from(PATROL_ORDER),
            period: 1,
            elapsed: 0,
            damage: ENEMY_DAMAGE,
        }
    }
}

impl Patrol {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the priority order. Repeated directions are dropped.
    pub fn with_order(mut self, order: impl IntoIterator<Item = Direction>) -> Self {
        self.order.clear();
        for dir in order {
            if !self.order.contains(&dir) {
                self.order.push(dir);
            }
        }
        self
    }

    /// A period of 0 is treated as 1 (move every tick).
    pub fn with_period(mut self, period: u32) -> Self {
        self.period = period.max(1);
        self
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn order(&self) -> &[Direction] {
        &self.order
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    /// Advance the move clock; true when this tick is a move tick.
    fn ready(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.period {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}

/// The closed set of entity kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Behavior {
    /// Moves with w/a/s/d.
    Player(PlayerControl),
    /// Impassable static obstacle.
    Wall,
    /// Patrolling AI.
    Enemy(Patrol),
    /// Pickup that disappears once a player steps on it.
    Item,
    /// Passable decoration with no update logic.
    Prop,
}

impl Behavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            Behavior::Player(_) => "player",
            Behavior::Wall => "wall",
            Behavior::Enemy(_) => "enemy",
            Behavior::Item => "item",
            Behavior::Prop => "prop",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub active: bool,
    pub behavior: Behavior,
}

impl Entity {
    pub fn new(x: i32, y: i32, glyph: char, behavior: Behavior) -> Self {
        Self {
            x,
            y,
            glyph,
            active: true,
            behavior,
        }
    }

    pub fn player(x: i32, y: i32) -> Self {
        Self::new(x, y, PLAYER_GLYPH, Behavior::Player(PlayerControl::default()))
    }

    pub fn wall(x: i32, y: i32) -> Self {
        Self::new(x, y, WALL_GLYPH, Behavior::Wall)
    }

    pub fn enemy(x: i32, y: i32) -> Self {
        Self::new(x, y, ENEMY_GLYPH, Behavior::Enemy(Patrol::default()))
    }

    pub fn item(x: i32, y: i32) -> Self {
        Self::new(x, y, ITEM_GLYPH, Behavior::Item)
    }

    pub fn prop(x: i32, y: i32, glyph: char) -> Self {
        Self::new(x, y, glyph, Behavior::Prop)
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn kind(&self) -> &'static str {
        self.behavior.as_str()
    }

    pub fn is_solid(&self) -> bool {
        matches!(self.behavior, Behavior::Wall)
    }

    pub fn is_player(&self) -> bool {
        matches!(self.behavior, Behavior::Player(_))
    }

    /// Remaining hit points, for players.
    pub fn hp(&self) -> Option<u32> {
        match &self.behavior {
            Behavior::Player(control) => Some(control.hp),
            _ => None,
        }
    }

    /// Damage this entity deals to a player on its cell, if any.
    pub fn contact_damage(&self) -> Option<u32> {
        match &self.behavior {
            Behavior::Enemy(patrol) if patrol.damage > 0 => Some(patrol.damage),
            _ => None,
        }
    }

    /// Advance this entity by one tick.
    pub fn update(&mut self, ctx: &TickContext<'_>) -> Outcome {
        match &mut self.behavior {
            Behavior::Player(control) => {
                let key = match control.mode {
                    KeyMode::OnPress => ctx.pressed(),
                    KeyMode::Held => ctx.last_key(),
                };
                let speed = control.speed;
                if let Some(dir) = key.and_then(Direction::from_key) {
                    self.walk(dir, speed, ctx);
                }
                return self.take_hits(ctx);
            }
            Behavior::Enemy(patrol) => {
                if patrol.ready() {
                    let order = patrol.order.clone();
                    for dir in order {
                        if self.step(dir, ctx) {
                            break;
                        }
                    }
                }
            }
            Behavior::Item => {
                if ctx.player_at(self.x, self.y) {
                    self.active = false;
                }
            }
            Behavior::Wall | Behavior::Prop => {}
        }
        Outcome::Continue
    }

    /// Apply contact damage from every enemy on this cell.
    fn take_hits(&mut self, ctx: &TickContext<'_>) -> Outcome {
        let (x, y) = self.position();
        let Behavior::Player(control) = &mut self.behavior else {
            return Outcome::Continue;
        };
        let taken: u32 = ctx
            .entities_at(x, y)
            .filter_map(Entity::contact_damage)
            .map(|damage| control.hit_by(damage))
            .sum();
        if taken == 0 {
            return Outcome::Continue;
        }

        control.hp = control.hp.saturating_sub(taken);
        if control.hp > 0 {
            return Outcome::Continue;
        }
        self.active = false;
        Outcome::Stop
    }

    /// Paint the glyph if active and in bounds. Returns whether a cell was written.
    pub fn draw(&self, grid: &mut Grid) -> bool {
        self.active && grid.paint(self.x, self.y, self.glyph)
    }

    /// Move one cell if the target is passable. Returns whether the position changed.
    pub fn step(&mut self, dir: Direction, ctx: &TickContext<'_>) -> bool {
        match step_target(self.position(), dir, ctx) {
            Some((x, y)) => {
                self.x = x;
                self.y = y;
                true
            }
            None => false,
        }
    }

    /// Move up to `cells` steps, stopping at the first blocked one.
    /// Returns the number of cells actually travelled.
    pub fn walk(&mut self, dir: Direction, cells: u8, ctx: &TickContext<'_>) -> u8 {
        let mut moved = 0;
        while moved < cells && self.step(dir, ctx) {
            moved += 1;
        }
        moved
    }
}

fn step_target(from: (i32, i32), dir: Direction, ctx: &TickContext<'_>) -> Option<(i32, i32)> {
    let (dx, dy) = dir.delta();
    let (x, y) = (from.0 + dx, from.1 + dy);
    ctx.is_passable(x, y).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FrameInput;
    use crate::registry::Registry;

    fn update_in(reg: &mut Registry, index: usize, frame: FrameInput) {
        let (before, slot, after) = reg.split_at_mut(index).unwrap();
        let ctx = TickContext::new(frame, before, after);
        slot.entity.update(&ctx);
    }

    #[test]
    fn player_moves_right_on_d() {
        let mut player = Entity::player(1, 1);
        let ctx = TickContext::detached(FrameInput::new(5, 5).with_key('d'));
        player.update(&ctx);
        assert_eq!(player.position(), (2, 1));
    }

    #[test]
    fn player_ignores_unknown_keys() {
        let mut player = Entity::player(1, 1);
        let ctx = TickContext::detached(FrameInput::new(5, 5).with_key('x'));
        player.update(&ctx);
        assert_eq!(player.position(), (1, 1));
    }

    #[test]
    fn player_stays_at_origin_when_moving_negative() {
        let mut player = Entity::player(0, 0);
        for key in ['a', 'w'] {
            let ctx = TickContext::detached(FrameInput::new(1, 1).with_key(key));
            player.update(&ctx);
            assert_eq!(player.position(), (0, 0));
        }
    }

    #[test]
    fn player_is_blocked_by_wall() {
        let mut reg = Registry::new();
        reg.add(Entity::wall(2, 1));
        let player = reg.add(Entity::player(1, 1));

        update_in(&mut reg, 1, FrameInput::new(5, 5).with_key('d'));
        assert_eq!(reg.get(player).unwrap().position(), (1, 1));
    }

    #[test]
    fn on_press_player_ignores_stale_key() {
        let mut player = Entity::player(1, 1);
        let frame = FrameInput {
            last_key: Some('d'),
            pressed: None,
            ..FrameInput::new(5, 5)
        };
        player.update(&TickContext::detached(frame));
        assert_eq!(player.position(), (1, 1));
    }

    #[test]
    fn held_player_keeps_moving_on_last_key() {
        let control = PlayerControl {
            speed: 1,
            mode: KeyMode::Held,
            ..PlayerControl::default()
        };
        let mut player = Entity::player(0, 0).with_behavior(Behavior::Player(control));
        let frame = FrameInput {
            last_key: Some('s'),
            pressed: None,
            ..FrameInput::new(3, 3)
        };
        player.update(&TickContext::detached(frame));
        player.update(&TickContext::detached(frame));
        player.update(&TickContext::detached(frame));
        assert_eq!(player.position(), (0, 2));
    }

    #[test]
    fn fast_player_stops_in_front_of_wall() {
        let mut reg = Registry::new();
        reg.add(Entity::wall(4, 0));
        let control = PlayerControl {
            speed: 3,
            mode: KeyMode::OnPress,
            ..PlayerControl::default()
        };
        let player = reg.add(Entity::player(0, 0).with_behavior(Behavior::Player(control)));

        update_in(&mut reg, 1, FrameInput::new(8, 1).with_key('d'));
        assert_eq!(reg.get(player).unwrap().position(), (3, 0));

        update_in(&mut reg, 1, FrameInput::new(8, 1).with_key('d'));
        assert_eq!(reg.get(player).unwrap().position(), (3, 0));
    }

    #[test]
    fn enemy_takes_first_direction_that_moves() {
        // Bottom-right corner of a 3x3 room: right and down are walls, left is open.
        let mut reg = Registry::new();
        reg.add(Entity::wall(3, 2));
        reg.add(Entity::wall(2, 3));
        let enemy = reg.add(Entity::enemy(2, 2));

        update_in(&mut reg, 2, FrameInput::new(4, 4));
        assert_eq!(reg.get(enemy).unwrap().position(), (1, 2));

        update_in(&mut reg, 2, FrameInput::new(4, 4));
        assert_eq!(reg.get(enemy).unwrap().position(), (2, 2));
    }

    #[test]
    fn boxed_in_enemy_stays_put() {
        let mut enemy = Entity::enemy(0, 0);
        enemy.update(&TickContext::detached(FrameInput::new(1, 1)));
        assert_eq!(enemy.position(), (0, 0));
    }

    #[test]
    fn patrol_period_skips_ticks() {
        let patrol = Patrol::new().with_period(3);
        let mut enemy = Entity::enemy(0, 0).with_behavior(Behavior::Enemy(patrol));
        let ctx = TickContext::detached(FrameInput::new(10, 1));

        enemy.update(&ctx);
        enemy.update(&ctx);
        assert_eq!(enemy.x, 0);
        enemy.update(&ctx);
        assert_eq!(enemy.x, 1);
    }

    #[test]
    fn patrol_order_drops_duplicates() {
        let patrol = Patrol::new().with_order([Direction::Left, Direction::Left, Direction::Up]);
        assert_eq!(patrol.order(), &[Direction::Left, Direction::Up]);
        assert_eq!(Patrol::new().with_period(0).period(), 1);
    }

    #[test]
    fn item_deactivates_under_player() {
        let mut reg = Registry::new();
        let player = reg.add(Entity::player(1, 0));
        let item = reg.add(Entity::item(2, 0));

        let frame = FrameInput::new(3, 1).with_key('d');
        update_in(&mut reg, 0, frame);
        update_in(&mut reg, 1, frame);

        assert_eq!(reg.get(player).unwrap().position(), (2, 0));
        assert!(!reg.get(item).unwrap().active);
    }

    #[test]
    fn inactive_entity_does_not_draw() {
        let mut grid = Grid::new(3, 3);
        let mut wall = Entity::wall(1, 1);
        wall.active = false;
        assert!(!wall.draw(&mut grid));
        assert_eq!(grid, Grid::new(3, 3));
    }

    #[test]
    fn out_of_bounds_entity_does_not_draw() {
        let mut grid = Grid::new(3, 3);
        assert!(!Entity::player(3, 0).draw(&mut grid));
        assert!(!Entity::player(-1, 2).draw(&mut grid));
        assert_eq!(grid, Grid::new(3, 3));
    }

    fn fragile_player(hp: u32) -> Entity {
        let control = PlayerControl {
            hp,
            armor: 0,
            ..PlayerControl::default()
        };
        Entity::player(0, 0).with_behavior(Behavior::Player(control))
    }

    #[test]
    fn armor_reduces_hits_but_never_below_one() {
        let control = PlayerControl::default();
        assert_eq!(control.hit_by(ENEMY_DAMAGE), 1);
        assert_eq!(control.hit_by(25), 15);
        assert_eq!(control.hit_by(0), 1);
    }

    #[test]
    fn enemy_on_player_cell_deals_damage() {
        let mut reg = Registry::new();
        reg.add(Entity::enemy(0, 0).with_behavior(Behavior::Enemy(Patrol::new().with_damage(3))));
        let player = reg.add(fragile_player(10));

        let outcome = {
            let (before, slot, after) = reg.split_at_mut(1).unwrap();
            slot.entity.update(&TickContext::new(FrameInput::new(1, 1), before, after))
        };
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(reg.get(player).unwrap().hp(), Some(7));
    }

    #[test]
    fn harmless_enemy_deals_nothing() {
        let mut reg = Registry::new();
        reg.add(Entity::enemy(0, 0).with_behavior(Behavior::Enemy(Patrol::new().with_damage(0))));
        let player = reg.add(fragile_player(1));

        update_in(&mut reg, 1, FrameInput::new(1, 1));
        assert_eq!(reg.get(player).unwrap().hp(), Some(1));
        assert!(reg.get(player).unwrap().active);
    }

    #[test]
    fn lethal_hit_deactivates_player_and_requests_stop() {
        let mut reg = Registry::new();
        reg.add(Entity::enemy(1, 0));
        reg.add(Entity::enemy(1, 0));
        let player = reg.add(fragile_player(15));

        let (before, slot, after) = reg.split_at_mut(2).unwrap();
        let ctx = TickContext::new(FrameInput::new(2, 1).with_key('d'), before, after);
        assert_eq!(slot.entity.update(&ctx), Outcome::Stop);

        let player = reg.get(player).unwrap();
        assert_eq!(player.position(), (1, 0));
        assert_eq!(player.hp(), Some(0));
        assert!(!player.active);
    }

    #[test]
    fn only_enemies_have_contact_damage() {
        assert_eq!(Entity::enemy(0, 0).contact_damage(), Some(ENEMY_DAMAGE));
        assert_eq!(Entity::wall(0, 0).contact_damage(), None);
        assert_eq!(Entity::player(0, 0).contact_damage(), None);
        assert_eq!(Entity::player(0, 0).hp(), Some(PLAYER_HP));
        assert_eq!(Entity::item(0, 0).hp(), None);
    }

    #[test]
    fn kinds_have_names() {
        assert_eq!(Entity::player(0, 0).kind(), "player");
        assert_eq!(Entity::wall(0, 0).kind(), "wall");
        assert_eq!(Entity::enemy(0, 0).kind(), "enemy");
        assert_eq!(Entity::item(0, 0).kind(), "item");
        assert_eq!(Entity::prop(0, 0, '*').kind(), "prop");
    }
}

//! Read-only view of shared engine state handed to `Entity::update`.

use crate::entity::Entity;
use crate::registry::Slot;

/// Per-tick engine state every entity may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Most recent key seen by the engine, lower-cased. Persists across ticks.
    pub last_key: Option<char>,
    /// Key polled during this tick, if any.
    pub pressed: Option<char>,
    pub width: u16,
    pub height: u16,
    /// Number of ticks completed before this one.
    pub tick: u64,
}

impl FrameInput {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_key(mut self, key: char) -> Self {
        self.last_key = Some(key);
        self.pressed = Some(key);
        self
    }
}

/// Shared state plus every other registered entity, as seen by one entity's update.
///
/// Entities earlier in the registry have already been updated this tick, so
/// their positions are current; later ones still hold last tick's state.
#[derive(Debug, Clone, Copy)]
pub struct TickContext<'a> {
    frame: FrameInput,
    before: &'a [Slot],
    after: &'a [Slot],
}

impl<'a> TickContext<'a> {
    pub fn new(frame: FrameInput, before: &'a [Slot], after: &'a [Slot]) -> Self {
        Self {
            frame,
            before,
            after,
        }
    }

    /// A context with no neighbouring entities.
    pub fn detached(frame: FrameInput) -> Self {
        Self::new(frame, &[], &[])
    }

    pub fn frame(&self) -> FrameInput {
        self.frame
    }

    pub fn last_key(&self) -> Option<char> {
        self.frame.last_key
    }

    pub fn pressed(&self) -> Option<char> {
        self.frame.pressed
    }

    pub fn width(&self) -> u16 {
        self.frame.width
    }

    pub fn height(&self) -> u16 {
        self.frame.height
    }

    pub fn tick(&self) -> u64 {
        self.frame.tick
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.frame.width as i32 && y < self.frame.height as i32
    }

    /// Every other registered entity, in draw order.
    pub fn others(&self) -> impl Iterator<Item = &'a Slot> + 'a {
        self.before.iter().chain(self.after.iter())
    }

    /// Other active entities standing on (x, y).
    pub fn entities_at(&self, x: i32, y: i32) -> impl Iterator<Item = &'a Entity> + 'a {
        self.others()
            .map(|slot| &slot.entity)
            .filter(move |e| e.active && e.x == x && e.y == y)
    }

    /// In bounds and not occupied by a solid entity.
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && !self.entities_at(x, y).any(Entity::is_solid)
    }

    pub fn player_at(&self, x: i32, y: i32) -> bool {
        self.entities_at(x, y).any(Entity::is_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    #[test]
    fn bounds_follow_frame_size() {
        let ctx = TickContext::detached(FrameInput::new(3, 2));
        assert!(ctx.in_bounds(0, 0));
        assert!(ctx.in_bounds(2, 1));
        assert!(!ctx.in_bounds(3, 0));
        assert!(!ctx.in_bounds(0, 2));
        assert!(!ctx.in_bounds(-1, 0));
    }

    #[test]
    fn walls_block_and_props_do_not() {
        let mut reg = Registry::new();
        reg.add(Entity::wall(1, 0));
        reg.add(Entity::prop(2, 0, '*'));
        reg.add(Entity::player(0, 0));

        let (before, _, after) = reg.split_at_mut(2).unwrap();
        let ctx = TickContext::new(FrameInput::new(4, 1), before, after);
        assert!(!ctx.is_passable(1, 0));
        assert!(ctx.is_passable(2, 0));
        assert!(ctx.is_passable(3, 0));
    }

    #[test]
    fn inactive_walls_are_ignored() {
        let mut reg = Registry::new();
        let mut wall = Entity::wall(1, 0);
        wall.active = false;
        reg.add(wall);
        reg.add(Entity::player(0, 0));

        let (before, _, after) = reg.split_at_mut(1).unwrap();
        let ctx = TickContext::new(FrameInput::new(2, 1), before, after);
        assert!(ctx.is_passable(1, 0));
    }

    #[test]
    fn with_key_sets_both_slots() {
        let frame = FrameInput::new(1, 1).with_key('d');
        assert_eq!(frame.last_key, Some('d'));
        assert_eq!(frame.pressed, Some('d'));
    }
}

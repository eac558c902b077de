//! Registry module - ordered collection of live entities
//!
//! Registration order is draw order: later entries overwrite earlier ones at the
//! same cell (painter's algorithm). Handles are allocated monotonically, so the
//! slot list stays sorted by id and lookups can binary search.

use std::fmt;

use crate::entity::Entity;
use crate::grid::Grid;

/// Stable handle for a registered entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A registered entity together with its handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub id: EntityId,
    pub entity: Entity,
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    next_id: u64,
    slots: Vec<Slot>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Append an entity and hand back its handle.
    ///
    /// There is no duplicate detection: registering a clone of an existing
    /// entity yields a second, independent slot.
    pub fn add(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot { id, entity });
        id
    }

    /// Remove by handle, preserving the order of the remaining entries.
    /// Returns None if the handle is not registered.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.position(id)?;
        Some(self.slots.remove(index).entity)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.position(id).is_some()
    }

    /// Index of `id` in draw order
    pub fn position(&self, id: EntityId) -> Option<usize> {
        self.slots.binary_search_by_key(&id, |slot| slot.id).ok()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.position(id).map(|i| &self.slots[i].entity)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let index = self.position(id)?;
        Some(&mut self.slots[index].entity)
    }

    /// Copy of the current handles, in draw order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.slots.iter().map(|slot| slot.id).collect()
    }

    /// Borrow the slot at `index` mutably while exposing every other slot read-only.
    pub fn split_at_mut(&mut self, index: usize) -> Option<(&[Slot], &mut Slot, &[Slot])> {
        if index >= self.slots.len() {
            return None;
        }
        let (before, rest) = self.slots.split_at_mut(index);
        let (current, after) = rest.split_first_mut()?;
        Some((&*before, current, &*after))
    }

    /// Let every entity paint itself in registration order.
    /// Returns how many entities actually landed on the grid.
    pub fn paint(&self, grid: &mut Grid) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.entity.draw(grid))
            .count()
    }
}

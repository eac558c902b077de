//! The game loop: input -> update -> prune -> render.

use tracing::{debug, info};

use crate::config::{lower, EngineConfig};
use crate::core::{Entity, EntityId, FrameInput, Grid, Outcome, Registry, TickContext};
use crate::error::EngineError;
use crate::input::InputSource;
use crate::pace::FramePacer;
use crate::term::{DisplayError, Screen};
use crate::types::RunState;

/// Owns the playfield and every registered entity.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    grid: Grid,
    registry: Registry,
    state: RunState,
    last_key: Option<char>,
    ticks: u64,
    frames: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            grid: Grid::with_background(config.width, config.height, config.background),
            config,
            registry: Registry::new(),
            state: RunState::Stopped,
            last_key: None,
            ticks: 0,
            frames: 0,
        }
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        Self::new(EngineConfig::new(width, height))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn width(&self) -> u16 {
        self.config.width
    }

    pub fn height(&self) -> u16 {
        self.config.height
    }

    /// The grid as of the last [`compose`](Self::compose).
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn last_key(&self) -> Option<char> {
        self.last_key
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Completed ticks since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Frames handed to a screen since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Register an entity; it is drawn above everything registered before it.
    pub fn add(&mut self, entity: Entity) -> EntityId {
        let kind = entity.kind();
        let id = self.registry.add(entity);
        debug!(%id, kind, "entity added");
        id
    }

    /// Unregister by handle. No-op (returns `None`) if it is not registered.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let removed = self.registry.remove(id);
        if let Some(entity) = &removed {
            debug!(%id, kind = entity.kind(), "entity removed");
        }
        removed
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.registry.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.registry.get_mut(id)
    }

    /// Switch back to stopped; `run` returns after the current frame.
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// Poll one key from `input`, then update and prune the entities.
    pub fn tick(&mut self, input: &mut impl InputSource) {
        let key = input.poll();
        self.tick_with(key);
    }

    /// Same as [`tick`](Self::tick) with the key supplied directly.
    pub fn tick_with(&mut self, key: Option<char>) {
        let pressed = self.handle_key(key);
        self.update_entities(pressed);
        self.ticks += 1;
    }

    /// Lower-case and record a key; the quit key stops the loop.
    fn handle_key(&mut self, key: Option<char>) -> Option<char> {
        let key = key.map(lower)?;
        if key == self.config.quit_key {
            debug!("quit key pressed");
            self.state = RunState::Stopped;
        }
        self.last_key = Some(key);
        Some(key)
    }

    /// Update every active entity and drop the inactive ones.
    ///
    /// Iterates over a snapshot of the handles taken before the pass; removals
    /// are deferred until the pass is over. An entity returning
    /// [`Outcome::Stop`] stops the loop after this frame is rendered.
    fn update_entities(&mut self, pressed: Option<char>) {
        let frame = FrameInput {
            last_key: self.last_key,
            pressed,
            width: self.config.width,
            height: self.config.height,
            tick: self.ticks,
        };

        let mut stale = Vec::new();
        let mut stop_requested = None;
        for id in self.registry.ids() {
            let Some(index) = self.registry.position(id) else {
                continue;
            };
            let Some((before, slot, after)) = self.registry.split_at_mut(index) else {
                continue;
            };
            if !slot.entity.active {
                stale.push(id);
                continue;
            }
            let ctx = TickContext::new(frame, before, after);
            if slot.entity.update(&ctx) == Outcome::Stop && stop_requested.is_none() {
                stop_requested = Some((id, slot.entity.kind()));
            }
        }

        if let Some((id, kind)) = stop_requested {
            info!(%id, kind, tick = self.ticks, "entity requested stop");
            self.state = RunState::Stopped;
        }

        for id in stale {
            if let Some(entity) = self.registry.remove(id) {
                debug!(%id, kind = entity.kind(), "pruned inactive entity");
            }
        }
    }

    /// Reset the grid and let every entity paint itself in registration order.
    pub fn compose(&mut self) -> &Grid {
        self.grid.reset();
        self.registry.paint(&mut self.grid);
        &self.grid
    }

    /// Compose the frame and hand it to `screen`.
    pub fn render(&mut self, screen: &mut impl Screen) -> Result<(), DisplayError> {
        self.compose();
        screen.present(&self.grid)?;
        self.frames += 1;
        Ok(())
    }

    /// Run `tick` + `render` until the engine is stopped.
    ///
    /// Both collaborators are released on the way out, whether the loop ended
    /// through the quit key, [`stop`](Self::stop), or a display error.
    pub fn run<I, S>(&mut self, input: &mut I, screen: &mut S) -> Result<(), EngineError>
    where
        I: InputSource,
        S: Screen,
    {
        self.state = RunState::Running;
        info!(
            width = self.config.width,
            height = self.config.height,
            entities = self.registry.len(),
            "game loop started"
        );

        let mut pacer = FramePacer::new(self.config.frame_interval);
        let result = self.run_loop(input, screen, &mut pacer);

        self.state = RunState::Stopped;
        let input_released = input.release();
        let screen_released = screen.release();
        info!(ticks = self.ticks, frames = self.frames, "game loop stopped");

        result?;
        input_released?;
        screen_released?;
        Ok(())
    }

    fn run_loop<I, S>(
        &mut self,
        input: &mut I,
        screen: &mut S,
        pacer: &mut FramePacer,
    ) -> Result<(), EngineError>
    where
        I: InputSource,
        S: Screen,
    {
        while self.is_running() {
            pacer.wait();
            self.tick(input);
            self.render(screen)?;
        }
        Ok(())
    }
}

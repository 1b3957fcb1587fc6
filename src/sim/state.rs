//! Client simulation state
//!
//! Everything one tick reads and writes is owned by [`ClientState`] and passed
//! explicitly to [`super::tick`].

use glam::Vec2;

use super::camera::Camera;
use super::entity::{Bot, Food, FoodId, Identity, Player, WorldBounds};
use super::movement::Viewport;
use super::store::EntityStore;
use crate::settings::Settings;

/// Remote entities as last reported by the server
#[derive(Debug, Clone)]
pub struct World {
    pub bounds: WorldBounds,
    pub foods: EntityStore<FoodId, Food>,
    pub bots: EntityStore<Identity, Bot>,
    /// Remote players only; the local player lives in [`ClientState::player`]
    pub players: EntityStore<Identity, Player>,
}

impl World {
    pub fn new(bounds: WorldBounds) -> Self {
        Self {
            bounds,
            foods: EntityStore::new(),
            bots: EntityStore::new(),
            players: EntityStore::new(),
        }
    }

    /// Number of known entities of all kinds (destroyed ones included)
    pub fn entity_count(&self) -> usize {
        self.foods.len() + self.bots.len() + self.players.len()
    }
}

/// Complete client-side state threaded through every tick
#[derive(Debug, Clone)]
pub struct ClientState {
    pub settings: Settings,
    pub world: World,
    /// The locally controlled player
    pub player: Player,
    pub camera: Camera,
    pub viewport: Viewport,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl ClientState {
    /// Create state for a player spawning at `spawn`
    pub fn new(settings: Settings, identity: Identity, spawn: Vec2) -> Self {
        let bounds = settings.world_bounds();
        let viewport = settings.viewport();
        let spawn = bounds.clamp(spawn);
        let player = Player::new(identity, spawn, settings.base_radius, settings.velocity_magnitude);
        let camera = Camera::focused(spawn, settings.base_radius, viewport);
        log::info!(
            "Client state for {} at {:?} in {}x{} arena",
            identity,
            spawn,
            bounds.width,
            bounds.height
        );
        Self {
            settings,
            world: World::new(bounds),
            player,
            camera,
            viewport,
            time_ticks: 0,
        }
    }

    /// Spawn in the middle of the arena
    pub fn centered(settings: Settings, identity: Identity) -> Self {
        let center = settings.world_bounds().center();
        Self::new(settings, identity, center)
    }

    /// Update the viewport after a window resize
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport.width > 0.0 && viewport.height > 0.0 {
            self.viewport = viewport;
        } else {
            log::warn!("Ignoring degenerate viewport {:?}", viewport);
        }
    }
}

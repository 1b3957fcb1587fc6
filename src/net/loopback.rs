//! In-memory network for offline play and tests
//!
//! Records every intent and hands back whatever events were queued.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{Intent, Network, ServerEvent};
use crate::sim::{FoodId, Identity, WorldBounds};

#[derive(Debug, Clone)]
pub struct LoopbackNetwork {
    connected: bool,
    sent: Vec<Intent>,
    inbox: VecDeque<ServerEvent>,
    next_food_id: u32,
}

impl Default for LoopbackNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopbackNetwork {
    /// A connected loopback with nothing queued
    pub fn new() -> Self {
        Self {
            connected: true,
            sent: Vec::new(),
            inbox: VecDeque::new(),
            next_food_id: 1,
        }
    }

    pub fn set_connected(&mut self, connected: bool) {
        if connected != self.connected {
            log::info!("Loopback {}", if connected { "connected" } else { "disconnected" });
        }
        self.connected = connected;
    }

    pub fn push_event(&mut self, event: ServerEvent) {
        self.inbox.push_back(event);
    }

    /// Intents sent so far, oldest first
    pub fn sent(&self) -> &[Intent] {
        &self.sent
    }

    pub fn take_sent(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.sent)
    }

    /// Queue `count` food spawns at seeded random positions inside `bounds`
    pub fn scatter_food(&mut self, seed: u64, count: usize, bounds: WorldBounds) {
        let mut rng = Pcg32::seed_from_u64(seed);
        for _ in 0..count {
            let id = FoodId(self.next_food_id);
            self.next_food_id += 1;
            self.inbox.push_back(ServerEvent::FoodSpawned {
                id,
                x: rng.random_range(0.0..=bounds.width),
                y: rng.random_range(0.0..=bounds.height),
            });
        }
        log::debug!("Scattered {} food (seed {})", count, seed);
    }

    /// Queue `count` bots with radii in `[min_radius, max_radius]`
    pub fn scatter_bots(
        &mut self,
        seed: u64,
        count: usize,
        bounds: WorldBounds,
        min_radius: f32,
        max_radius: f32,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let hi = max_radius.max(min_radius);
        for i in 0..count {
            let mut id = [0u8; Identity::LEN];
            id[..4].copy_from_slice(b"bot-");
            id[4..8].copy_from_slice(&(i as u32).to_be_bytes());
            self.inbox.push_back(ServerEvent::BotUpdated {
                id: Identity(id),
                x: rng.random_range(0.0..=bounds.width),
                y: rng.random_range(0.0..=bounds.height),
                radius: rng.random_range(min_radius..=hi),
            });
        }
    }
}

impl Network for LoopbackNetwork {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn send(&mut self, intent: Intent) {
        if !self.connected {
            log::warn!("Dropping intent while disconnected: {:?}", intent);
            return;
        }
        self.sent.push(intent);
    }

    fn poll(&mut self) -> Vec<ServerEvent> {
        self.inbox.drain(..).collect()
    }
}

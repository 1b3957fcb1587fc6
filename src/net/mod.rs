//! Network collaborator contract
//!
//! The transport itself lives outside this crate. The simulation only talks to
//! a [`Network`]: it sends [`Intent`]s describing what it did locally and,
//! between ticks, drains [`ServerEvent`]s that carry authoritative state.

pub mod events;
pub mod loopback;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{ClientState, Identity};

pub use events::{ServerEvent, apply_event};
pub use loopback::LoopbackNetwork;

/// A locally detected event awaiting server confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Local player's new position
    Movement { x: f32, y: f32 },
    /// Ate the food at `(x, y)`; `radius` is the resulting radius, floored
    EatFood { x: f32, y: f32, radius: u32 },
    /// Ate a bot or player
    EatPlayer { target: Identity, radius: f32 },
}

impl Intent {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Message-passing link to the authoritative server
///
/// Sends never block. `poll` returns whatever arrived since the last call.
pub trait Network {
    fn is_connected(&self) -> bool;

    /// Queue one intent for the server
    fn send(&mut self, intent: Intent);

    /// Drain server events received since the last poll
    fn poll(&mut self) -> Vec<ServerEvent>;

    fn send_movement(&mut self, x: f32, y: f32) {
        self.send(Intent::Movement { x, y });
    }

    fn send_eat_food(&mut self, position: Vec2, resulting_radius_floor: u32) {
        self.send(Intent::EatFood {
            x: position.x,
            y: position.y,
            radius: resulting_radius_floor,
        });
    }

    fn send_eat_player(&mut self, target: Identity, resulting_radius: f32) {
        self.send(Intent::EatPlayer {
            target,
            radius: resulting_radius,
        });
    }
}

/// Apply every pending server event to `state`
///
/// Call between ticks. While disconnected nothing is drained, so the local
/// collections stay as they were. Returns the number of events applied.
pub fn pump<N: Network + ?Sized>(state: &mut ClientState, net: &mut N) -> usize {
    if !net.is_connected() {
        return 0;
    }
    let events = net.poll();
    let count = events.len();
    for event in events {
        apply_event(state, event);
    }
    if count > 0 {
        log::trace!("Applied {} server events", count);
    }
    count
}

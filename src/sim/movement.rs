//! Pointer-driven movement for the local player
//!
//! The pointer's offset from the viewport center picks a direction; its
//! distance (saturating at half the half-diagonal) picks a fraction of full
//! speed. Bigger players are slower: speed scales with `1 / sqrt(radius / 20)`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Player, WorldBounds};
use crate::consts::{MIN_SPEED_RADIUS, REFERENCE_RADIUS};

/// Screen-space viewport size (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Length of the half-diagonal, the normalization distance for speed
    pub fn half_diagonal(&self) -> f32 {
        self.center().length()
    }

    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Speed for a player of `radius` at the given normalized pointer distance
#[inline]
pub fn speed_for(normalized_distance: f32, velocity_magnitude: f32, radius: f32) -> f32 {
    let radius = radius.max(MIN_SPEED_RADIUS);
    normalized_distance * velocity_magnitude / (radius / REFERENCE_RADIUS).sqrt()
}

/// Move `player` toward the pointer for one tick
///
/// Returns the new position, or `None` when the player held still (dead zone,
/// pinned against a wall, or unusable input).
pub fn move_towards(
    player: &mut Player,
    viewport: Viewport,
    pointer: Vec2,
    bounds: WorldBounds,
    dead_zone: f32,
) -> Option<Vec2> {
    if !pointer.is_finite() || !viewport.is_valid() {
        log::warn!("Skipping movement: pointer {:?}, viewport {:?}", pointer, viewport);
        return None;
    }

    let offset = pointer - viewport.center();
    let delta = offset.length();
    if delta <= dead_zone {
        return None;
    }

    let max_distance = viewport.half_diagonal();
    let normalized = ((delta / max_distance) * 2.0).min(1.0);
    let speed = speed_for(normalized, player.velocity_magnitude, player.radius());

    let next = bounds.clamp(player.pos + (offset / delta) * speed);
    if !next.is_finite() {
        log::warn!("Movement produced non-finite position, holding at {:?}", player.pos);
        return None;
    }
    if next == player.pos {
        return None;
    }
    player.pos = next;
    log::trace!("Player {} moved to {:?} (speed {:.3})", player.identity, next, speed);
    Some(next)
}

//! Smoothed follow camera
//!
//! Zoom shrinks as the player grows: logarithmically below radius 80,
//! hyperbolically in the excess above it. The two pieces do not meet at 80
//! (50/ln(80) ~ 11.4 clamps to 1.0 on the left, 100/0 on the right); that
//! jump is observed behavior and is kept.
//!
//! Zoom and pan each chase their target with a single-pole low-pass filter.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::movement::Viewport;
use crate::consts::{MAX_ZOOM, MIN_ZOOM, MIN_ZOOM_RADIUS, ZOOM_SEAM_RADIUS};
use crate::lerp;

/// Zoom the camera aims for at a given player radius
pub fn target_zoom(radius: f32) -> f32 {
    let radius = if radius.is_finite() {
        radius.max(MIN_ZOOM_RADIUS)
    } else {
        MIN_ZOOM_RADIUS
    };
    let raw = if radius < ZOOM_SEAM_RADIUS {
        50.0 / radius.ln()
    } else {
        100.0 / (radius - ZOOM_SEAM_RADIUS)
    };
    // radius == 80 gives +inf, which clamps to MAX_ZOOM
    raw.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// View transform: `screen = world * zoom + pan`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub zoom: f32,
    pub pan: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: MAX_ZOOM,
            pan: Vec2::ZERO,
        }
    }
}

impl Camera {
    /// A camera already settled on the player (no smoothing), for spawns
    pub fn focused(player_pos: Vec2, radius: f32, viewport: Viewport) -> Self {
        let zoom = target_zoom(radius);
        Self {
            zoom,
            pan: viewport.center() - player_pos * zoom,
        }
    }

    /// Advance one tick toward the player
    ///
    /// Zoom is smoothed first; the pan target is computed at that new zoom.
    pub fn update(&mut self, player_pos: Vec2, radius: f32, viewport: Viewport, smoothing: f32) {
        self.zoom = lerp(self.zoom, target_zoom(radius), smoothing);
        let pan_target = viewport.center() - player_pos * self.zoom;
        self.pan = self.pan.lerp(pan_target, smoothing);
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.zoom + self.pan
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.pan) / self.zoom
    }
}

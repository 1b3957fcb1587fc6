//! Simulation tuning and client preferences
//!
//! Loaded from a JSON file; any missing field falls back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Viewport, WorldBounds};

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// Arena width in world units
    pub world_width: f32,
    /// Arena height in world units
    pub world_height: f32,

    // === Entities ===
    /// Radius the local player spawns with
    pub base_radius: f32,
    /// Base speed at the reference radius
    pub velocity_magnitude: f32,
    /// Canonical food radius
    pub food_radius: f32,
    /// Multiplier applied after eating a moving entity
    pub growth_bonus: f32,

    // === Input ===
    /// Pointer dead zone around the viewport center (pixels)
    pub dead_zone: f32,

    // === Camera ===
    /// Per-tick smoothing fraction for zoom and pan
    pub camera_smoothing: f32,
    /// Initial viewport width (pixels)
    pub viewport_width: f32,
    /// Initial viewport height (pixels)
    pub viewport_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            base_radius: PLAYER_BASE_RADIUS,
            velocity_magnitude: VELOCITY_MAGNITUDE,
            food_radius: FOOD_RADIUS,
            growth_bonus: GROWTH_BONUS,

            dead_zone: DEAD_ZONE,

            camera_smoothing: CAMERA_SMOOTHING,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.sanitized()
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace non-positive or non-finite values with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let fix = |value: &mut f32, fallback: f32, name: &str| {
            if !value.is_finite() || *value <= 0.0 {
                log::warn!("Setting {} = {} is invalid, using {}", name, value, fallback);
                *value = fallback;
            }
        };
        fix(&mut self.world_width, defaults.world_width, "world_width");
        fix(&mut self.world_height, defaults.world_height, "world_height");
        fix(&mut self.base_radius, defaults.base_radius, "base_radius");
        fix(&mut self.velocity_magnitude, defaults.velocity_magnitude, "velocity_magnitude");
        fix(&mut self.food_radius, defaults.food_radius, "food_radius");
        fix(&mut self.growth_bonus, defaults.growth_bonus, "growth_bonus");
        fix(&mut self.dead_zone, defaults.dead_zone, "dead_zone");
        fix(&mut self.viewport_width, defaults.viewport_width, "viewport_width");
        fix(&mut self.viewport_height, defaults.viewport_height, "viewport_height");
        if !(self.camera_smoothing > 0.0 && self.camera_smoothing <= 1.0) {
            log::warn!(
                "Setting camera_smoothing = {} is invalid, using {}",
                self.camera_smoothing,
                defaults.camera_smoothing
            );
            self.camera_smoothing = defaults.camera_smoothing;
        }
        self
    }

    /// Arena bounds described by these settings
    pub fn world_bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world_width, self.world_height)
    }

    /// Initial viewport described by these settings
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "world_width": 1000.0 }"#).unwrap();
        assert_eq!(settings.world_width, 1000.0);
        assert_eq!(settings.world_height, WORLD_HEIGHT);
        assert_eq!(settings.velocity_magnitude, VELOCITY_MAGNITUDE);
        assert_eq!(settings.growth_bonus, GROWTH_BONUS);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            food_radius: 7.5,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_sanitized_replaces_bad_values() {
        let settings = Settings {
            world_width: -5.0,
            base_radius: f32::NAN,
            camera_smoothing: 1.5,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.world_width, WORLD_WIDTH);
        assert_eq!(settings.base_radius, PLAYER_BASE_RADIUS);
        assert_eq!(settings.camera_smoothing, CAMERA_SMOOTHING);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/definitely/not/here/settings.json"));
        assert_eq!(settings, Settings::default());
    }
}

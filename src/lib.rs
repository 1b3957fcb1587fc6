//! Blob Arena - client simulation core for an agar-style arena game
//!
//! Core modules:
//! - `sim`: Local simulation (entities, collision, growth, movement, camera, tick)
//! - `net`: Network collaborator contract (intents out, server events in)
//! - `settings`: Data-driven tuning loaded from JSON

pub mod net;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions (world units)
    pub const WORLD_WIDTH: f32 = 5000.0;
    pub const WORLD_HEIGHT: f32 = 5000.0;

    /// Default viewport (screen pixels)
    pub const VIEWPORT_WIDTH: f32 = 1280.0;
    pub const VIEWPORT_HEIGHT: f32 = 720.0;

    /// Canonical food radius
    pub const FOOD_RADIUS: f32 = 5.0;
    /// Spawn radius for a fresh player
    pub const PLAYER_BASE_RADIUS: f32 = 20.0;
    /// Base speed at the reference radius (world units per tick)
    pub const VELOCITY_MAGNITUDE: f32 = 10.0;
    /// Radius at which speed equals `VELOCITY_MAGNITUDE`
    pub const REFERENCE_RADIUS: f32 = 20.0;
    /// Floor for radius in the speed formula
    pub const MIN_SPEED_RADIUS: f32 = 0.01;

    /// Multiplier applied after eating a bot or player
    pub const GROWTH_BONUS: f32 = 1.002;

    /// Pointer distance from viewport center below which the player holds still
    pub const DEAD_ZONE: f32 = 3.0;

    /// Fraction of the remaining camera error closed per tick
    pub const CAMERA_SMOOTHING: f32 = 0.05;
    /// Radius where the zoom curve switches from logarithmic to hyperbolic
    pub const ZOOM_SEAM_RADIUS: f32 = 80.0;
    pub const MIN_ZOOM: f32 = 0.1;
    pub const MAX_ZOOM: f32 = 1.0;
    /// Floor for radius in the zoom formula (keeps ln() positive)
    pub const MIN_ZOOM_RADIUS: f32 = 2.0;
}

/// Linear interpolation from `a` toward `b` by fraction `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

//! Entity records: players, bots and food
//!
//! All three share the [`Entity`] contract (position, radius, destroyed flag)
//! but carry no rendering state.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which kind of record an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Food,
    Bot,
    Player,
}

impl EntityKind {
    /// Moving entities (bots and players) earn the growth bonus when eaten
    pub fn is_moving(&self) -> bool {
        !matches!(self, EntityKind::Food)
    }
}

/// Shared capability set of every positioned, destructible circle
pub trait Entity {
    fn kind(&self) -> EntityKind;
    fn position(&self) -> Vec2;
    fn radius(&self) -> f32;
    fn is_destroyed(&self) -> bool;
    /// Mark the entity destroyed. Terminal and idempotent.
    fn destroy(&mut self);
}

/// Opaque server-assigned identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Identity(pub [u8; 16]);

impl Identity {
    pub const LEN: usize = 16;

    /// Build an identity from a byte slice, zero-padding or truncating to 16 bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut id = [0u8; Self::LEN];
        let n = bytes.len().min(Self::LEN);
        id[..n].copy_from_slice(&bytes[..n]);
        Self(id)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Server-assigned food id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FoodId(pub u32);

/// Packed 0xRRGGBB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }
}

/// Arena dimensions; positions are clamped into `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Hard-clamp a position into the arena (never wraps)
    #[inline]
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x.clamp(0.0, self.width), pos.y.clamp(0.0, self.height))
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A pellet of food. Never moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub pos: Vec2,
    pub radius: f32,
    #[serde(skip)]
    pub destroyed: bool,
}

impl Food {
    pub fn new(id: FoodId, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            radius,
            destroyed: false,
        }
    }
}

impl Entity for Food {
    fn kind(&self) -> EntityKind {
        EntityKind::Food
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }
}

/// A server-driven bot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    pub id: Identity,
    pub pos: Vec2,
    pub radius: f32,
    #[serde(skip)]
    pub destroyed: bool,
}

impl Bot {
    pub fn new(id: Identity, pos: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            radius,
            destroyed: false,
        }
    }
}

impl Entity for Bot {
    fn kind(&self) -> EntityKind {
        EntityKind::Bot
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }
}

/// A player, local or remote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub identity: Identity,
    pub pos: Vec2,
    radius: f32,
    /// Spawn radius, kept for respawn
    pub base_radius: f32,
    pub color: Color,
    pub name: Option<String>,
    pub skin: Option<String>,
    /// Speed at the reference radius
    pub velocity_magnitude: f32,
    #[serde(skip)]
    destroyed: bool,
}

impl Player {
    pub fn new(identity: Identity, pos: Vec2, base_radius: f32, velocity_magnitude: f32) -> Self {
        Self {
            identity,
            pos,
            radius: base_radius,
            base_radius,
            color: Color::default(),
            name: None,
            skin: None,
            velocity_magnitude,
            destroyed: false,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_skin(mut self, skin: impl Into<String>) -> Self {
        self.skin = Some(skin.into());
        self
    }

    /// Grow to `radius`. Shrinking requests are ignored.
    pub(crate) fn grow_to(&mut self, radius: f32) {
        if radius > self.radius {
            self.radius = radius;
        }
    }

    /// Overwrite local state with the server's authoritative values
    ///
    /// Non-finite positions and non-positive radii are ignored.
    pub fn reconcile(&mut self, pos: Vec2, radius: f32) {
        if pos.is_finite() {
            self.pos = pos;
        } else {
            log::warn!("Ignoring authoritative position {:?} for {}", pos, self.identity);
        }
        if radius.is_finite() && radius > 0.0 {
            self.radius = radius;
        } else {
            log::warn!("Ignoring authoritative radius {} for {}", radius, self.identity);
        }
    }
}

impl Entity for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }
}

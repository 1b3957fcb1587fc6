//! Client simulation module
//!
//! All local gameplay logic lives here. This module stays free of rendering
//! and transport:
//! - One logical tick per frame, single-threaded
//! - Server events are applied between ticks, never during one
//! - Remote collections are generational arenas scanned by snapshot

pub mod camera;
pub mod collision;
pub mod entity;
pub mod growth;
pub mod movement;
pub mod state;
pub mod store;
pub mod tick;

pub use camera::{Camera, target_zoom};
pub use collision::can_consume;
pub use entity::{Bot, Color, Entity, EntityKind, Food, FoodId, Identity, Player, WorldBounds};
pub use growth::{consume, grown_radius};
pub use movement::{Viewport, move_towards, speed_for};
pub use state::{ClientState, World};
pub use store::{EntityHandle, EntityStore};
pub use tick::{TickInput, TickReport, tick};

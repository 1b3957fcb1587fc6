//! Authoritative server events and how they land in client state

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Bot, ClientState, Color, Entity, Food, FoodId, Identity, Player};

/// State delta pushed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    FoodSpawned {
        id: FoodId,
        x: f32,
        y: f32,
    },
    FoodRemoved {
        id: FoodId,
    },
    PlayerUpdated {
        id: Identity,
        x: f32,
        y: f32,
        radius: f32,
        #[serde(default)]
        color: Option<Color>,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        skin: Option<String>,
    },
    PlayerRemoved {
        id: Identity,
    },
    BotUpdated {
        id: Identity,
        x: f32,
        y: f32,
        radius: f32,
    },
    BotRemoved {
        id: Identity,
    },
    /// Authoritative position and radius of the local player
    SelfState {
        x: f32,
        y: f32,
        radius: f32,
    },
}

impl ServerEvent {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Apply one server event
///
/// Updates touch position and radius only, so an entity this client already
/// consumed stays destroyed until the server removes it. A spawn for a known
/// key replaces the entity outright. Positions are clamped into the arena;
/// non-finite positions and non-positive radii never reach the stores.
pub fn apply_event(state: &mut ClientState, event: ServerEvent) {
    let world = &mut state.world;
    let bounds = world.bounds;
    // NaN survives the clamp and is rejected by world_pos
    let accept = |x: f32, y: f32| world_pos(bounds.clamp(Vec2::new(x, y)));
    match event {
        ServerEvent::FoodSpawned { id, x, y } => {
            let Some(pos) = accept(x, y) else {
                log::warn!("Dropping food {:?} at ({}, {})", id, x, y);
                return;
            };
            world
                .foods
                .insert(id, Food::new(id, pos, state.settings.food_radius));
        }
        ServerEvent::FoodRemoved { id } => {
            world.foods.remove(&id);
        }
        ServerEvent::PlayerUpdated {
            id,
            x,
            y,
            radius,
            color,
            name,
            skin,
        } => {
            let pos = accept(x, y);
            if id == state.player.identity {
                state.player.reconcile(pos.unwrap_or(Vec2::NAN), radius);
                return;
            }
            match world.players.get_by_key_mut(&id) {
                Some(player) => {
                    player.reconcile(pos.unwrap_or(Vec2::NAN), radius);
                    if let Some(color) = color {
                        player.color = color;
                    }
                    if name.is_some() {
                        player.name = name;
                    }
                    if skin.is_some() {
                        player.skin = skin;
                    }
                }
                None => {
                    let Some(pos) = pos.filter(|_| valid_radius(radius)) else {
                        log::warn!("Dropping new player {} at ({}, {}) r={}", id, x, y, radius);
                        return;
                    };
                    let mut player = Player::new(id, pos, radius, state.settings.velocity_magnitude)
                        .with_color(color.unwrap_or_default());
                    if let Some(name) = name {
                        player = player.with_name(name);
                    }
                    if let Some(skin) = skin {
                        player = player.with_skin(skin);
                    }
                    log::debug!("Player {} joined at {:?} (r={})", id, pos, player.radius());
                    world.players.insert(id, player);
                }
            }
        }
        ServerEvent::PlayerRemoved { id } => {
            if world.players.remove(&id).is_some() {
                log::debug!("Player {} removed", id);
            }
        }
        ServerEvent::BotUpdated { id, x, y, radius } => {
            let Some(pos) = accept(x, y).filter(|_| valid_radius(radius)) else {
                log::warn!("Ignoring bot {} update at ({}, {}) r={}", id, x, y, radius);
                return;
            };
            match world.bots.get_by_key_mut(&id) {
                Some(bot) => {
                    bot.pos = pos;
                    bot.radius = radius;
                }
                None => {
                    world.bots.insert(id, Bot::new(id, pos, radius));
                }
            }
        }
        ServerEvent::BotRemoved { id } => {
            world.bots.remove(&id);
        }
        ServerEvent::SelfState { x, y, radius } => {
            state
                .player
                .reconcile(accept(x, y).unwrap_or(Vec2::NAN), radius);
        }
    }
}

#[inline]
fn world_pos(pos: Vec2) -> Option<Vec2> {
    pos.is_finite().then_some(pos)
}

#[inline]
fn valid_radius(radius: f32) -> bool {
    radius.is_finite() && radius > 0.0
}

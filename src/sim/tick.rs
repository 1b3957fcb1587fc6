//! One simulation tick
//!
//! Order within a tick:
//! 1. move the local player toward the pointer
//! 2. scan food, bots and players (snapshotted handles) and eat what is covered
//! 3. smooth the camera toward the new player state
//! 4. flush the intent batch to the network
//!
//! Anything eaten in step 2 is destroyed before the next candidate is checked,
//! so it can neither be eaten twice nor reported twice.

use glam::Vec2;

use super::collision::can_consume;
use super::entity::{Entity, EntityKind};
use super::growth::consume;
use super::movement::move_towards;
use super::state::ClientState;
use crate::net::{Intent, Network};

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer position in screen space, if any
    pub pointer: Option<Vec2>,
}

/// What a tick did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub moved: bool,
    pub food_eaten: u32,
    pub bots_eaten: u32,
    pub players_eaten: u32,
    /// Intents flushed to the network this tick
    pub intents: Vec<Intent>,
}

impl TickReport {
    pub fn total_eaten(&self) -> u32 {
        self.food_eaten + self.bots_eaten + self.players_eaten
    }
}

/// Advance the client state by one tick
///
/// When the network reports disconnected the tick still moves the player and
/// the camera locally, but nothing is eaten and nothing is sent.
pub fn tick<N: Network + ?Sized>(state: &mut ClientState, input: &TickInput, net: &mut N) -> TickReport {
    let connected = net.is_connected();
    let mut report = TickReport::default();
    state.time_ticks += 1;

    if let Some(pointer) = input.pointer {
        if let Some(pos) = move_towards(
            &mut state.player,
            state.viewport,
            pointer,
            state.world.bounds,
            state.settings.dead_zone,
        ) {
            report.moved = true;
            if connected {
                report.intents.push(Intent::Movement { x: pos.x, y: pos.y });
            }
        }
    }

    if connected {
        eat_covered(state, &mut report);
    }

    state.camera.update(
        state.player.pos,
        state.player.radius(),
        state.viewport,
        state.settings.camera_smoothing,
    );

    for intent in &report.intents {
        net.send(intent.clone());
    }
    report
}

/// Moving prey must be strictly smaller than the eater
#[inline]
fn is_prey<T: Entity + ?Sized>(eater_radius: f32, target: &T) -> bool {
    match target.kind() {
        EntityKind::Food => true,
        EntityKind::Bot | EntityKind::Player => target.radius() < eater_radius,
    }
}

fn eat_covered(state: &mut ClientState, report: &mut TickReport) {
    let ClientState {
        world,
        player,
        settings,
        ..
    } = state;
    let bonus = Some(settings.growth_bonus);

    for handle in world.foods.snapshot() {
        let Some(food) = world.foods.get_mut(handle) else {
            continue;
        };
        if !can_consume(&*player, &*food) {
            continue;
        }
        let at = food.pos;
        let radius = consume(player, food, None);
        report.food_eaten += 1;
        report.intents.push(Intent::EatFood {
            x: at.x,
            y: at.y,
            radius: radius.floor() as u32,
        });
        log::debug!("Ate food at {:?}, radius now {:.3}", at, radius);
    }

    for handle in world.bots.snapshot() {
        let Some(bot) = world.bots.get_mut(handle) else {
            continue;
        };
        if !is_prey(player.radius(), &*bot) || !can_consume(&*player, &*bot) {
            continue;
        }
        let target = bot.id;
        let radius = consume(player, bot, bonus);
        report.bots_eaten += 1;
        report.intents.push(Intent::EatPlayer { target, radius });
        log::debug!("Ate bot {}, radius now {:.3}", target, radius);
    }

    for handle in world.players.snapshot() {
        let Some(target) = world.players.key(handle) else {
            continue;
        };
        if target == player.identity {
            continue;
        }
        let Some(other) = world.players.get_mut(handle) else {
            continue;
        };
        if !is_prey(player.radius(), &*other) || !can_consume(&*player, &*other) {
            continue;
        }
        let radius = consume(player, other, bonus);
        report.players_eaten += 1;
        report.intents.push(Intent::EatPlayer { target, radius });
        log::debug!("Ate player {}, radius now {:.3}", target, radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::{LoopbackNetwork, ServerEvent, pump};
    use crate::settings::Settings;
    use crate::sim::entity::{FoodId, Identity};

    fn setup() -> (ClientState, LoopbackNetwork) {
        let settings = Settings {
            world_width: 1000.0,
            world_height: 1000.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
            ..Default::default()
        };
        let state = ClientState::new(settings, Identity::from_bytes(b"me"), Vec2::new(500.0, 500.0));
        (state, LoopbackNetwork::new())
    }

    fn center_input(state: &ClientState) -> TickInput {
        TickInput {
            pointer: Some(state.viewport.center()),
        }
    }

    #[test]
    fn test_tick_eats_covered_food_once() {
        let (mut state, mut net) = setup();
        net.push_event(ServerEvent::FoodSpawned { id: FoodId(1), x: 505.0, y: 500.0 });
        net.push_event(ServerEvent::FoodSpawned { id: FoodId(2), x: 900.0, y: 900.0 });
        pump(&mut state, &mut net);

        let input = center_input(&state);
        let report = tick(&mut state, &input, &mut net);
        assert_eq!(report.food_eaten, 1);
        assert!(!report.moved);
        let expected = (20.0f32 * 20.0 + 5.0 * 5.0).sqrt();
        assert!((state.player.radius() - expected).abs() < 1e-4);
        assert_eq!(
            net.sent(),
            &[Intent::EatFood {
                x: 505.0,
                y: 500.0,
                radius: 20
            }]
        );

        // Already destroyed: second tick eats nothing
        let report = tick(&mut state, &input, &mut net);
        assert_eq!(report.total_eaten(), 0);
        assert_eq!(net.sent().len(), 1);
    }

    #[test]
    fn test_tick_movement_intent_comes_first() {
        let (mut state, mut net) = setup();
        net.push_event(ServerEvent::FoodSpawned { id: FoodId(1), x: 512.0, y: 500.0 });
        pump(&mut state, &mut net);

        let input = TickInput {
            pointer: Some(Vec2::new(800.0, 300.0)),
        };
        let report = tick(&mut state, &input, &mut net);
        assert!(report.moved);
        assert!(matches!(report.intents[0], Intent::Movement { x, .. } if (x - 510.0).abs() < 1e-4));
        assert!(matches!(report.intents[1], Intent::EatFood { .. }));
        assert_eq!(net.sent(), report.intents.as_slice());
    }

    #[test]
    fn test_tick_eats_smaller_bot_with_bonus() {
        let (mut state, mut net) = setup();
        state.player.reconcile(Vec2::new(500.0, 500.0), 30.0);
        let small = Identity::from_bytes(b"small");
        let big = Identity::from_bytes(b"big");
        net.push_event(ServerEvent::BotUpdated { id: small, x: 510.0, y: 500.0, radius: 20.0 });
        net.push_event(ServerEvent::BotUpdated { id: big, x: 490.0, y: 500.0, radius: 60.0 });
        pump(&mut state, &mut net);

        let input = center_input(&state);
        let report = tick(&mut state, &input, &mut net);
        assert_eq!(report.bots_eaten, 1);
        assert!((state.player.radius() - 1300.0f32.sqrt() * 1.002).abs() < 1e-3);
        assert!(state.world.bots.get_by_key(&small).unwrap().is_destroyed());
        assert!(!state.world.bots.get_by_key(&big).unwrap().is_destroyed());
        assert!(matches!(report.intents[0], Intent::EatPlayer { target, .. } if target == small));
    }

    #[test]
    fn test_tick_eats_remote_player() {
        let (mut state, mut net) = setup();
        state.player.reconcile(Vec2::new(500.0, 500.0), 40.0);
        let prey = Identity::from_bytes(b"prey");
        net.push_event(ServerEvent::PlayerUpdated {
            id: prey,
            x: 520.0,
            y: 510.0,
            radius: 15.0,
            color: None,
            name: None,
            skin: None,
        });
        pump(&mut state, &mut net);

        let input = center_input(&state);
        let report = tick(&mut state, &input, &mut net);
        assert_eq!(report.players_eaten, 1);
        let expected = (40.0f32 * 40.0 + 15.0 * 15.0).sqrt() * 1.002;
        assert!(matches!(
            report.intents[0],
            Intent::EatPlayer { target, radius } if target == prey && (radius - expected).abs() < 1e-3
        ));
    }

    #[test]
    fn test_disconnected_moves_but_never_eats() {
        let (mut state, mut net) = setup();
        net.push_event(ServerEvent::FoodSpawned { id: FoodId(1), x: 505.0, y: 500.0 });
        pump(&mut state, &mut net);
        net.set_connected(false);

        let input = TickInput {
            pointer: Some(Vec2::new(800.0, 300.0)),
        };
        let report = tick(&mut state, &input, &mut net);
        assert!(report.moved);
        assert_eq!(report.total_eaten(), 0);
        assert!(report.intents.is_empty());
        assert!(net.sent().is_empty());
        assert_eq!(state.player.radius(), 20.0);
        assert!(!state.world.foods.get_by_key(&FoodId(1)).unwrap().is_destroyed());
    }

    #[test]
    fn test_camera_follows_player() {
        let (mut state, mut net) = setup();
        let input = TickInput {
            pointer: Some(Vec2::new(800.0, 300.0)),
        };
        for _ in 0..300 {
            tick(&mut state, &input, &mut net);
        }
        let screen = state.camera.world_to_screen(state.player.pos);
        assert!((screen - state.viewport.center()).length() < 1.0);
        assert_eq!(state.player.pos.x, 1000.0);
        assert_eq!(state.time_ticks, 300);
    }

    #[test]
    fn test_pinned_player_sends_no_repeat_movement() {
        let (mut state, mut net) = setup();
        state.player.reconcile(Vec2::new(1000.0, 500.0), 20.0);
        let input = TickInput {
            pointer: Some(Vec2::new(800.0, 300.0)),
        };
        for _ in 0..5 {
            let report = tick(&mut state, &input, &mut net);
            assert!(!report.moved);
        }
        assert!(net.sent().is_empty());
    }

    #[test]
    fn test_no_pointer_holds_still() {
        let (mut state, mut net) = setup();
        let report = tick(&mut state, &TickInput::default(), &mut net);
        assert!(!report.moved);
        assert_eq!(state.player.pos, Vec2::new(500.0, 500.0));
    }
}

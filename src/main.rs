//! Blob Arena headless driver
//!
//! Runs the client simulation against the in-memory loopback network: food
//! and bots are scattered, the pointer circles the viewport, and a summary is
//! logged at the end. Pass a settings JSON path as the first argument to
//! override the defaults. Use `RUST_LOG=debug` to see every meal.

use std::path::Path;

use glam::Vec2;

use blob_arena::Settings;
use blob_arena::net::{LoopbackNetwork, pump};
use blob_arena::sim::{ClientState, Entity, Identity, TickInput, tick};

const SEED: u64 = 0x5eed_b10b;
const FOOD_COUNT: usize = 2000;
const BOT_COUNT: usize = 40;
const TICKS: u64 = 3600;

fn main() {
    env_logger::init();
    log::info!("Blob Arena (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let mut net = LoopbackNetwork::new();
    let bounds = settings.world_bounds();
    net.scatter_food(SEED, FOOD_COUNT, bounds);
    net.scatter_bots(SEED ^ 1, BOT_COUNT, bounds, 8.0, 60.0);

    let mut state = ClientState::centered(settings, Identity::from_bytes(b"local-player"));
    pump(&mut state, &mut net);
    log::info!("World seeded with {} entities", state.world.entity_count());

    let center = state.viewport.center();
    let orbit = state.viewport.half_diagonal() * 0.4;
    let mut eaten = 0u32;
    for t in 0..TICKS {
        let angle = t as f32 * 0.004;
        let input = TickInput {
            pointer: Some(center + Vec2::new(angle.cos(), angle.sin()) * orbit),
        };
        let report = tick(&mut state, &input, &mut net);
        eaten += report.total_eaten();
        pump(&mut state, &mut net);

        if t % 600 == 0 {
            log::info!(
                "tick {}: pos ({:.1}, {:.1}) radius {:.2} zoom {:.3}",
                state.time_ticks,
                state.player.pos.x,
                state.player.pos.y,
                state.player.radius(),
                state.camera.zoom
            );
        }
    }

    log::info!(
        "Done after {} ticks: ate {} entities, radius {:.2}, {} intents sent",
        state.time_ticks,
        eaten,
        state.player.radius(),
        net.sent().len()
    );
}

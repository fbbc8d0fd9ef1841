//! Level Walker Demo
//!
//! Loads a level and runtime config, then walks the player from its start
//! position through a fixed script of per-tick displacements. Every resolved
//! position is logged, which makes sliding along walls and stopping in
//! corners easy to follow.
//!
//! Usage: `level_walker [level.json] [config.toml|config.ron]`

use std::error::Error;

use collision_runtime::prelude::*;

const BUILTIN_LEVEL: &str = include_str!("../assets/sample_level.json");

/// Per-tick displacement and how many ticks to hold it
const SCRIPT: [(f32, f32, u32); 6] = [
    (4.0, 0.0, 60),
    (0.0, 4.0, 40),
    (3.0, 3.0, 50),
    (-4.0, 1.0, 60),
    (0.0, -5.0, 50),
    (6.0, -2.0, 40),
];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let level = match args.next() {
        Some(path) => Level::from_file(path)?,
        None => Level::from_json_str(BUILTIN_LEVEL)?,
    };
    let config = match args.next() {
        Some(path) => RuntimeConfig::load_from_file(path)?,
        None => RuntimeConfig::default(),
    };

    let degenerate = level.warn_on_degenerate();
    if degenerate > 0 {
        log::warn!("Level has {degenerate} degenerate obstacles");
    }

    let world = CollisionWorld::from_config(level.snapshot(), &config);
    let radius = config.entity_radius;
    let mut position = config.bounds.clamp(level.player_start.into(), radius);
    if let Some(index) = world.first_blocking(position.x, position.y, radius) {
        log::warn!("Player start ({}, {}) overlaps obstacle {index}", position.x, position.y);
    }

    let mut tick = 0_u32;
    let mut stalled = 0_u32;
    for &(dx, dy, ticks) in &SCRIPT {
        for _ in 0..ticks {
            let next = world.resolve_move(position.x, position.y, dx, dy, radius, &config.bounds);
            if next == position {
                stalled += 1;
                log::debug!("tick {tick}: fully blocked moving by ({dx}, {dy})");
            }
            log::info!("tick {tick:4}: ({:7.2}, {:7.2})", next.x, next.y);
            position = next;
            tick += 1;
        }
    }

    log::info!(
        "Finished after {tick} ticks at ({:.2}, {:.2}), {stalled} ticks fully blocked",
        position.x,
        position.y
    );
    Ok(())
}

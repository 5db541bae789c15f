//! Entity spawning
//!
//! Spawns only happen while the session is running. All randomness comes from
//! the state's seeded RNG so runs are reproducible.

use glam::Vec2;
use rand::Rng;

use super::state::{Body, EntityKind, FallingEntity, GameState, Snowflake};
use crate::tuning::{Tuning, lerp_range};

/// Append a gift just above the visible area
pub fn spawn_gift(state: &mut GameState, tuning: &Tuning) -> bool {
    spawn_falling(state, tuning, EntityKind::Gift)
}

/// Append an obstacle just above the visible area
pub fn spawn_obstacle(state: &mut GameState, tuning: &Tuning) -> bool {
    spawn_falling(state, tuning, EntityKind::Obstacle)
}

fn spawn_falling(state: &mut GameState, tuning: &Tuning, kind: EntityKind) -> bool {
    if !state.is_running() {
        return false;
    }

    let size = tuning.entity_size(state.playfield.x);
    let x = state.rng.random::<f32>() * (state.playfield.x - size);
    let speed_ratio = match kind {
        EntityKind::Gift => tuning.gift_speed_ratio,
        EntityKind::Obstacle => tuning.obstacle_speed_ratio,
    };
    let entity = FallingEntity {
        kind,
        body: Body::square(Vec2::new(x, -size), size),
        speed: state.playfield.y * speed_ratio,
    };

    log::debug!("Spawned {:?} at x={:.1}", kind, x);
    match kind {
        EntityKind::Gift => state.gifts.push(entity),
        EntityKind::Obstacle => state.obstacles.push(entity),
    }
    true
}

/// Roll for a new snowflake this frame
pub fn maybe_spawn_snowflake(state: &mut GameState, tuning: &Tuning) {
    if state.rng.random::<f32>() >= tuning.snow_chance {
        return;
    }

    let x = state.rng.random::<f32>() * state.playfield.x;
    let radius = lerp_range(&tuning.snow_radius, state.rng.random());
    let speed = lerp_range(&tuning.snow_speed, state.rng.random());
    let drift = lerp_range(&tuning.snow_drift, state.rng.random());
    state.snowflakes.push(Snowflake {
        pos: Vec2::new(x, crate::consts::SNOW_SPAWN_Y),
        radius,
        speed,
        drift,
    });
}

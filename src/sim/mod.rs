//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, speeds in pixels per frame
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, storage or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{Aabb, check_collision};
pub use spawn::{maybe_spawn_snowflake, spawn_gift, spawn_obstacle};
pub use state::{
    Body, EntityKind, FallingEntity, GameEvent, GamePhase, GameState, Player, Snowflake,
};
pub use tick::{TickInput, end_session, tick};

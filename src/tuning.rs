//! Data-driven game balance
//!
//! Every ratio is applied against the playfield size at spawn/reset time, so a
//! resized canvas changes new entities but never ones already falling.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gift_interval_ms: f64,
    pub obstacle_interval_ms: f64,
    pub gift_score: u64,

    pub player_size_ratio: f32,
    pub player_max_size: f32,
    pub player_bottom_margin: f32,
    pub player_speed_ratio: f32,

    pub entity_size_ratio: f32,
    pub entity_max_size: f32,
    pub gift_speed_ratio: f32,
    pub obstacle_speed_ratio: f32,

    pub snow_chance: f32,
    pub snow_radius: Range<f32>,
    pub snow_speed: Range<f32>,
    pub snow_drift: Range<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gift_interval_ms: GIFT_INTERVAL_MS,
            obstacle_interval_ms: OBSTACLE_INTERVAL_MS,
            gift_score: GIFT_SCORE,

            player_size_ratio: PLAYER_SIZE_RATIO,
            player_max_size: PLAYER_MAX_SIZE,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            player_speed_ratio: PLAYER_SPEED_RATIO,

            entity_size_ratio: ENTITY_SIZE_RATIO,
            entity_max_size: ENTITY_MAX_SIZE,
            gift_speed_ratio: GIFT_SPEED_RATIO,
            obstacle_speed_ratio: OBSTACLE_SPEED_RATIO,

            snow_chance: SNOW_CHANCE,
            snow_radius: 1.0..4.0,
            snow_speed: 1.0..3.0,
            snow_drift: -0.25..0.25,
        }
    }
}

impl Tuning {
    /// Side length of a freshly reset player
    pub fn player_size(&self, width: f32) -> f32 {
        (width * self.player_size_ratio).min(self.player_max_size)
    }

    /// Side length of gifts and obstacles
    pub fn entity_size(&self, width: f32) -> f32 {
        (width * self.entity_size_ratio).min(self.entity_max_size)
    }
}

/// Sample `range` with a unit roll in [0, 1)
///
/// Unlike `random_range` this never panics on an empty range.
#[inline]
pub fn lerp_range(range: &Range<f32>, roll: f32) -> f32 {
    range.start + roll * (range.end - range.start)
}

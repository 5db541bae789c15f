//! Santa Catch - catch the falling gifts, dodge the obstacles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `session`: The game session wiring the simulation to storage, UI and timers
//! - `renderer`: 2D drawing surface abstraction (Canvas 2D in the browser)
//! - `platform`: Browser/native platform abstraction (input, storage, time)
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use highscores::HighScore;
pub use session::GameSession;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Gift spawn period (milliseconds)
    pub const GIFT_INTERVAL_MS: f64 = 1000.0;
    /// Obstacle spawn period (milliseconds)
    pub const OBSTACLE_INTERVAL_MS: f64 = 1500.0;
    /// Maximum timer fires per frame to prevent a spawn burst after a stall
    pub const MAX_CATCHUP_FIRES: u32 = 4;

    /// Points per gift caught
    pub const GIFT_SCORE: u64 = 10;

    /// Player size as a fraction of playfield width
    pub const PLAYER_SIZE_RATIO: f32 = 0.1;
    pub const PLAYER_MAX_SIZE: f32 = 64.0;
    /// Gap between player and playfield bottom
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;
    /// Player speed per frame as a fraction of playfield width
    pub const PLAYER_SPEED_RATIO: f32 = 0.005;

    /// Gift/obstacle size as a fraction of playfield width
    pub const ENTITY_SIZE_RATIO: f32 = 0.05;
    pub const ENTITY_MAX_SIZE: f32 = 30.0;
    /// Fall speed per frame as a fraction of playfield height
    pub const GIFT_SPEED_RATIO: f32 = 0.003;
    pub const OBSTACLE_SPEED_RATIO: f32 = 0.004;

    /// Per-frame probability of a new snowflake
    pub const SNOW_CHANCE: f32 = 0.1;
    pub const SNOW_SPAWN_Y: f32 = -10.0;

    /// Sprite image paths
    pub const PLAYER_IMAGE: &str = "santa.png";
    pub const GIFT_IMAGE: &str = "gift.png";
    pub const OBSTACLE_IMAGE: &str = "obstacle.png";

    /// LocalStorage keys
    pub const HIGH_SCORE_KEY: &str = "santaHighScore";
    pub const SETTINGS_KEY: &str = "santa_settings";
}

//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, nothing has been spawned yet
    Idle,
    /// Active gameplay
    Running,
    /// Session ended, waiting for restart
    GameOver,
}

/// Something the simulation wants the outside world to know about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A gift was caught; carries the new score
    GiftCollected { score: u64 },
    /// The player hit an obstacle
    GameOver { score: u64 },
}

/// Position and size shared by everything drawn as a sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(side),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// The player's sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Horizontal speed (pixels per frame)
    pub speed: f32,
}

impl Player {
    /// Bottom-center placement for a playfield of the given size
    pub fn spawn(playfield: Vec2, tuning: &Tuning) -> Self {
        let size = tuning.player_size(playfield.x);
        let pos = Vec2::new(
            playfield.x / 2.0 - size / 2.0,
            playfield.y - size - tuning.player_bottom_margin,
        );
        Self {
            body: Body::square(pos, size),
            speed: playfield.x * tuning.player_speed_ratio,
        }
    }

    /// Shift horizontally, keeping the sprite inside [0, playfield_width - w]
    pub fn move_by(&mut self, dx: f32, playfield_width: f32) {
        let max_x = (playfield_width - self.body.size.x).max(0.0);
        self.body.pos.x = (self.body.pos.x + dx).clamp(0.0, max_x);
    }
}

/// Falling entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Gift,
    Obstacle,
}

/// A gift or obstacle falling at constant speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingEntity {
    pub kind: EntityKind,
    pub body: Body,
    /// Vertical speed (pixels per frame)
    pub speed: f32,
}

impl FallingEntity {
    pub fn fall(&mut self) {
        self.body.pos.y += self.speed;
    }

    /// True once the top edge is below the playfield
    pub fn is_below(&self, playfield_height: f32) -> bool {
        self.body.pos.y > playfield_height
    }
}

/// Decorative snowflake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snowflake {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Horizontal drift per frame
    pub drift: f32,
}

impl Snowflake {
    pub fn advance(&mut self) {
        self.pos.y += self.speed;
        self.pos.x += self.drift;
    }
}

/// Complete game state for one playfield
#[derive(Debug, Clone)]
pub struct GameState {
    /// Playfield size (canvas width, height)
    pub playfield: Vec2,
    pub phase: GamePhase,
    pub score: u64,
    pub player: Player,
    /// Gifts in spawn order
    pub gifts: Vec<FallingEntity>,
    /// Obstacles in spawn order
    pub obstacles: Vec<FallingEntity>,
    pub snowflakes: Vec<Snowflake>,
    /// Simulation frame counter (current session)
    pub frames: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create an idle game state with the given seed
    pub fn new(width: f32, height: f32, tuning: &Tuning, seed: u64) -> Self {
        let playfield = Vec2::new(width, height);
        Self {
            playfield,
            phase: GamePhase::Idle,
            score: 0,
            player: Player::spawn(playfield, tuning),
            gifts: Vec::new(),
            obstacles: Vec::new(),
            snowflakes: Vec::new(),
            frames: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Wipe all entities and put the player back at bottom-center
    pub fn reset(&mut self, tuning: &Tuning) {
        self.score = 0;
        self.frames = 0;
        self.gifts.clear();
        self.obstacles.clear();
        self.snowflakes.clear();
        self.player = Player::spawn(self.playfield, tuning);
    }

    /// Apply a new playfield size; the player is pulled back inside
    pub fn resize(&mut self, width: f32, height: f32) {
        self.playfield = Vec2::new(width, height);
        self.player.move_by(0.0, width);
    }
}

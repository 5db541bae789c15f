//! 2D rendering
//!
//! The game only needs three drawing operations, so the target is a small
//! trait. The browser implements it on a Canvas 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::sim::{Body, GameState};

/// Which image to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Player,
    Gift,
    Obstacle,
}

impl Sprite {
    pub const ALL: [Sprite; 3] = [Sprite::Player, Sprite::Gift, Sprite::Obstacle];

    /// Image path relative to the page
    pub fn path(&self) -> &'static str {
        use crate::consts::*;
        match self {
            Sprite::Player => PLAYER_IMAGE,
            Sprite::Gift => GIFT_IMAGE,
            Sprite::Obstacle => OBSTACLE_IMAGE,
        }
    }
}

/// A 2D drawing target
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    /// Filled white circle
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);
    /// Draw a sprite; implementations skip images that are not loaded
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32);
}

/// Render one frame: snow, player, gifts, then obstacles on top
pub fn draw(state: &GameState, surface: &mut impl Surface) {
    surface.clear(state.playfield.x, state.playfield.y);

    for flake in &state.snowflakes {
        surface.fill_circle(flake.pos.x, flake.pos.y, flake.radius);
    }

    draw_body(surface, Sprite::Player, &state.player.body);
    for gift in &state.gifts {
        draw_body(surface, Sprite::Gift, &gift.body);
    }
    for obstacle in &state.obstacles {
        draw_body(surface, Sprite::Obstacle, &obstacle.body);
    }
}

fn draw_body(surface: &mut impl Surface, sprite: Sprite, body: &Body) {
    surface.draw_image(sprite, body.pos.x, body.pos.y, body.size.x, body.size.y);
}

/// Records draw calls instead of drawing (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear { width: f32, height: f32 },
    Circle { x: f32, y: f32, radius: f32 },
    Image { sprite: Sprite, x: f32, y: f32, w: f32, h: f32 },
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        // A cleared surface forgets the previous frame
        self.calls.clear();
        self.calls.push(DrawCall::Clear { width, height });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.calls.push(DrawCall::Circle { x, y, radius });
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Image { sprite, x, y, w, h });
    }
}

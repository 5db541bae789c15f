//! Idle/demo mode - the computer plays the game
//!
//! Dodging wins over chasing: any obstacle about to land on the player's
//! column pushes it aside, otherwise it heads for the lowest gift still above.

use super::state::{FallingEntity, GameState};
use super::tick::TickInput;

/// Frames of look-ahead when judging whether an obstacle is a threat
const THREAT_FRAMES: f32 = 45.0;

/// Choose held controls for the current frame
pub fn autopilot(state: &GameState) -> TickInput {
    let player = &state.player;
    let player_left = player.body.pos.x;
    let player_right = player_left + player.body.size.x;
    let player_top = player.body.pos.y;
    let center = player_left + player.body.size.x / 2.0;
    // Keep a player-width of clearance on either side
    let margin = player.body.size.x;

    let threat = state
        .obstacles
        .iter()
        .filter(|o| {
            let left = o.body.pos.x;
            let right = left + o.body.size.x;
            let bottom = o.body.pos.y + o.body.size.y;
            right > player_left - margin
                && left < player_right + margin
                && bottom <= player_top + player.body.size.y
                && player_top - bottom < o.speed * THREAT_FRAMES
        })
        .max_by(|a, b| a.body.pos.y.total_cmp(&b.body.pos.y));

    if let Some(obstacle) = threat {
        let obstacle_center = center_x(obstacle);
        let wants_left = if center < obstacle_center {
            player_left > 0.0
        } else {
            // Cornered on the right wall: squeeze past on the other side
            player_right >= state.playfield.x
        };
        return TickInput {
            left: wants_left,
            right: !wants_left,
        };
    }

    let target = state
        .gifts
        .iter()
        .filter(|g| g.body.pos.y + g.body.size.y <= player_top + player.body.size.y)
        .max_by(|a, b| a.body.pos.y.total_cmp(&b.body.pos.y));

    match target {
        Some(gift) => {
            let dx = center_x(gift) - center;
            TickInput {
                left: dx < -player.speed,
                right: dx > player.speed,
            }
        }
        None => TickInput::default(),
    }
}

fn center_x(entity: &FallingEntity) -> f32 {
    entity.body.pos.x + entity.body.size.x / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Body, EntityKind, GamePhase};
    use crate::sim::tick::tick;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state() -> GameState {
        let tuning = Tuning::default();
        let mut state = GameState::new(400.0, 600.0, &tuning, 5);
        state.phase = GamePhase::Running;
        state
    }

    fn falling(kind: EntityKind, x: f32, y: f32) -> FallingEntity {
        FallingEntity {
            kind,
            body: Body::square(Vec2::new(x, y), 20.0),
            speed: 2.0,
        }
    }

    #[test]
    fn test_idles_with_nothing_to_do() {
        assert_eq!(autopilot(&state()), TickInput::default());
    }

    #[test]
    fn test_chases_gift() {
        let mut state = state();
        state.gifts.push(falling(EntityKind::Gift, 350.0, 100.0));
        let input = autopilot(&state);
        assert!(input.right && !input.left);
    }

    #[test]
    fn test_dodges_obstacle_overhead() {
        let mut state = state();
        // Player spans 180..220, obstacle slightly right of center
        state.obstacles.push(falling(EntityKind::Obstacle, 195.0, 480.0));
        state.gifts.push(falling(EntityKind::Gift, 350.0, 100.0));
        let input = autopilot(&state);
        assert!(input.left && !input.right);
    }

    #[test]
    fn test_autopilot_catches_a_gift() {
        let tuning = Tuning::default();
        let mut state = state();
        state.gifts.push(falling(EntityKind::Gift, 300.0, 300.0));
        for _ in 0..200 {
            let input = autopilot(&state);
            tick(&mut state, &input, &tuning);
        }
        assert_eq!(state.score, tuning.gift_score);
    }
}

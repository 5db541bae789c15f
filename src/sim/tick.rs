//! Per-frame simulation step
//!
//! Core game loop that advances the simulation by one frame. Speeds are in
//! pixels per frame, matching the display refresh.

use super::collision::check_collision;
use super::spawn::maybe_spawn_snowflake;
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Held controls for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left (ArrowLeft)
    pub left: bool,
    /// Move right (ArrowRight)
    pub right: bool,
}

/// Advance the game state by one frame
///
/// Does nothing unless the state is running. Returns the events produced this
/// frame in the order they happened.
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }
    state.frames += 1;

    let width = state.playfield.x;
    let height = state.playfield.y;

    // Player
    if input.left {
        let speed = state.player.speed;
        state.player.move_by(-speed, width);
    }
    if input.right {
        let speed = state.player.speed;
        state.player.move_by(speed, width);
    }
    let player_box = state.player.body.bounds();

    // Gifts: caught ones score, missed ones vanish without penalty
    let mut score = state.score;
    state.gifts.retain_mut(|gift| {
        gift.fall();
        if check_collision(&player_box, &gift.body.bounds()) {
            score += tuning.gift_score;
            events.push(GameEvent::GiftCollected { score });
            false
        } else {
            !gift.is_below(height)
        }
    });
    state.score = score;

    // Obstacles: any hit ends the session, but only once
    let mut hit = false;
    state.obstacles.retain_mut(|obstacle| {
        obstacle.fall();
        if check_collision(&player_box, &obstacle.body.bounds()) {
            hit = true;
            true
        } else {
            !obstacle.is_below(height)
        }
    });
    if hit {
        end_session(state, &mut events);
    }

    // Snow
    maybe_spawn_snowflake(state, tuning);
    state.snowflakes.retain_mut(|flake| {
        flake.advance();
        flake.pos.y <= height
    });

    events
}

/// Transition Running -> GameOver; a no-op in any other phase
pub fn end_session(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.phase != GamePhase::Running {
        return;
    }
    state.phase = GamePhase::GameOver;
    events.push(GameEvent::GameOver { score: state.score });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Body, EntityKind, FallingEntity};
    use glam::Vec2;
    use proptest::prelude::*;

    fn running(width: f32, height: f32) -> (GameState, Tuning) {
        let mut tuning = Tuning::default();
        // Keep scenario tests free of decorative noise
        tuning.snow_chance = 0.0;
        let mut state = GameState::new(width, height, &tuning, 42);
        state.phase = GamePhase::Running;
        (state, tuning)
    }

    fn entity(kind: EntityKind, x: f32, y: f32, size: f32, speed: f32) -> FallingEntity {
        FallingEntity {
            kind,
            body: Body::square(Vec2::new(x, y), size),
            speed,
        }
    }

    const LEFT: TickInput = TickInput {
        left: true,
        right: false,
    };

    #[test]
    fn test_left_moves_by_speed() {
        let (mut state, tuning) = running(400.0, 600.0);
        assert_eq!(state.player.body.size.x, 40.0);
        state.player.body.pos.x = 200.0;
        state.player.speed = 5.0;
        tick(&mut state, &LEFT, &tuning);
        assert_eq!(state.player.body.pos.x, 195.0);
    }

    #[test]
    fn test_left_clamps_at_zero() {
        let (mut state, tuning) = running(400.0, 600.0);
        state.player.body.pos.x = 5.0;
        state.player.speed = 5.0;
        for _ in 0..50 {
            tick(&mut state, &LEFT, &tuning);
            assert!(state.player.body.pos.x >= 0.0);
        }
        assert_eq!(state.player.body.pos.x, 0.0);
    }

    #[test]
    fn test_both_keys_cancel_out() {
        let (mut state, tuning) = running(400.0, 600.0);
        state.player.body.pos.x = 200.0;
        let input = TickInput {
            left: true,
            right: true,
        };
        tick(&mut state, &input, &tuning);
        assert_eq!(state.player.body.pos.x, 200.0);
    }

    #[test]
    fn test_missed_gift_is_removed_without_penalty() {
        let (mut state, tuning) = running(400.0, 600.0);
        // Far from the player horizontally
        state.player.body.pos.x = 0.0;
        state.gifts.push(entity(EntityKind::Gift, 300.0, 595.0, 20.0, 10.0));
        let events = tick(&mut state, &TickInput::default(), &tuning);
        assert!(state.gifts.is_empty());
        assert_eq!(state.score, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_gift_on_screen_edge_survives() {
        let (mut state, tuning) = running(400.0, 600.0);
        state.player.body.pos.x = 0.0;
        state.gifts.push(entity(EntityKind::Gift, 300.0, 590.0, 20.0, 10.0));
        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.gifts.len(), 1);
        assert_eq!(state.gifts[0].body.pos.y, 600.0);
    }

    #[test]
    fn test_three_gifts_score_thirty() {
        let (mut state, tuning) = running(400.0, 600.0);
        let p = state.player.body.pos;
        for i in 0..3 {
            state
                .gifts
                .push(entity(EntityKind::Gift, p.x + i as f32 * 5.0, p.y, 20.0, 1.0));
        }
        let events = tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.score, 30);
        assert!(state.gifts.is_empty());
        assert_eq!(
            events,
            vec![
                GameEvent::GiftCollected { score: 10 },
                GameEvent::GiftCollected { score: 20 },
                GameEvent::GiftCollected { score: 30 },
            ]
        );
    }

    #[test]
    fn test_removal_does_not_skip_neighbours() {
        let (mut state, tuning) = running(400.0, 600.0);
        let p = state.player.body.pos;
        // caught, missed, caught, still falling
        state.gifts.push(entity(EntityKind::Gift, p.x, p.y, 20.0, 1.0));
        state.gifts.push(entity(EntityKind::Gift, 380.0, 599.0, 20.0, 5.0));
        state.gifts.push(entity(EntityKind::Gift, p.x + 10.0, p.y, 20.0, 1.0));
        state.gifts.push(entity(EntityKind::Gift, 0.0, 0.0, 20.0, 1.0));
        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.score, 20);
        assert_eq!(state.gifts.len(), 1);
        assert_eq!(state.gifts[0].body.pos, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_obstacle_hit_ends_session_once() {
        let (mut state, tuning) = running(400.0, 600.0);
        let p = state.player.body.pos;
        state.score = 40;
        for i in 0..3 {
            state
                .obstacles
                .push(entity(EntityKind::Obstacle, p.x + i as f32, p.y, 20.0, 1.0));
        }
        let events = tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(events, vec![GameEvent::GameOver { score: 40 }]);

        // A stopped session no longer advances
        let events = tick(&mut state, &TickInput::default(), &tuning);
        assert!(events.is_empty());
        assert_eq!(state.obstacles[0].body.pos.y, p.y + 1.0);
    }

    #[test]
    fn test_end_session_is_idempotent() {
        let (mut state, _) = running(400.0, 600.0);
        let mut events = Vec::new();
        end_session(&mut state, &mut events);
        end_session(&mut state, &mut events);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_obstacle_leaves_playfield() {
        let (mut state, tuning) = running(400.0, 600.0);
        state.player.body.pos.x = 0.0;
        state
            .obstacles
            .push(entity(EntityKind::Obstacle, 300.0, 598.0, 20.0, 4.0));
        tick(&mut state, &TickInput::default(), &tuning);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_snowflakes_drift_and_melt() {
        let (mut state, mut tuning) = running(400.0, 600.0);
        tuning.snow_chance = 1.0;
        tick(&mut state, &TickInput::default(), &tuning);
        assert_eq!(state.snowflakes.len(), 1);
        let flake = state.snowflakes[0].clone();
        assert_eq!(flake.pos.y, -10.0 + flake.speed);

        tuning.snow_chance = 0.0;
        for _ in 0..700 {
            tick(&mut state, &TickInput::default(), &tuning);
        }
        assert!(state.snowflakes.is_empty());
    }

    #[test]
    fn test_idle_state_does_not_tick() {
        let tuning = Tuning::default();
        let mut state = GameState::new(400.0, 600.0, &tuning, 1);
        let before = state.player.body.pos;
        tick(&mut state, &LEFT, &tuning);
        assert_eq!(state.player.body.pos, before);
        assert_eq!(state.frames, 0);
    }

    #[test]
    fn test_determinism() {
        let mut tuning = Tuning::default();
        tuning.snow_chance = 0.5;
        let mut a = GameState::new(400.0, 600.0, &tuning, 99999);
        let mut b = GameState::new(400.0, 600.0, &tuning, 99999);
        a.phase = GamePhase::Running;
        b.phase = GamePhase::Running;
        for _ in 0..120 {
            tick(&mut a, &TickInput::default(), &tuning);
            tick(&mut b, &TickInput::default(), &tuning);
        }
        assert_eq!(a.snowflakes, b.snowflakes);
    }

    proptest! {
        #[test]
        fn player_stays_in_bounds(
            start in 0.0f32..360.0,
            speed in 0.0f32..50.0,
            moves in proptest::collection::vec(any::<(bool, bool)>(), 0..100),
        ) {
            let (mut state, tuning) = running(400.0, 600.0);
            state.player.body.pos.x = start;
            state.player.speed = speed;
            for (left, right) in moves {
                tick(&mut state, &TickInput { left, right }, &tuning);
                let x = state.player.body.pos.x;
                prop_assert!(x >= 0.0);
                prop_assert!(x <= 400.0 - state.player.body.size.x);
            }
        }
    }
}

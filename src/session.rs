//! Game session
//!
//! Owns the simulation state plus every port it talks to: the key-value store
//! holding the high score, the UI, and the spawn scheduler. The host drives it
//! with animation-frame timestamps, draws after each frame, and keeps the loop
//! alive only while `is_running()` holds.

use crate::highscores::HighScore;
use crate::platform::{KeyValueStore, Scheduler, Tick};
use crate::renderer::{self, Surface};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GamePhase, GameState, TickInput};
use crate::tuning::Tuning;
use crate::ui::UiSink;

/// One game instance: Idle -> Running -> GameOver -> Running -> ...
pub struct GameSession<S, U> {
    state: GameState,
    /// Tuning before user preferences are folded in
    base_tuning: Tuning,
    tuning: Tuning,
    high_score: HighScore,
    scheduler: Scheduler,
    store: S,
    ui: U,
    sessions_started: u32,
}

impl<S: KeyValueStore, U: UiSink> GameSession<S, U> {
    /// Build an idle session; the high score is read from `store` here, once
    pub fn new(width: f32, height: f32, tuning: Tuning, store: S, mut ui: U, seed: u64) -> Self {
        let high_score = HighScore::load(&store);
        let state = GameState::new(width, height, &tuning, seed);
        let scheduler = Scheduler::new(tuning.gift_interval_ms, tuning.obstacle_interval_ms);

        ui.set_scores(0, high_score.get());
        ui.set_start_screen_visible(true);

        Self {
            state,
            base_tuning: tuning.clone(),
            tuning,
            high_score,
            scheduler,
            store,
            ui,
            sessions_started: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.get()
    }

    /// Fold user preferences into the tuning (takes effect next frame)
    pub fn apply_settings(&mut self, settings: &Settings) {
        let mut tuning = self.base_tuning.clone();
        settings.apply(&mut tuning);
        self.tuning = tuning;
    }

    /// Apply changed preferences and persist them next to the high score
    pub fn update_settings(&mut self, settings: &Settings) {
        self.apply_settings(settings);
        settings.save(&mut self.store);
    }

    /// Start (or restart) a session from any phase
    pub fn start(&mut self) {
        self.state.reset(&self.tuning);
        self.state.phase = GamePhase::Running;
        self.scheduler.start();
        self.scheduler.resync();
        self.sessions_started += 1;

        self.ui.set_scores(0, self.high_score.get());
        self.ui.set_start_screen_visible(false);
        self.ui.hide_game_over();

        log::info!("Session {} started", self.sessions_started);
    }

    /// Process one animation frame at timestamp `now_ms`
    ///
    /// Returns whether the host should schedule another frame.
    pub fn frame(&mut self, now_ms: f64, input: &TickInput) -> bool {
        if !self.is_running() {
            return false;
        }
        for tick in self.scheduler.frame_at(now_ms) {
            self.handle(tick, input);
        }
        self.is_running()
    }

    /// Process one frame that lasted `dt_ms`
    pub fn advance(&mut self, dt_ms: f64, input: &TickInput) -> bool {
        if !self.is_running() {
            return false;
        }
        for tick in self.scheduler.advance(dt_ms) {
            self.handle(tick, input);
        }
        self.is_running()
    }

    /// Consume a single scheduling message
    pub fn handle(&mut self, tick: Tick, input: &TickInput) {
        match tick {
            Tick::SpawnGift => self.spawn_gift(),
            Tick::SpawnObstacle => self.spawn_obstacle(),
            Tick::Frame => self.update(input),
        }
    }

    pub fn spawn_gift(&mut self) {
        sim::spawn_gift(&mut self.state, &self.tuning);
    }

    pub fn spawn_obstacle(&mut self) {
        sim::spawn_obstacle(&mut self.state, &self.tuning);
    }

    /// Advance the simulation one frame and react to what happened
    pub fn update(&mut self, input: &TickInput) {
        let events = sim::tick(&mut self.state, input, &self.tuning);
        self.apply(&events);
    }

    /// Horizontal drag from touch, applied immediately with the usual clamp
    pub fn drag(&mut self, dx: f32) {
        let width = self.state.playfield.x;
        self.state.player.move_by(dx, width);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        renderer::draw(&self.state, surface);
    }

    /// End the running session; no effect in any other phase
    pub fn game_over(&mut self) {
        let mut events = Vec::new();
        sim::end_session(&mut self.state, &mut events);
        self.apply(&events);
    }

    fn apply(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::GiftCollected { score } => {
                    self.ui.set_scores(score, self.high_score.get());
                }
                GameEvent::GameOver { score } => self.finish(score),
            }
        }
    }

    fn finish(&mut self, score: u64) {
        self.scheduler.stop();
        let new_record = self.high_score.record(score, &mut self.store);
        let best = self.high_score.get();

        log::info!(
            "Game over after {} frames: score {} (best {}{})",
            self.state.frames,
            score,
            best,
            if new_record { ", new record" } else { "" }
        );
        self.ui.set_scores(score, best);
        self.ui.show_game_over(score, best);
    }
}

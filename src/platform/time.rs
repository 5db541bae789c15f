//! Frame and interval scheduling
//!
//! The browser hands us one animation-frame callback with a timestamp. The two
//! spawn timers are derived from that clock instead of separate `setInterval`
//! callbacks, so everything that mutates the game state arrives as a `Tick`
//! drained once per frame.

use crate::consts::MAX_CATCHUP_FIRES;

/// A scheduling message consumed by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    SpawnGift,
    SpawnObstacle,
    /// One update + draw
    Frame,
}

/// Fires every `period_ms` of accumulated time while armed
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period_ms: f64,
    elapsed_ms: f64,
    armed: bool,
}

impl IntervalTimer {
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms: period_ms.max(1.0),
            elapsed_ms: 0.0,
            armed: false,
        }
    }

    /// Start counting from zero (re-arming resets the phase)
    pub fn arm(&mut self) {
        self.elapsed_ms = 0.0;
        self.armed = true;
    }

    pub fn cancel(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0.0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Accumulate time; returns how many times the timer fired
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !self.armed {
            return 0;
        }
        self.elapsed_ms += dt_ms.max(0.0);

        let mut fires = 0;
        while self.elapsed_ms >= self.period_ms && fires < MAX_CATCHUP_FIRES {
            self.elapsed_ms -= self.period_ms;
            fires += 1;
        }
        // Drop any backlog beyond the catch-up cap
        if fires == MAX_CATCHUP_FIRES {
            self.elapsed_ms = self.elapsed_ms.min(self.period_ms);
        }
        fires
    }
}

/// Gift + obstacle timers and the frame clock
#[derive(Debug, Clone)]
pub struct Scheduler {
    gift: IntervalTimer,
    obstacle: IntervalTimer,
    last_time_ms: Option<f64>,
}

impl Scheduler {
    pub fn new(gift_period_ms: f64, obstacle_period_ms: f64) -> Self {
        Self {
            gift: IntervalTimer::new(gift_period_ms),
            obstacle: IntervalTimer::new(obstacle_period_ms),
            last_time_ms: None,
        }
    }

    /// Arm both spawn timers; existing timers are replaced, never duplicated
    pub fn start(&mut self) {
        self.gift.arm();
        self.obstacle.arm();
    }

    pub fn stop(&mut self) {
        self.gift.cancel();
        self.obstacle.cancel();
    }

    pub fn is_active(&self) -> bool {
        self.gift.is_armed() || self.obstacle.is_armed()
    }

    /// Forget the last timestamp (e.g. after the frame loop was suspended)
    pub fn resync(&mut self) {
        self.last_time_ms = None;
    }

    /// Turn an animation-frame timestamp into the ticks due this frame
    ///
    /// Spawn timers follow wall-clock time at any frame rate; only the
    /// per-timer catch-up cap limits bursts after a long stall.
    pub fn frame_at(&mut self, now_ms: f64) -> Vec<Tick> {
        let dt = match self.last_time_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_time_ms = Some(now_ms);
        self.advance(dt)
    }

    /// Advance by an explicit delta: spawns first, then the frame itself
    pub fn advance(&mut self, dt_ms: f64) -> Vec<Tick> {
        let gifts = self.gift.advance(dt_ms);
        let obstacles = self.obstacle.advance(dt_ms);

        let mut ticks = Vec::with_capacity((gifts + obstacles + 1) as usize);
        ticks.extend(std::iter::repeat_n(Tick::SpawnGift, gifts as usize));
        ticks.extend(std::iter::repeat_n(Tick::SpawnObstacle, obstacles as usize));
        ticks.push(Tick::Frame);
        ticks
    }
}

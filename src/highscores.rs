//! Persisted high score
//!
//! A single integer kept as text under `santaHighScore`. It only ever goes up.

use crate::consts::HIGH_SCORE_KEY;
use crate::platform::KeyValueStore;

/// Best score of any completed session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    pub fn new(best: u64) -> Self {
        Self { best }
    }

    pub fn get(&self) -> u64 {
        self.best
    }

    /// Parse a stored value from its leading digits ("12.5" and "12abc"
    /// are 12); anything missing, negative or non-numeric counts as zero
    pub fn parse(raw: Option<&str>) -> Self {
        let best = raw
            .map(|s| {
                let s = s.trim_start();
                let s = s.strip_prefix('+').unwrap_or(s);
                let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
                &s[..end]
            })
            .and_then(|digits| digits.parse::<u64>().ok())
            .unwrap_or(0);
        Self { best }
    }

    /// Load from storage (once, at startup)
    pub fn load(store: &impl KeyValueStore) -> Self {
        let raw = store.get(HIGH_SCORE_KEY);
        let high = Self::parse(raw.as_deref());
        match raw {
            Some(_) => log::info!("Loaded high score {}", high.best),
            None => log::info!("No high score found, starting fresh"),
        }
        high
    }

    /// Check if a finished session's score beats the record
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Fold in a finished session's score, writing it out if it is a new record
    ///
    /// Returns true on a new record.
    pub fn record(&mut self, score: u64, store: &mut impl KeyValueStore) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        if store.set(HIGH_SCORE_KEY, &score.to_string()) {
            log::info!("New high score {} saved", score);
        } else {
            log::warn!("New high score {} could not be saved", score);
        }
        true
    }
}

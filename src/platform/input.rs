//! Keyboard and touch input
//!
//! Key state is sampled once per frame into a `TickInput`; touch drags are
//! turned into horizontal deltas that the session applies immediately.

use crate::sim::TickInput;

/// A control the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Left,
    Right,
    /// Flip the snowfall preference (press only)
    ToggleSnowfall,
}

/// Map a `KeyboardEvent.key` value to a control
pub fn key_to_control(key: &str) -> Option<Control> {
    match key {
        "ArrowLeft" => Some(Control::Left),
        "ArrowRight" => Some(Control::Right),
        "s" | "S" => Some(Control::ToggleSnowfall),
        _ => None,
    }
}

/// Held keys plus the last touch position
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    touch_x: Option<f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press/release; returns the control the key maps to
    pub fn set_key(&mut self, key: &str, pressed: bool) -> Option<Control> {
        let control = key_to_control(key)?;
        match control {
            Control::Left => self.left = pressed,
            Control::Right => self.right = pressed,
            Control::ToggleSnowfall => {}
        }
        Some(control)
    }

    /// Controls held right now
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.touch_x = Some(x);
    }

    /// Horizontal movement since the previous touch sample
    pub fn touch_move(&mut self, x: f32) -> f32 {
        let dx = self.touch_x.map_or(0.0, |last| x - last);
        self.touch_x = Some(x);
        dx
    }

    pub fn touch_end(&mut self) {
        self.touch_x = None;
    }

    /// Release everything (window blur)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

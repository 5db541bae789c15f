//! HUD and menu screens
//!
//! The core only pushes values out; buttons call back into the session from
//! the host side.

/// One-way UI outputs from the game session
pub trait UiSink {
    /// Live score readouts
    fn set_scores(&mut self, score: u64, high_score: u64);
    fn set_start_screen_visible(&mut self, visible: bool);
    /// Show the game over screen with the final numbers
    fn show_game_over(&mut self, final_score: u64, high_score: u64);
    fn hide_game_over(&mut self);
}

/// Headless UI that reports through the logger
#[derive(Debug, Clone, Copy, Default)]
pub struct LogUi;

impl UiSink for LogUi {
    fn set_scores(&mut self, score: u64, high_score: u64) {
        log::debug!("Score {} (best {})", score, high_score);
    }

    fn set_start_screen_visible(&mut self, _visible: bool) {}

    fn show_game_over(&mut self, final_score: u64, high_score: u64) {
        log::info!("Game over! Final score {} (best {})", final_score, high_score);
    }

    fn hide_game_over(&mut self) {}
}

/// DOM elements from `index.html`
#[cfg(target_arch = "wasm32")]
pub struct DomUi {
    document: web_sys::Document,
}

#[cfg(target_arch = "wasm32")]
impl DomUi {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn set_text(&self, id: &str, value: u64) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(&value.to_string()));
        }
    }

    fn set_display(&self, id: &str, display: &str) {
        use wasm_bindgen::JsCast;

        if let Some(el) = self
            .document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el.style().set_property("display", display);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl UiSink for DomUi {
    fn set_scores(&mut self, score: u64, high_score: u64) {
        self.set_text("currentScore", score);
        self.set_text("highScore", high_score);
    }

    fn set_start_screen_visible(&mut self, visible: bool) {
        self.set_display("startScreen", if visible { "flex" } else { "none" });
    }

    fn show_game_over(&mut self, final_score: u64, high_score: u64) {
        self.set_text("finalScore", final_score);
        self.set_text("finalHighScore", high_score);
        self.set_display("gameOverScreen", "flex");
    }

    fn hide_game_over(&mut self) {
        self.set_display("gameOverScreen", "none");
    }
}

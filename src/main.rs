//! Santa Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use santa_catch::platform::{Control, InputState, LocalStorage};
    use santa_catch::renderer::CanvasSurface;
    use santa_catch::ui::DomUi;
    use santa_catch::{GameSession, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        session: GameSession<LocalStorage, DomUi>,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        input: InputState,
        settings: Settings,
        /// A requestAnimationFrame callback is pending
        loop_active: bool,
    }

    impl Game {
        /// Match the canvas backing store to its CSS size
        fn resize(&mut self) {
            let width = self.canvas.offset_width().max(0) as u32;
            let height = self.canvas.offset_height().max(0) as u32;
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.session.resize(width as f32, height as f32);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Santa Catch starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let width = canvas.offset_width().max(0) as u32;
        let height = canvas.offset_height().max(0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let store = LocalStorage::new();
        let settings = Settings::load(&store);

        let seed = js_sys::Date::now() as u64;
        let mut session = GameSession::new(
            width as f32,
            height as f32,
            Tuning::default(),
            store,
            DomUi::new(document.clone()),
            seed,
        );
        session.apply_settings(&settings);
        let surface = CanvasSurface::new(&canvas)?;

        let game = Rc::new(RefCell::new(Game {
            session,
            surface,
            canvas: canvas.clone(),
            input: InputState::new(),
            settings,
            loop_active: false,
        }));

        log::info!("Game initialized with seed: {}", seed);

        setup_resize(game.clone());
        setup_input_handlers(&canvas, game.clone());
        setup_buttons(&document, game.clone());

        Ok(())
    }

    fn start_game(game: &Rc<RefCell<Game>>) {
        let needs_loop = {
            let mut g = game.borrow_mut();
            g.session.start();
            let needs_loop = !g.loop_active;
            g.loop_active = true;
            needs_loop
        };
        if needs_loop {
            request_animation_frame(game.clone());
        }
    }

    fn setup_buttons(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        for id in ["startButton", "restartButton"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    start_game(&game);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        for (event_name, pressed) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let g = &mut *g;
                let control = g.input.set_key(&event.key(), pressed);
                if pressed && !event.repeat() && control == Some(Control::ToggleSnowfall) {
                    g.settings.snowfall = !g.settings.snowfall;
                    g.session.update_settings(&g.settings);
                    log::info!("Snowfall: {}", g.settings.snowfall);
                }
            });
            let _ = window
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: drop held keys so the player doesn't keep sliding
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().input.clear();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().input.touch_start(touch.client_x() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - drag the player directly
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let mut g = game.borrow_mut();
                    let dx = g.input.touch_move(touch.client_x() as f32);
                    let dx = dx * g.settings.effective_touch_sensitivity();
                    g.session.drag(dx);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().input.touch_end();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_going = {
            let mut g = game.borrow_mut();
            let g = &mut *g;
            let input = g.input.tick_input();
            let keep_going = g.session.frame(time, &input);
            g.session.draw(&mut g.surface);
            g.loop_active = keep_going;
            keep_going
        };

        // The loop ends itself once the session is over
        if keep_going {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Santa Catch (native) starting...");
    log::info!("Native mode runs a headless autoplay demo - run with `trunk serve` for web version");

    let best = autoplay_demo();
    println!("Autoplay finished, best score: {}", best);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the autopilot play a few sessions at 60 fps
#[cfg(not(target_arch = "wasm32"))]
fn autoplay_demo() -> u64 {
    use santa_catch::platform::MemoryStorage;
    use santa_catch::renderer::RecordingSurface;
    use santa_catch::sim::autopilot;
    use santa_catch::ui::LogUi;
    use santa_catch::{GameSession, Tuning};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u32 = 60 * 120;
    const SESSIONS: u32 = 3;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = GameSession::new(
        480.0,
        720.0,
        Tuning::default(),
        MemoryStorage::new(),
        LogUi,
        seed,
    );
    let mut surface = RecordingSurface::default();

    for _ in 0..SESSIONS {
        session.start();
        let mut frames = 0;
        while frames < MAX_FRAMES {
            let input = autopilot(session.state());
            let running = session.advance(FRAME_MS, &input);
            session.draw(&mut surface);
            frames += 1;
            if !running {
                break;
            }
        }
        if session.is_running() {
            log::info!("Time limit reached after {} frames", frames);
            session.game_over();
        }
    }

    session.high_score()
}

//! Skyline Flyer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use skyline_flyer::platform::web::{CanvasSurface, DomDisplay, FrameCallback, WebClock};
    use skyline_flyer::sim::GameState;
    use skyline_flyer::{Game, Settings};

    type WebGame = Rc<RefCell<Game<WebClock, DomDisplay>>>;

    const JUMP_KEY: &str = " ";

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Skyline Flyer starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Sized once; resizing the window does not rescale the course
        let width = window.inner_width()?.as_f64().unwrap_or(0.0) as u32;
        let height = window.inner_height()?.as_f64().unwrap_or(0.0) as u32;
        let surface = Rc::new(RefCell::new(CanvasSurface::new(&canvas, width, height)?));

        let settings = Settings::default();
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);
        let state = GameState::new(Vec2::new(width as f32, height as f32), &settings, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let clock = WebClock::new(window.clone(), callback.clone());
        let game: WebGame = Rc::new(RefCell::new(Game::new(
            state,
            &settings,
            clock,
            DomDisplay::new(&document),
        )));

        {
            let game = game.clone();
            let surface = surface.clone();
            *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |_time: f64| {
                let mut g = game.borrow_mut();
                if let Some(handle) = g.pending() {
                    g.on_frame(handle, &mut *surface.borrow_mut());
                }
            }));
        }

        setup_buttons(&document, game.clone())?;
        setup_input_handlers(&window, &canvas, game);

        log::info!("Game initialized ({}x{}) with seed: {}", width, height, seed);
        Ok(())
    }

    fn on_click(element: &web_sys::EventTarget, game: WebGame) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().start();
        });
        element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_buttons(document: &Document, game: WebGame) -> Result<(), JsValue> {
        if let Some(btn) = document.get_element_by_id("start-btn") {
            on_click(&btn, game.clone())?;
        }

        // Retry lives inside the game-over screen, so it is only visible after a crash
        if let Some(screen) = document.query_selector(".game-over-screen")? {
            let retry = match document.get_element_by_id("retry-btn") {
                Some(btn) => btn,
                None => {
                    let btn = document.create_element("button")?;
                    btn.set_text_content(Some("Try Again"));
                    btn.set_id("retry-btn");
                    btn.set_class_name("btn");
                    screen.append_child(&btn)?;
                    btn
                }
            };
            on_click(&retry, game)?;
        }
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, canvas: &HtmlCanvasElement, game: WebGame) {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == JUMP_KEY {
                    game.borrow_mut().key_down();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == JUMP_KEY {
                    game.borrow_mut().key_up();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (jump)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().touch_start();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Skyline Flyer (native) starting...");
    log::info!("Native mode runs headless autopilot sessions - use the wasm build to play");

    headless::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use glam::Vec2;

    use skyline_flyer::platform::{LogDisplay, ManualClock};
    use skyline_flyer::renderer::DrawList;
    use skyline_flyer::sim::{GameEvent, GameState};
    use skyline_flyer::{Game, Settings};

    const SETTINGS_ENV: &str = "SKYLINE_SETTINGS";
    const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
    const SESSIONS: u32 = 3;
    const MAX_FRAMES: u32 = 20_000;
    /// How far above a building top the autopilot aims
    const CLEARANCE: f32 = 30.0;

    fn load_settings() -> Settings {
        match std::env::var(SETTINGS_ENV) {
            Ok(json) => match Settings::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", SETTINGS_ENV);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", SETTINGS_ENV, e);
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        }
    }

    /// Jump when sinking below the top of the next building ahead
    fn wants_jump(state: &GameState) -> bool {
        let actor = &state.actor;
        let ahead = state
            .obstacles
            .iter()
            .find(|o| o.right() >= actor.pos.x)
            .map(|o| o.pos.y)
            .unwrap_or(state.floor());
        let target = ahead - actor.size.y - CLEARANCE;
        actor.pos.y > target && actor.vel.y >= 0.0
    }

    pub fn run() {
        let settings = load_settings();
        let seed = settings.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

        let state = match GameState::new(VIEWPORT, &settings, seed) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };
        let mut game = Game::new(state, &settings, ManualClock::new(), LogDisplay::new());
        let mut surface = DrawList::new();
        log::info!("Game initialized with seed: {}", seed);

        for session in 1..=SESSIONS {
            game.start();
            let mut frames = 0;
            while game.state.is_running() && frames < MAX_FRAMES {
                if wants_jump(&game.state) {
                    game.key_down();
                    game.key_up();
                }
                let Some(handle) = game.clock_mut().fire() else {
                    break;
                };
                for event in game.on_frame(handle, &mut surface) {
                    if let GameEvent::Terminated { cause, score } = event {
                        log::info!("Session {}: {} Score: {}", session, cause.message(), score);
                    }
                }
                frames += 1;
            }
            if game.state.is_running() {
                log::info!("Session {}: survived {} frames, score {}", session, frames, game.state.score);
            }
        }
    }
}

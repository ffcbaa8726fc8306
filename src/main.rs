//! Skyflap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, PointerEvent};

    use skyflap::Game;
    use skyflap::audio::BeepCue;
    use skyflap::platform::{Action, LocalStore, RawInput};
    use skyflap::renderer::DomHud;

    type WebGame = Game<LocalStore, BeepCue>;

    struct App {
        game: WebGame,
        hud: DomHud,
    }

    pub fn run() {
        let store = LocalStore::new();
        let settings = skyflap::Settings::load(&store);
        let audio = BeepCue::new(settings.effective_volume());
        let seed = js_sys::Date::now() as u64;

        let app = Rc::new(RefCell::new(App {
            game: Game::new(store, audio, seed),
            hud: DomHud::new(),
        }));

        setup_input_handlers(app.clone());
        if settings.pause_on_blur {
            setup_auto_pause(app.clone());
        }
        request_animation_frame(app);
        log::info!("Skyflap started");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                let raw = RawInput::key(&e.code(), &e.key());
                if let Some(action) = app.borrow_mut().game.handle_input(&raw) {
                    if action == Action::Flap {
                        // Keep space from scrolling the page
                        e.prevent_default();
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        let canvas = window
            .document()
            .and_then(|d| d.get_element_by_id("canvas"));
        if let Some(canvas) = canvas {
            let closure = Closure::<dyn FnMut(PointerEvent)>::new(move |_e: PointerEvent| {
                app.borrow_mut().game.handle_input(&RawInput::PointerDown);
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut app = app.borrow_mut();
            if !app.game.world.paused {
                app.game.push_action(Action::TogglePause);
                log::info!("Auto-paused (window blur)");
            }
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let closure = Closure::once_into_js(move |time: f64| {
            game_loop(app, time);
        });
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(closure.unchecked_ref());
        }
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut guard = app.borrow_mut();
            let App { game, hud } = &mut *guard;
            game.frame(time);
            game.render(hud);
        }
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use skyflap::Game;
    use skyflap::audio::LogCue;
    use skyflap::platform::FileStore;
    use skyflap::renderer::TextRenderer;

    env_logger::init();
    log::info!("Skyflap (native) starting headless autopilot run...");

    // Usage: skyflap [frames] [store path]
    let mut args = std::env::args().skip(1);
    let frames: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(3600);
    let path = args.next().unwrap_or_else(|| "skyflap_store.json".to_string());

    let mut game = Game::new(FileStore::open(&path), LogCue, 0x5eed);
    game.autopilot = true;
    let mut renderer = TextRenderer::new();

    // Simulated 60 Hz host clock
    for frame in 1..=frames {
        game.frame(frame as f64 * 1000.0 / 60.0);
        game.render(&mut renderer);
    }

    match serde_json::to_string_pretty(&game.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

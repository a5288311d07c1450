//! Sky Pig entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use sky_pig::consts::SIM_DT;
    use sky_pig::renderer::RenderState;
    use sky_pig::{FieldSize, Game, Hud, Tuning};

    /// Pushes readouts into the page
    struct DomHud {
        document: Document,
    }

    impl Hud for DomHud {
        fn score_changed(&mut self, score: u32) {
            if let Some(el) = self.document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", score)));
            }
        }

        fn game_over_changed(&mut self, game_over: bool) {
            if let Some(el) = self.document.get_element_by_id("game-over") {
                let class = if game_over { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
        }
    }

    /// Everything the browser callbacks share
    struct WebGame {
        game: Game,
        hud: DomHud,
        render_state: Option<RenderState>,
        last_time: f64,
    }

    impl WebGame {
        /// Run the ticks owed since the last frame, then draw
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            self.last_time = time;

            self.game.frame(dt, &mut self.hud);

            if let Some(ref mut render_state) = self.render_state {
                let vertices = self.game.vertices();
                match render_state.render(&vertices, self.game.state.field) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => render_state.reconfigure(),
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    /// Size the canvas to its container and return the new field
    fn fit_canvas(document: &Document, canvas: &HtmlCanvasElement) -> Option<FieldSize> {
        let container = document.get_element_by_id("game-container")?;
        let field = FieldSize::fit_container(container.client_width() as f32)?;
        canvas.set_width(field.width() as u32);
        canvas.set_height(field.height() as u32);
        Some(field)
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Sky Pig starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #game-canvas element");
            return;
        };

        let field = fit_canvas(&document, &canvas).unwrap_or_default();
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(field, Tuning::default(), seed);

        // Initialize WebGPU; the game still runs (unrendered) without it
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let render_state = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => match instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::LowPower,
                    compatible_surface: Some(&surface),
                    force_fallback_adapter: false,
                })
                .await
            {
                Ok(adapter) => {
                    log::info!("Using adapter: {:?}", adapter.get_info().name);
                    RenderState::new(surface, &adapter, canvas.width(), canvas.height())
                        .await
                        .map_err(|e| log::error!("Failed to create device: {}", e))
                        .ok()
                }
                Err(e) => {
                    log::error!("No adapter: {}", e);
                    None
                }
            },
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                None
            }
        };

        let mut hud = DomHud {
            document: document.clone(),
        };
        game.sync_hud(&mut hud);

        let web_game = Rc::new(RefCell::new(WebGame {
            game,
            hud,
            render_state,
            last_time: 0.0,
        }));

        setup_input_handlers(&window, &canvas, web_game.clone());
        setup_resize_handler(&window, document, canvas, web_game.clone());

        request_animation_frame(web_game);

        log::info!("Sky Pig running!");
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        web_game: Rc<RefCell<WebGame>>,
    ) {
        // Mouse click
        {
            let web_game = web_game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                web_game.borrow_mut().game.activate();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start (no page scroll)
        {
            let web_game = web_game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                web_game.borrow_mut().game.activate();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard: Space only
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    web_game.borrow_mut().game.activate();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(
        window: &web_sys::Window,
        document: Document,
        canvas: HtmlCanvasElement,
        web_game: Rc<RefCell<WebGame>>,
    ) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(field) = fit_canvas(&document, &canvas) else {
                log::warn!("Container too small, keeping previous field");
                return;
            };
            let mut g = web_game.borrow_mut();
            g.game.resize(field.width(), field.height());
            if let Some(ref mut render_state) = g.render_state {
                render_state.resize(canvas.width(), canvas.height());
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(web_game: Rc<RefCell<WebGame>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(web_game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(web_game: Rc<RefCell<WebGame>>, time: f64) {
        web_game.borrow_mut().frame(time);
        request_animation_frame(web_game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use sky_pig::consts::{SIM_DT, TICK_HZ};
    use sky_pig::driver::autopilot_wants_jump;
    use sky_pig::{FieldSize, Game, LogHud, Tuning};

    /// Frames to run when `SKY_PIG_FRAMES` is unset (30 s at 60 Hz)
    const DEFAULT_FRAMES: u64 = 1800;

    /// Tuning from the JSON file named by `SKY_PIG_TUNING`, else defaults
    fn load_tuning() -> Tuning {
        let Ok(path) = std::env::var("SKY_PIG_TUNING") else {
            return Tuning::default();
        };
        let loaded = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()));
        match loaded {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning, {} unusable: {}", path, e);
                Tuning::default()
            }
        }
    }

    fn env_u64(name: &str) -> Option<u64> {
        std::env::var(name).ok()?.parse().ok()
    }

    /// Headless autopilot session paced at the tick rate
    pub fn run() {
        let tuning = load_tuning();
        let seed = env_u64("SKY_PIG_SEED").unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
        let frames = env_u64("SKY_PIG_FRAMES").unwrap_or(DEFAULT_FRAMES);

        let mut game = Game::new(FieldSize::default(), tuning, seed);
        let mut hud = LogHud;
        game.sync_hud(&mut hud);

        let frame_time = Duration::from_secs_f32(1.0 / TICK_HZ);
        let mut last = Instant::now();
        let mut next_frame = last + frame_time;

        for _ in 0..frames {
            if game.state.is_game_over() || autopilot_wants_jump(&game.state) {
                game.activate();
            }

            let now = Instant::now();
            let dt = (now - last).as_secs_f32().max(SIM_DT);
            last = now;
            game.frame(dt, &mut hud);
            log::trace!("Frame with {} vertices", game.vertices().len());

            // Frame limiter
            let now = Instant::now();
            if next_frame > now {
                std::thread::sleep(next_frame - now);
            }
            next_frame += frame_time;
        }

        log::info!(
            "Finished {} frames: score {}, {} ticks",
            frames,
            game.state.score,
            game.state.time_ticks
        );
        match serde_json::to_string(&game.state) {
            Ok(json) => log::debug!("Final state: {}", json),
            Err(e) => log::warn!("Could not serialize final state: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sky Pig (native) starting...");
    log::info!("Native mode runs a headless autopilot session; use `trunk serve` to play");
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

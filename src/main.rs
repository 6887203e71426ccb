//! Coin Climber entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use coin_climber::audio::AudioManager;
    use coin_climber::backdrop::{Painter, Rain};
    use coin_climber::consts::GLYPH_SIZE;
    use coin_climber::renderer::{RenderState, scene};
    use coin_climber::settings::{KeyAction, KeyBindings, Settings};
    use coin_climber::sim::{Command, World, apply_command, generate_level, tick};

    /// Game instance holding all state
    struct Game {
        world: World,
        render_state: RenderState,
        audio: AudioManager,
        keys: KeyBindings,
        document: Document,
        // Last values written to the HUD
        shown_score: Option<u32>,
        shown_level: Option<u32>,
    }

    impl Game {
        /// Draw the current state, then advance it
        fn frame(&mut self) {
            self.render();
            let report = tick(&mut self.world, &mut self.audio);
            for regen in &report.regenerations {
                log::debug!("Frame {}: {:?}", self.world.frame, regen);
            }
            self.update_hud();
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = scene::build(&self.world);
            match self.render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    self.render_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Map a pressed key to a command; returns whether the key is bound
        fn key_down(&mut self, key: &str) -> bool {
            let command = match self.keys.action_for(key) {
                Some(KeyAction::Jump) => Command::Jump,
                Some(KeyAction::Left) => Command::MoveLeft,
                Some(KeyAction::Right) => Command::MoveRight,
                None => return false,
            };
            apply_command(&mut self.world, command, &mut self.audio);
            true
        }

        /// Releasing either move key stops horizontal motion
        fn key_up(&mut self, key: &str) -> bool {
            match self.keys.action_for(key) {
                Some(KeyAction::Left | KeyAction::Right) => {
                    apply_command(&mut self.world, Command::Stop, &mut self.audio);
                    true
                }
                Some(KeyAction::Jump) => true,
                None => false,
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let score = self.world.score;
            if self.shown_score != Some(score) {
                if let Some(el) = self.document.get_element_by_id("score") {
                    el.set_text_content(Some(&format!("Score: {}", score)));
                }
                self.shown_score = Some(score);
            }

            let level = self.world.level;
            if self.shown_level != Some(level) {
                if let Some(el) = self.document.get_element_by_id("level") {
                    el.set_text_content(Some(&format!("Level: {}", level)));
                }
                self.shown_level = Some(level);
            }
        }
    }

    fn js_error(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| js_error(format!("no #{} element", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_error(format!("#{} is not a canvas", id)))
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_error)?;

        log::info!("Coin Climber starting...");

        let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
        let document = window.document().ok_or_else(|| js_error("no document"))?;

        // Sized to the viewport once; resizing is not tracked
        let width = window.inner_width()?.as_f64().unwrap_or(800.0) as u32;
        let height = window.inner_height()?.as_f64().unwrap_or(600.0) as u32;

        let settings = Settings::load();

        if settings.backdrop {
            match canvas_by_id(&document, "matrix") {
                Ok(canvas) => {
                    canvas.set_width(width);
                    canvas.set_height(height);
                    let rain = Rain::new(
                        width as f32,
                        height as f32,
                        GLYPH_SIZE,
                        js_sys::Date::now() as u64 ^ 0x9E37_79B9,
                    );
                    let painter = Painter::new(&canvas, rain)?;
                    request_backdrop_frame(Rc::new(RefCell::new(painter)));
                }
                Err(e) => log::warn!("Backdrop disabled: {:?}", e),
            }
        }

        let canvas = canvas_by_id(&document, "gameCanvas")?;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize world
        let seed = js_sys::Date::now() as u64;
        let mut world = World::new(width as f32, height as f32, settings.tuning.clone(), seed);
        generate_level(&mut world);
        log::info!("World {}x{} initialized with seed: {}", width, height, seed);

        // Initialize WebGPU (WebGL2 fallback)
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_error)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_error)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(js_error)?;

        let game = Rc::new(RefCell::new(Game {
            world,
            render_state,
            audio: AudioManager::new(&settings),
            keys: settings.keys.clone(),
            document,
            shown_score: None,
            shown_level: None,
        }));

        setup_input_handlers(&window, game.clone())?;

        // Start game loop
        request_game_frame(game);

        log::info!("Coin Climber running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Key press: jump / start moving
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().key_down(&event.key()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key release: stop moving
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_game_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            game.borrow_mut().frame();
            request_game_frame(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn request_backdrop_frame(painter: Rc<RefCell<Painter>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            painter.borrow_mut().paint();
            request_backdrop_frame(painter);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    let result = wasm_game::run().await;
    if let Err(e) = &result {
        log::error!("Startup failed: {:?}", e);
    }
    result
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coin Climber (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    headless::run(1280.0, 720.0, 20_000);
}

/// Headless autopilot run of the frame loop, logging what happens
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use coin_climber::Settings;
    use coin_climber::sim::{
        Command, Cue, Regeneration, World, apply_command, generate_level, tick,
    };

    /// Steer toward the nearest coin, jumping whenever it is above
    fn autopilot(world: &World) -> Vec<Command> {
        let player = &world.player;
        let centre = player.pos + player.size / 2.0;
        let Some(target) = world.coins.iter().min_by(|a, b| {
            a.pos
                .distance_squared(centre)
                .total_cmp(&b.pos.distance_squared(centre))
        }) else {
            return vec![Command::Stop];
        };

        let mut commands = Vec::with_capacity(2);
        let dx = target.pos.x - centre.x;
        commands.push(if dx > player.speed {
            Command::MoveRight
        } else if dx < -player.speed {
            Command::MoveLeft
        } else {
            Command::Stop
        });
        if player.on_ground && target.pos.y < player.pos.y {
            commands.push(Command::Jump);
        }
        commands
    }

    pub fn run(width: f32, height: f32, frames: u64) {
        let settings = Settings::load();
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        let mut world = World::new(width, height, settings.tuning.clone(), seed);
        generate_level(&mut world);
        log::info!("World {}x{} initialized with seed: {}", width, height, seed);

        let mut cues: Vec<Cue> = Vec::new();
        let mut falls = 0u32;
        let mut clears = 0u32;

        for _ in 0..frames {
            for command in autopilot(&world) {
                apply_command(&mut world, command, &mut cues);
            }
            let report = tick(&mut world, &mut cues);
            for regen in report.regenerations {
                match regen {
                    Regeneration::FellOut => falls += 1,
                    Regeneration::LevelCleared => clears += 1,
                }
            }
        }

        let count = |cue: Cue| cues.iter().filter(|&&c| c == cue).count();
        log::info!(
            "{} frames: level {}, score {}, {} levels cleared, {} falls",
            world.frame,
            world.level,
            world.score,
            clears,
            falls
        );
        log::info!(
            "Cues: {} jumps, {} coins, {} falls",
            count(Cue::Jump),
            count(Cue::Coin),
            count(Cue::Fall)
        );
        match serde_json::to_string(&world.player) {
            Ok(json) => log::debug!("Final player: {}", json),
            Err(e) => log::warn!("Could not serialize player: {}", e),
        }
    }
}

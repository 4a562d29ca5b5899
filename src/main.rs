//! Mouse Maze entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use mouse_maze::audio::AudioManager;
    use mouse_maze::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
    use mouse_maze::platform::FrameLoop;
    use mouse_maze::renderer::{MeshBuilder, MeshStyle, RenderState, render_frame};
    use mouse_maze::sim::{GameEvent, GameMode, GameState, Notice, NoticeKind, tick};
    use mouse_maze::{Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        mesh: MeshBuilder,
        render_state: Option<RenderState>,
        frames: FrameLoop,
        audio: AudioManager,
        settings: Settings,
    }

    impl Game {
        /// Render the current frame
        fn render(&mut self) {
            render_frame(&self.state, &mut self.mesh);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.mesh.vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = (render_state.config.width, render_state.config.height);
                        render_state.resize(w, h);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Hand queued events to audio; return the notices for the UI
        fn flush_events(&mut self) -> Vec<Notice> {
            let mut notices = Vec::new();
            for event in self.state.drain_events() {
                match event {
                    GameEvent::Notice(notice) => notices.push(notice),
                    other => self.audio.handle(&other),
                }
            }
            notices
        }

        /// Update status text in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("status") {
                let text = match self.state.mode {
                    GameMode::Idle => "Press Start",
                    GameMode::Drawing => "Drawing the maze...",
                    GameMode::Play => "Space to jump!",
                    GameMode::Over => "Game over",
                    GameMode::Win => "You win!",
                };
                el.set_text_content(Some(text));
            }
        }
    }

    fn cancel_frame(handle: Option<i32>) {
        if let (Some(handle), Some(window)) = (handle, web_sys::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }

    /// `start()`: cancel any running loop, begin a new round, re-arm the loop
    fn start(game: &Rc<RefCell<Game>>) {
        let (notices, token) = {
            let mut g = game.borrow_mut();
            let (stale, token) = g.frames.arm();
            cancel_frame(stale);
            g.state.start();
            (g.flush_events(), token)
        };
        show_notices(game, notices);
        request_frame(game.clone(), token);
    }

    /// `reset(show_notice)`: stop the loop and return to idle
    fn reset(game: &Rc<RefCell<Game>>, show_notice: bool) {
        let notices = {
            let mut g = game.borrow_mut();
            let stale = g.frames.cancel();
            cancel_frame(stale);
            g.state.reset(show_notice);
            g.render();
            g.update_hud();
            g.flush_events()
        };
        show_notices(game, notices);
    }

    /// `onJumpKey()`: applied immediately, read by the next tick
    fn on_jump_key(game: &Rc<RefCell<Game>>) {
        let mut g = game.borrow_mut();
        if g.state.on_jump_key() {
            let _ = g.flush_events();
        }
    }

    /// Show notices (blocking dialogs); acknowledging may reset the session
    fn show_notices(game: &Rc<RefCell<Game>>, notices: Vec<Notice>) {
        let show = game.borrow().settings.show_notices;
        for notice in notices {
            let prefix = match notice.kind {
                NoticeKind::Info => "Info",
                NoticeKind::Error => "Oops",
                NoticeKind::Success => "Success",
            };
            log::info!("{}: {}", prefix, notice.message);
            if !show {
                continue;
            }
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&format!("{}: {}", prefix, notice.message));
            }
            if notice.reset_on_ack {
                reset(game, false);
            }
        }
    }

    fn request_frame(game: Rc<RefCell<Game>>, token: u64) {
        let Some(window) = web_sys::window() else { return };
        let loop_game = game.clone();
        let closure = Closure::once(move |_time: f64| {
            game_loop(loop_game, token);
        });
        if let Ok(handle) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            game.borrow_mut().frames.scheduled(token, handle);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, token: u64) {
        let (notices, keep_going) = {
            let mut g = game.borrow_mut();
            if !g.frames.fire(token) {
                return;
            }

            tick(&mut g.state);
            g.render();
            g.update_hud();

            let terminal = g.state.mode.is_terminal();
            if terminal {
                g.frames.stop();
            }
            (g.flush_events(), !terminal)
        };

        if keep_going {
            request_frame(game.clone(), token);
        }
        show_notices(&game, notices);
    }

    fn on_click(id: &str, handler: impl FnMut(MouseEvent) + 'static) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(btn) = document.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(handler);
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #{} element, control disabled", id);
        }
    }

    fn setup_controls(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        {
            let game = game.clone();
            on_click("start-btn", move |_event: MouseEvent| start(&game));
        }
        {
            let game = game.clone();
            on_click("reset-btn", move |_event: MouseEvent| reset(&game, true));
        }

        // Keyboard
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            match event.key().as_str() {
                " " | "ArrowUp" | "w" | "W" => {
                    event.prevent_default();
                    on_jump_key(&game);
                }
                "Enter" => start(&game),
                "Escape" => reset(&game, true),
                _ => {}
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        log::info!("Mouse Maze starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        canvas.set_width(SURFACE_WIDTH);
        canvas.set_height(SURFACE_HEIGHT);

        let settings = match canvas.get_attribute("data-settings") {
            Some(json) => Settings::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring data-settings: {}", e);
                Settings::default()
            }),
            None => Settings::default(),
        };
        let seed = js_sys::Date::now() as u64;
        let surface_size = glam::Vec2::new(SURFACE_WIDTH as f32, SURFACE_HEIGHT as f32);
        let state = GameState::from_tuning(Tuning::default(), surface_size, seed)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, SURFACE_WIDTH, SURFACE_HEIGHT)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            state,
            mesh: MeshBuilder::new(MeshStyle {
                path_glow: settings.path_glow,
                ..MeshStyle::default()
            }),
            render_state: Some(render_state),
            frames: FrameLoop::new(),
            audio: AudioManager::new(&settings),
            settings,
        }));

        setup_controls(game.clone())?;

        {
            let mut g = game.borrow_mut();
            g.render();
            g.update_hud();
        }

        log::info!("Mouse Maze ready (seed {})", seed);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Mouse Maze failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Mouse Maze (native) starting...");
    log::info!("Native mode runs a headless autopilot round - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(s) => s.parse()?,
        None => std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0),
    };
    let tuning = match args.next() {
        Some(path) => mouse_maze::Tuning::from_json(&std::fs::read_to_string(path)?)?,
        None => mouse_maze::Tuning::default(),
    };

    let outcome = headless::run_round(tuning, seed)?;
    println!(
        "seed {}: {:?} after {} ticks ({} traps, {} jumps, {} vertices in final frame)",
        seed, outcome.mode, outcome.ticks, outcome.traps, outcome.jumps, outcome.vertices
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use mouse_maze::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
    use mouse_maze::renderer::{MeshBuilder, render_frame};
    use mouse_maze::sim::{GameEvent, GameMode, GameState, autopilot_wants_jump, tick};
    use mouse_maze::{GameError, Tuning};

    /// Upper bound so a misconfigured tuning cannot spin forever
    const MAX_TICKS: u64 = 200_000;

    pub struct Outcome {
        pub mode: GameMode,
        pub ticks: u64,
        pub traps: usize,
        pub jumps: u32,
        pub vertices: usize,
    }

    /// Play one round with the autopilot, rendering into a mesh every frame
    pub fn run_round(tuning: Tuning, seed: u64) -> Result<Outcome, GameError> {
        let surface = Vec2::new(SURFACE_WIDTH as f32, SURFACE_HEIGHT as f32);
        let mut state = GameState::from_tuning(tuning, surface, seed)?;
        let mut mesh = MeshBuilder::default();
        let mut jumps = 0;

        state.start();
        while !state.mode.is_terminal() && state.time_ticks < MAX_TICKS {
            if autopilot_wants_jump(&state) && state.on_jump_key() {
                jumps += 1;
            }
            tick(&mut state);
            render_frame(&state, &mut mesh);
            for event in state.drain_events() {
                match event {
                    GameEvent::Notice(notice) => log::info!("{:?}: {}", notice.kind, notice.message),
                    other => log::trace!("Event: {:?}", other),
                }
            }
        }

        Ok(Outcome {
            mode: state.mode,
            ticks: state.time_ticks,
            traps: state.traps.len(),
            jumps,
            vertices: mesh.vertices().len(),
        })
    }
}

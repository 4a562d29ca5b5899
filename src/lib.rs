//! Mouse Maze - a path-following reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (path sampling, trap planning, game state)
//! - `renderer`: Render adapter and WebGPU pipeline
//! - `platform`: Frame scheduling shared by the browser glue
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{GameError, PathError, RenderError, SettingsError, TuningError};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Authored design canvas (the maze path is drawn in this space)
    pub const AUTHORED_WIDTH: f32 = 484.0;
    pub const AUTHORED_HEIGHT: f32 = 484.0;

    /// Default drawing surface size in pixels
    pub const SURFACE_WIDTH: u32 = 800;
    pub const SURFACE_HEIGHT: u32 = 800;

    /// Arc-length spacing between path samples (surface units)
    pub const SAMPLE_STEP: f32 = 6.0;

    /// Samples revealed per tick while drawing
    pub const DRAW_SPEED: usize = 3;
    /// Samples advanced per tick by the mouse
    pub const MOUSE_SPEED: f32 = 0.5;

    /// Trap planning
    pub const TRAP_COUNT: usize = 5;
    pub const TRAP_MIN_GAP: usize = 40;
    pub const TRAP_MARGIN: usize = 30;
    pub const TRAP_MAX_ATTEMPTS: u32 = 10_000;

    /// Jump length in ticks
    pub const JUMP_DURATION: u32 = 36;
    /// Upward render-only offset while jumping
    pub const JUMP_HEIGHT: f32 = 24.0;

    /// Mouse is caught when this close to a placed trap
    pub const COLLISION_RADIUS: f32 = 12.0;

    /// Visual sizes
    pub const PATH_WIDTH: f32 = 10.0;
    pub const TRAP_RADIUS: f32 = 9.0;
    pub const MOUSE_RADIUS: f32 = 10.0;

    /// The maze route in SVG `points` syntax (authored space)
    pub const AUTHORED_PATH: &str = "234,2 234,10 250,10 250,58 266,58 266,90 282,90 282,74 298,74 298,106 282,106 282,122 298,122 298,154 330,154 330,138 314,138 314,122 330,122 330,90 346,90 346,106 362,106 362,90 378,90 378,106 394,106 394,90 442,90 442,138 394,138 394,122 378,122 378,138 346,138 346,170 330,170 330,202 314,202 314,218 330,218 330,234 314,234 314,266 298,266 298,282 330,282 330,314 362,314 362,330 378,330 378,314 394,314 394,330 458,330 458,346 474,346 474,426 458,426 458,442 474,442 474,458 442,458 442,474 378,474 378,458 362,458 362,474 346,474 346,442 362,442 362,426 330,426 330,442 314,442 314,410 298,410 298,458 330,458 330,474 250,474 250,482";
}

//! Centralized error types.
//!
//! Only session setup can fail. Once a session exists, degenerate situations
//! are handled by policy (skipped segments, fewer traps, clamped indices).

/// Umbrella error for setting up a game session.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Path error: {0}")]
    Path(#[from] PathError),

    #[error("Tuning error: {0}")]
    Tuning(#[from] TuningError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Errors from parsing or sampling an authored path.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("Malformed point pair: {0:?}")]
    MalformedPair(String),

    #[error("Non-finite coordinate in pair {0:?}")]
    NonFinite(String),

    #[error("Path has no points")]
    Empty,

    #[error("Sample step must be positive, got {0}")]
    InvalidStep(f32),
}

/// Errors from loading or validating tuning values.
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    #[error("Invalid value for `{field}`: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Failed to parse tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from loading player settings.
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("Volume `{field}` must be within 0..=1, got {value}")]
    VolumeOutOfRange { field: &'static str, value: f32 },

    #[error("Failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the WebGPU render path.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("Surface has no supported texture format")]
    NoSurfaceFormat,

    #[error("Failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

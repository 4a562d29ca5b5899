//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod path;
pub mod state;
pub mod tick;
pub mod traps;

pub use path::{Waypoint, heading_at, parse_svg_points, sample_index, sample_polyline, scale_polyline};
pub use state::{
    GameEvent, GameMode, GameState, INITIAL_DRAW_PROGRESS, JumpState, Notice, NoticeKind,
};
pub use tick::{autopilot_wants_jump, is_caught, tick};
pub use traps::{Trap, TrapPlan, plan_traps};

//! Data-driven game balance
//!
//! Defaults come from [`crate::consts`]; a JSON document can override any
//! subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;
use crate::sim::TrapPlan;

/// Every tunable value of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Maze route in SVG `points` syntax, authored space
    pub authored_path: String,
    /// Size of the authored design canvas
    pub authored_width: f32,
    pub authored_height: f32,

    /// Sample spacing along the path (surface units)
    pub sample_step: f32,
    /// Samples revealed per tick
    pub draw_speed: usize,
    /// Samples the mouse advances per tick
    pub mouse_speed: f32,

    pub trap_count: usize,
    pub trap_min_gap: usize,
    pub trap_margin: usize,
    pub trap_max_attempts: u32,

    /// Jump length in ticks
    pub jump_duration: u32,
    /// Render-only lift while jumping
    pub jump_height: f32,
    pub collision_radius: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            authored_path: AUTHORED_PATH.to_string(),
            authored_width: AUTHORED_WIDTH,
            authored_height: AUTHORED_HEIGHT,
            sample_step: SAMPLE_STEP,
            draw_speed: DRAW_SPEED,
            mouse_speed: MOUSE_SPEED,
            trap_count: TRAP_COUNT,
            trap_min_gap: TRAP_MIN_GAP,
            trap_margin: TRAP_MARGIN,
            trap_max_attempts: TRAP_MAX_ATTEMPTS,
            jump_duration: JUMP_DURATION,
            jump_height: JUMP_HEIGHT,
            collision_radius: COLLISION_RADIUS,
        }
    }
}

impl Tuning {
    /// Parse a JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("authored_width", self.authored_width)?;
        positive("authored_height", self.authored_height)?;
        positive("sample_step", self.sample_step)?;
        positive("mouse_speed", self.mouse_speed)?;
        positive("jump_height", self.jump_height)?;
        positive("collision_radius", self.collision_radius)?;
        nonzero("draw_speed", self.draw_speed as u64)?;
        nonzero("jump_duration", self.jump_duration as u64)?;
        nonzero("trap_max_attempts", self.trap_max_attempts as u64)?;
        Ok(())
    }

    /// Trap planner parameters (same margin at both ends)
    pub fn trap_plan(&self) -> TrapPlan {
        TrapPlan {
            count: self.trap_count,
            min_gap: self.trap_min_gap,
            margin_start: self.trap_margin,
            margin_end: self.trap_margin,
            max_attempts: self.trap_max_attempts,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::InvalidValue {
            field,
            value: value.to_string(),
        })
    }
}

fn nonzero(field: &'static str, value: u64) -> Result<(), TuningError> {
    if value > 0 {
        Ok(())
    } else {
        Err(TuningError::InvalidValue {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.trap_plan().count, TRAP_COUNT);
        assert_eq!(tuning.trap_plan().margin_end, TRAP_MARGIN);
    }

    #[test]
    fn test_partial_json_override() {
        let tuning = Tuning::from_json(r#"{ "trap_count": 2, "mouse_speed": 1.25 }"#).unwrap();
        assert_eq!(tuning.trap_count, 2);
        assert_eq!(tuning.mouse_speed, 1.25);
        assert_eq!(tuning.sample_step, SAMPLE_STEP);
        assert_eq!(tuning.authored_path, AUTHORED_PATH);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json(r#"{ "sample_step": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::InvalidValue { field: "sample_step", .. }));

        let err = Tuning::from_json(r#"{ "draw_speed": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::InvalidValue { field: "draw_speed", .. }));

        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Json(_)));
    }
}

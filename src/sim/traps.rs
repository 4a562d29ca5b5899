//! Trap placement planning
//!
//! Trap targets are chosen before the path is revealed and become live traps
//! as the reveal passes them.

use glam::Vec2;
use rand::Rng;

/// A trap on the path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trap {
    /// Position in the sample sequence
    pub index: usize,
    /// Sample position at `index`
    pub pos: Vec2,
}

/// Parameters for choosing trap targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapPlan {
    /// Number of targets wanted
    pub count: usize,
    /// Minimum index distance between any two targets
    pub min_gap: usize,
    /// Samples kept free at the start of the path
    pub margin_start: usize,
    /// Samples kept free at the end of the path
    pub margin_end: usize,
    /// Candidate draws before giving up
    pub max_attempts: u32,
}

/// Choose up to `plan.count` trap indices for a path of `len` samples.
///
/// Rejection sampling inside `[margin_start, len - margin_end)`. When the
/// attempt budget runs out the plan is returned short; when the margins leave
/// no room at all it is empty. The result is sorted ascending.
pub fn plan_traps<R: Rng + ?Sized>(len: usize, plan: &TrapPlan, rng: &mut R) -> Vec<usize> {
    let lo = plan.margin_start;
    let hi = len.saturating_sub(plan.margin_end);
    if plan.count == 0 {
        return Vec::new();
    }
    if lo >= hi {
        log::warn!(
            "No room for traps: {} samples, margins {}/{}",
            len,
            plan.margin_start,
            plan.margin_end
        );
        return Vec::new();
    }

    let mut chosen: Vec<usize> = Vec::with_capacity(plan.count);
    let mut attempts = 0;
    while chosen.len() < plan.count && attempts < plan.max_attempts {
        attempts += 1;
        let candidate = rng.random_range(lo..hi);
        let clear = chosen
            .iter()
            .all(|&c| c != candidate && c.abs_diff(candidate) >= plan.min_gap);
        if clear {
            chosen.push(candidate);
        }
    }

    if chosen.len() < plan.count {
        log::warn!(
            "Planned only {} of {} traps after {} attempts",
            chosen.len(),
            plan.count,
            attempts
        );
    }

    chosen.sort_unstable();
    chosen
}

//! Game state and session commands
//!
//! One `GameState` exists per session. The tick handler and the three control
//! commands (`start`, `reset`, `on_jump_key`) are the only things that mutate it.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::path::{heading_at, parse_svg_points, sample_index, sample_polyline, scale_polyline};
use super::traps::{Trap, plan_traps};
use crate::error::{GameError, PathError};
use crate::tuning::Tuning;

/// Draw progress right after start/reset: only the first sample is revealed
pub const INITIAL_DRAW_PROGRESS: usize = 1;

/// Current mode of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Waiting for a start command
    #[default]
    Idle,
    /// Path is being revealed
    Drawing,
    /// Mouse is running
    Play,
    /// Mouse ran into a trap
    Over,
    /// Mouse reached the end of the path
    Win,
}

impl GameMode {
    /// Over and Win stop the tick loop
    pub fn is_terminal(self) -> bool {
        matches!(self, GameMode::Over | GameMode::Win)
    }
}

/// Jump in progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JumpState {
    pub active: bool,
    pub ticks_left: u32,
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
    Success,
}

/// A message for the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Acknowledging the notice should reset the session
    pub reset_on_ack: bool,
}

/// Fire-and-forget requests to the audio/notification collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    MusicStart,
    MusicStop,
    Jump,
    GameOver,
    Win,
    Notice(Notice),
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Balance values for this session
    pub tuning: Tuning,
    /// Current mode
    pub mode: GameMode,
    /// Number of revealed samples
    pub draw_progress: usize,
    /// Real-valued position along the samples
    pub mouse_progress: f32,
    pub jump: JumpState,
    /// Trap targets not yet revealed (ascending)
    pub planned: VecDeque<usize>,
    /// Revealed traps, visible and collidable
    pub traps: Vec<Trap>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Resampled path, fixed for the session
    samples: Vec<Vec2>,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle session over an already sampled path
    pub fn new(samples: Vec<Vec2>, tuning: Tuning, seed: u64) -> Result<Self, GameError> {
        tuning.validate()?;
        if samples.is_empty() {
            return Err(PathError::Empty.into());
        }
        log::info!("Session created: {} samples, seed {}", samples.len(), seed);

        Ok(Self {
            seed,
            tuning,
            mode: GameMode::Idle,
            draw_progress: INITIAL_DRAW_PROGRESS,
            mouse_progress: 0.0,
            jump: JumpState::default(),
            planned: VecDeque::new(),
            traps: Vec::new(),
            time_ticks: 0,
            samples,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        })
    }

    /// Parse, scale and sample the authored path for a surface of `surface_size`
    pub fn from_tuning(tuning: Tuning, surface_size: Vec2, seed: u64) -> Result<Self, GameError> {
        tuning.validate()?;
        let authored = parse_svg_points(&tuning.authored_path)?;
        let scale = surface_size / Vec2::new(tuning.authored_width, tuning.authored_height);
        let polyline = scale_polyline(&authored, scale);
        let samples = sample_polyline(&polyline, tuning.sample_step)?;
        Self::new(samples, tuning, seed)
    }

    /// The sampled path
    pub fn samples(&self) -> &[Vec2] {
        &self.samples
    }

    /// Index of the last sample
    pub fn last_index(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    /// Sample index the mouse currently stands on
    pub fn mouse_index(&self) -> usize {
        sample_index(self.mouse_progress, self.samples.len())
    }

    /// Where the mouse is drawn: the path start while drawing, else its progress
    pub fn mouse_pos(&self) -> Vec2 {
        let index = match self.mode {
            GameMode::Idle | GameMode::Drawing => 0,
            _ => self.mouse_index(),
        };
        self.samples[index.min(self.last_index())]
    }

    /// Facing angle of the mouse
    pub fn mouse_heading(&self) -> f32 {
        let index = match self.mode {
            GameMode::Idle | GameMode::Drawing => 0,
            _ => self.mouse_index(),
        };
        heading_at(&self.samples, index)
    }

    /// Render-only vertical offset (negative is up on screen)
    pub fn jump_offset(&self) -> f32 {
        if self.jump.active {
            -self.tuning.jump_height
        } else {
            0.0
        }
    }

    /// Begin a new round: clear progress, re-plan traps and start drawing
    pub fn start(&mut self) {
        self.clear_round();
        let targets = plan_traps(self.samples.len(), &self.tuning.trap_plan(), &mut self.rng);
        log::info!("Round started with {} planned traps: {:?}", targets.len(), targets);
        self.planned = targets.into();
        self.mode = GameMode::Drawing;
        self.events.push(GameEvent::MusicStart);
    }

    /// Return to idle from any mode
    pub fn reset(&mut self, show_notice: bool) {
        self.clear_round();
        self.mode = GameMode::Idle;
        self.events.push(GameEvent::MusicStop);
        if show_notice {
            self.events.push(GameEvent::Notice(Notice {
                kind: NoticeKind::Info,
                message: "The game has been reset.".to_string(),
                reset_on_ack: false,
            }));
        }
        log::info!("Session reset");
    }

    /// Start a jump. Only in play mode and only when no jump is running.
    pub fn on_jump_key(&mut self) -> bool {
        if self.mode != GameMode::Play || self.jump.active {
            return false;
        }
        self.jump = JumpState {
            active: true,
            ticks_left: self.tuning.jump_duration,
        };
        self.events.push(GameEvent::Jump);
        true
    }

    /// Take all pending collaborator events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn clear_round(&mut self) {
        self.draw_progress = INITIAL_DRAW_PROGRESS.min(self.samples.len());
        self.mouse_progress = 0.0;
        self.jump = JumpState::default();
        self.planned.clear();
        self.traps.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};

    fn line(len: usize) -> Vec<Vec2> {
        (0..len).map(|i| Vec2::new(i as f32 * 6.0, 0.0)).collect()
    }

    #[test]
    fn test_from_tuning_default_path() {
        let surface = Vec2::new(SURFACE_WIDTH as f32, SURFACE_HEIGHT as f32);
        let state = GameState::from_tuning(Tuning::default(), surface, 1).unwrap();
        let scale = 800.0 / 484.0;
        assert_eq!(state.mode, GameMode::Idle);
        assert!((state.samples()[0] - Vec2::new(234.0, 2.0) * scale).length() < 1e-3);
        assert!((state.samples()[state.last_index()] - Vec2::new(250.0, 482.0) * scale).length() < 1e-3);
    }

    #[test]
    fn test_new_rejects_empty_samples() {
        let err = GameState::new(Vec::new(), Tuning::default(), 1).unwrap_err();
        assert!(matches!(err, GameError::Path(PathError::Empty)));
    }

    #[test]
    fn test_start_plans_traps_and_draws() {
        let mut state = GameState::new(line(500), Tuning::default(), 5).unwrap();
        state.start();
        assert_eq!(state.mode, GameMode::Drawing);
        assert_eq!(state.draw_progress, INITIAL_DRAW_PROGRESS);
        assert_eq!(state.planned.len(), 5);
        assert!(state.traps.is_empty());
        assert_eq!(state.drain_events(), vec![GameEvent::MusicStart]);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_restart_replans_from_advancing_rng() {
        let mut a = GameState::new(line(800), Tuning::default(), 11).unwrap();
        let mut b = GameState::new(line(800), Tuning::default(), 11).unwrap();
        a.start();
        b.start();
        assert_eq!(a.planned, b.planned);
        let first = a.planned.clone();
        a.start();
        b.start();
        assert_eq!(a.planned, b.planned);
        assert_ne!(a.planned, first);
    }

    #[test]
    fn test_jump_only_in_play_and_not_reentrant() {
        let mut state = GameState::new(line(500), Tuning::default(), 5).unwrap();
        assert!(!state.on_jump_key());
        state.start();
        assert!(!state.on_jump_key());

        state.mode = GameMode::Play;
        let _ = state.drain_events();
        assert!(state.on_jump_key());
        assert!(state.jump.active);
        assert_eq!(state.jump.ticks_left, state.tuning.jump_duration);
        assert!(!state.on_jump_key());
        assert_eq!(state.drain_events(), vec![GameEvent::Jump]);
        assert_eq!(state.jump_offset(), -state.tuning.jump_height);
    }

    #[test]
    fn test_reset_from_any_mode() {
        let mut state = GameState::new(line(500), Tuning::default(), 5).unwrap();
        state.start();
        state.draw_progress = 250;
        let pos = state.samples()[100];
        state.traps.push(Trap { index: 100, pos });
        let _ = state.drain_events();

        state.reset(true);
        assert_eq!(state.mode, GameMode::Idle);
        assert!(state.traps.is_empty());
        assert!(state.planned.is_empty());
        assert_eq!(state.draw_progress, INITIAL_DRAW_PROGRESS);
        assert_eq!(state.mouse_progress, 0.0);
        assert!(!state.jump.active);

        let events = state.drain_events();
        assert_eq!(events[0], GameEvent::MusicStop);
        assert!(matches!(
            &events[1],
            GameEvent::Notice(Notice { kind: NoticeKind::Info, reset_on_ack: false, .. })
        ));

        state.mode = GameMode::Win;
        state.reset(false);
        assert_eq!(state.mode, GameMode::Idle);
        assert_eq!(state.drain_events(), vec![GameEvent::MusicStop]);
    }

    #[test]
    fn test_mouse_pose_follows_mode() {
        let mut state = GameState::new(line(50), Tuning::default(), 5).unwrap();
        state.mouse_progress = 10.7;
        assert_eq!(state.mouse_pos(), state.samples()[0]);

        state.mode = GameMode::Play;
        assert_eq!(state.mouse_index(), 10);
        assert_eq!(state.mouse_pos(), state.samples()[10]);
        assert_eq!(state.mouse_heading(), 0.0);

        state.mouse_progress = 1_000.0;
        assert_eq!(state.mouse_pos(), state.samples()[49]);
    }
}

//! Rendering module
//!
//! The simulation only ever talks to a [`RenderAdapter`]. [`MeshBuilder`]
//! tessellates the calls into triangles and [`RenderState`] pushes them
//! through WebGPU.

pub mod mesh;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use mesh::{MeshBuilder, MeshStyle};
pub use pipeline::RenderState;
pub use vertex::Vertex;

use glam::Vec2;

use crate::sim::{GameMode, GameState};

/// Drawing operations the game needs from a surface
pub trait RenderAdapter {
    /// Wipe the surface
    fn clear(&mut self);
    /// Stroke the path through `samples[..up_to]`
    fn draw_polyline_prefix(&mut self, samples: &[Vec2], up_to: usize);
    /// Draw one placed trap
    fn draw_trap(&mut self, pos: Vec2);
    /// Draw the mouse at `pos` facing `angle`, lifted by `vertical_offset`
    fn draw_mouse(&mut self, pos: Vec2, angle: f32, vertical_offset: f32);
}

/// Paint the current frame. Reads the state, never changes it.
pub fn render_frame<A: RenderAdapter + ?Sized>(state: &GameState, adapter: &mut A) {
    adapter.clear();
    if state.mode == GameMode::Idle {
        return;
    }

    adapter.draw_polyline_prefix(state.samples(), state.draw_progress);
    for trap in &state.traps {
        adapter.draw_trap(trap.pos);
    }
    adapter.draw_mouse(state.mouse_pos(), state.mouse_heading(), state.jump_offset());
}

/// Active drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Independent X/Y factors from an authored design space to this surface
    pub fn scale_from(&self, authored: Vec2) -> Vec2 {
        self.size() / authored
    }

    /// Surface pixels (origin top-left, y down) to normalized device coordinates
    pub fn to_ndc(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x / self.width * 2.0 - 1.0, 1.0 - p.y / self.height * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Trap, tick};
    use crate::tuning::Tuning;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear,
        Path(usize),
        Trap(Vec2),
        Mouse(Vec2, f32, f32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl RenderAdapter for Recorder {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }
        fn draw_polyline_prefix(&mut self, _samples: &[Vec2], up_to: usize) {
            self.calls.push(Call::Path(up_to));
        }
        fn draw_trap(&mut self, pos: Vec2) {
            self.calls.push(Call::Trap(pos));
        }
        fn draw_mouse(&mut self, pos: Vec2, angle: f32, vertical_offset: f32) {
            self.calls.push(Call::Mouse(pos, angle, vertical_offset));
        }
    }

    fn line(len: usize) -> Vec<Vec2> {
        (0..len).map(|i| Vec2::new(i as f32 * 6.0, 0.0)).collect()
    }

    #[test]
    fn test_idle_frame_is_blank() {
        let state = GameState::new(line(50), Tuning::default(), 1).unwrap();
        let mut rec = Recorder::default();
        render_frame(&state, &mut rec);
        assert_eq!(rec.calls, vec![Call::Clear]);
    }

    #[test]
    fn test_drawing_frame_keeps_mouse_at_start() {
        let mut state = GameState::new(line(50), Tuning::default(), 1).unwrap();
        state.start();
        tick(&mut state);
        let mut rec = Recorder::default();
        render_frame(&state, &mut rec);
        assert_eq!(
            rec.calls,
            vec![Call::Clear, Call::Path(4), Call::Mouse(Vec2::ZERO, 0.0, 0.0)]
        );
    }

    #[test]
    fn test_play_frame_draws_traps_and_lifted_mouse() {
        let mut state = GameState::new(line(50), Tuning::default(), 1).unwrap();
        state.mode = GameMode::Play;
        state.draw_progress = 50;
        state.traps.push(Trap { index: 30, pos: Vec2::new(180.0, 0.0) });
        state.mouse_progress = 10.5;
        assert!(state.on_jump_key());

        let mut rec = Recorder::default();
        render_frame(&state, &mut rec);
        let lift = -state.tuning.jump_height;
        assert_eq!(
            rec.calls,
            vec![
                Call::Clear,
                Call::Path(50),
                Call::Trap(Vec2::new(180.0, 0.0)),
                Call::Mouse(Vec2::new(60.0, 0.0), 0.0, lift),
            ]
        );
    }

    #[test]
    fn test_viewport_mapping() {
        let vp = Viewport::new(800, 400);
        assert_eq!(vp.to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(Vec2::new(800.0, 400.0)), Vec2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(Vec2::new(400.0, 200.0)), Vec2::ZERO);
        assert_eq!(vp.scale_from(Vec2::new(400.0, 400.0)), Vec2::new(2.0, 1.0));
    }
}

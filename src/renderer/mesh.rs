//! Triangle-mesh render adapter
//!
//! Collects one frame of geometry in surface coordinates. The GPU side only
//! uploads what ends up in `vertices`.

use glam::Vec2;

use super::RenderAdapter;
use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{MOUSE_RADIUS, PATH_WIDTH, TRAP_RADIUS};

/// Sizes used when tessellating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStyle {
    pub path_width: f32,
    pub trap_radius: f32,
    pub mouse_radius: f32,
    /// Soft halo drawn under the path
    pub path_glow: bool,
}

impl Default for MeshStyle {
    fn default() -> Self {
        Self {
            path_width: PATH_WIDTH,
            trap_radius: TRAP_RADIUS,
            mouse_radius: MOUSE_RADIUS,
            path_glow: true,
        }
    }
}

/// Render adapter that builds a triangle list
#[derive(Debug, Default)]
pub struct MeshBuilder {
    pub style: MeshStyle,
    vertices: Vec<Vertex>,
}

impl MeshBuilder {
    pub fn new(style: MeshStyle) -> Self {
        Self {
            style,
            vertices: Vec::new(),
        }
    }

    /// Geometry of the current frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl RenderAdapter for MeshBuilder {
    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn draw_polyline_prefix(&mut self, samples: &[Vec2], up_to: usize) {
        let visible = &samples[..up_to.min(samples.len())];
        if self.style.path_glow {
            self.vertices
                .extend(shapes::thick_polyline(visible, self.style.path_width * 1.8, colors::PATH_GLOW));
        }
        self.vertices
            .extend(shapes::thick_polyline(visible, self.style.path_width, colors::PATH));
    }

    fn draw_trap(&mut self, pos: Vec2) {
        let r = self.style.trap_radius;
        self.vertices.extend(shapes::circle(pos, r, colors::TRAP, 16));
        self.vertices
            .extend(shapes::ring(pos, r * 0.55, r * 0.75, colors::TRAP_RIM, 16));
    }

    fn draw_mouse(&mut self, pos: Vec2, angle: f32, vertical_offset: f32) {
        let r = self.style.mouse_radius;
        if vertical_offset != 0.0 {
            // Shadow stays on the path while the sprite is in the air
            self.vertices
                .extend(shapes::ellipse(pos, Vec2::new(r, r * 0.5), 0.0, colors::SHADOW, 12));
        }
        let lifted = pos + Vec2::new(0.0, vertical_offset);
        self.vertices.extend(shapes::mouse_sprite(lifted, angle, r));
    }
}

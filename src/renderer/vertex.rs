//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const PATH: [f32; 4] = [0.97, 0.97, 0.58, 1.0]; // #F7F794
    pub const PATH_GLOW: [f32; 4] = [1.0, 1.0, 0.4, 0.25];
    pub const TRAP: [f32; 4] = [0.85, 0.2, 0.2, 1.0];
    pub const TRAP_RIM: [f32; 4] = [0.35, 0.05, 0.05, 1.0];
    pub const MOUSE_BODY: [f32; 4] = [0.62, 0.62, 0.68, 1.0];
    pub const MOUSE_EAR: [f32; 4] = [0.95, 0.6, 0.7, 1.0];
    pub const MOUSE_EYE: [f32; 4] = [0.05, 0.05, 0.05, 1.0];
    pub const SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.35];
    pub const BACKGROUND: [f32; 4] = [0.04, 0.05, 0.12, 1.0];
}

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
    pub const BACKGROUND: [f32; 4] = [0.04, 0.05, 0.10, 1.0];
    pub const COURT_STRIPE: [f32; 4] = [1.0, 1.0, 1.0, 0.05];
    pub const COURT_BORDER: [f32; 4] = [1.0, 1.0, 1.0, 0.15];
    pub const PADDLE_LEFT: [f32; 4] = [1.0, 0.85, 0.2, 1.0]; // Pikachu yellow
    pub const PADDLE_RIGHT: [f32; 4] = [0.95, 0.45, 0.15, 1.0]; // Charizard orange
    pub const PADDLE_GLOW: [f32; 4] = [0.94, 0.29, 0.36, 1.0]; // #f04a5d
    pub const BALL: [f32; 4] = [0.97, 0.97, 0.97, 1.0];
    pub const BALL_BAND: [f32; 4] = [0.85, 0.15, 0.2, 1.0];
    pub const BALL_GLOW: [f32; 4] = [0.99, 0.86, 0.36, 1.0]; // #fddc5c
}

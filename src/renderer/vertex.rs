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

    /// Byte stride of one vertex in a vertex buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// Raw bytes ready for upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    pub const VINE: [f32; 4] = [0.25, 0.75, 0.3, 1.0];
    /// Darker copy drawn one pixel below the vine
    pub const VINE_SHADOW: [f32; 4] = [0.15, 0.45, 0.18, 1.0];
    pub const VINE_HIT: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
    /// Bubble ("sky") regions
    pub const BUBBLE: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    pub const GROUND: [f32; 4] = [0.55, 0.3, 0.15, 1.0];
    pub const SPEED_BAR: [f32; 4] = [1.0, 0.85, 0.2, 1.0];
}

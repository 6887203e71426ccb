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

/// Colors for game elements (linear RGB)
pub mod colors {
    /// CSS `green` (#008000), linearized
    pub const GREEN: [f32; 4] = [0.0, 0.2158605, 0.0, 1.0];

    pub const PLAYER: [f32; 4] = GREEN;
    pub const PLATFORM: [f32; 4] = GREEN;
    pub const COIN: [f32; 4] = GREEN;

    /// Convert a linear channel to sRGB encoding
    pub fn linear_to_srgb(c: f32) -> f32 {
        if c <= 0.0031308 {
            c * 12.92
        } else {
            1.055 * c.powf(1.0 / 2.4) - 0.055
        }
    }

    /// sRGB-encode a linear color, alpha untouched
    pub fn encode_srgb(color: [f32; 4]) -> [f32; 4] {
        [
            linear_to_srgb(color[0]),
            linear_to_srgb(color[1]),
            linear_to_srgb(color[2]),
            color[3],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::colors::*;

    #[test]
    fn test_green_encodes_back_to_css() {
        let encoded = encode_srgb(GREEN);
        assert_eq!(encoded[0], 0.0);
        assert!((encoded[1] * 255.0 - 128.0).abs() < 0.5);
        assert_eq!(encoded[3], 1.0);
    }
}

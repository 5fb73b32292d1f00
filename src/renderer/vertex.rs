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
}

/// Convert 0xRRGGBB to linear-ish RGBA floats
pub const fn rgb(hex: u32, alpha: f32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha,
    ]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const ROAD: [f32; 4] = rgb(0x2c3e50, 1.0);
    pub const LANE_STRIPE: [f32; 4] = rgb(0x95a5a6, 1.0);
    pub const ROAD_EDGE: [f32; 4] = rgb(0xf39c12, 1.0);
    pub const PLAYER: [f32; 4] = rgb(0xff6b6b, 1.0);
    pub const COCKPIT: [f32; 4] = rgb(0x000000, 1.0);
    pub const WINDOW: [f32; 4] = rgb(0x4dd0e1, 1.0);
    pub const WHEEL: [f32; 4] = rgb(0x000000, 1.0);
    pub const TAILLIGHT: [f32; 4] = rgb(0xff4444, 1.0);
    pub const HEADLIGHT: [f32; 4] = rgb(0xffeb3b, 1.0);
    pub const COIN: [f32; 4] = rgb(0xffd700, 1.0);
    pub const COIN_SHINE: [f32; 4] = rgb(0xffeb3b, 1.0);
    pub const COIN_RIM: [f32; 4] = rgb(0xffa000, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_channels() {
        assert_eq!(rgb(0xff0000, 1.0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(rgb(0x00ff00, 0.5), [0.0, 1.0, 0.0, 0.5]);
        assert_eq!(rgb(0x0000ff, 0.0), [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 24);
        let vertices = [Vertex::new(1.0, 2.0, colors::ROAD); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 72);
    }
}

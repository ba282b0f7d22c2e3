use bytemuck::{Pod, Zeroable};

use crate::coords::{Color, Rect};

/// One batch vertex: position in logical pixels + straight-alpha RGBA.
///
/// 24 bytes, matching the vertex buffer layout in `shaders/batch.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4  // color
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Four vertices forming a rectangle.
///
/// Corner order is fixed: top-left, top-right, bottom-right, bottom-left.
/// Index construction relies on this winding.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Quad(pub [Vertex; 4]);

impl Quad {
    /// Builds a quad with the same color at every corner.
    pub fn new(rect: Rect, color: Color) -> Self {
        Self::with_corner_colors(rect, [color; 4])
    }

    /// Builds a quad with one color per corner (TL, TR, BR, BL).
    pub fn with_corner_colors(rect: Rect, colors: [Color; 4]) -> Self {
        let Rect { x, y, w, h } = rect;
        Self([
            Vertex { position: [x, y],         color: colors[0].to_array() },
            Vertex { position: [x + w, y],     color: colors[1].to_array() },
            Vertex { position: [x + w, y + h], color: colors[2].to_array() },
            Vertex { position: [x, y + h],     color: colors[3].to_array() },
        ])
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex; 4] {
        &self.0
    }
}

/// Six triangle indices covering one quad: two triangles sharing the
/// top-left → bottom-right diagonal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadIndices(pub [u32; 6]);

impl QuadIndices {
    /// Indices for the Nth quad in a batch (0-based):
    /// `{4N, 4N+1, 4N+2, 4N, 4N+2, 4N+3}`.
    #[inline]
    pub const fn for_quad(n: u32) -> Self {
        let base = n * 4;
        Self([base, base + 1, base + 2, base, base + 2, base + 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_in_winding_order() {
        let q = Quad::new(Rect::new(3.0, 5.0, 10.0, 20.0), Color::WHITE);
        let pos: Vec<[f32; 2]> = q.vertices().iter().map(|v| v.position).collect();
        assert_eq!(pos, vec![[3.0, 5.0], [13.0, 5.0], [13.0, 25.0], [3.0, 25.0]]);
    }

    #[test]
    fn uniform_color_reaches_every_corner() {
        let c = Color::from_u8(100, 100, 100);
        let q = Quad::new(Rect::new(0.0, 0.0, 1.0, 1.0), c);
        for v in q.vertices() {
            assert_eq!(v.color, c.to_array());
        }
    }

    #[test]
    fn corner_colors_keep_their_corner() {
        let colors = [
            Color::from_u8(255, 0, 0),
            Color::from_u8(0, 255, 0),
            Color::from_u8(0, 0, 255),
            Color::from_u8(255, 255, 255),
        ];
        let q = Quad::with_corner_colors(Rect::new(0.0, 0.0, 1.0, 1.0), colors);
        for (v, c) in q.vertices().iter().zip(colors) {
            assert_eq!(v.color, c.to_array());
        }
    }

    #[test]
    fn index_formula() {
        assert_eq!(QuadIndices::for_quad(0).0, [0, 1, 2, 0, 2, 3]);
        assert_eq!(QuadIndices::for_quad(1).0, [4, 5, 6, 4, 6, 7]);
        assert_eq!(QuadIndices::for_quad(41).0, [164, 165, 166, 164, 166, 167]);
    }

    #[test]
    fn vertex_is_24_bytes() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(std::mem::size_of::<Quad>(), 96);
        assert_eq!(std::mem::size_of::<QuadIndices>(), 24);
    }
}

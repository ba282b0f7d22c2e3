//! Batched quad geometry.
//!
//! CPU-side model for a flat, insertion-ordered batch of colored quads: one
//! vertex sequence plus a parallel index sequence, suitable for a single
//! upload into GPU vertex/index buffers and one indexed draw call.

mod grid;
mod quad;

pub use grid::{grid, solid_grid};
pub use quad::{Quad, QuadIndices, Vertex};

use crate::coords::{Color, Rect};

/// A flat batch of quads and their triangle indices.
///
/// Quads and index records are kept in parallel: the Nth `QuadIndices` entry
/// references the Nth quad's four vertices. That invariant holds by
/// construction — `push` is the only way entries are added.
#[derive(Debug, Default, Clone)]
pub struct QuadBatch {
    quads: Vec<Quad>,
    indices: Vec<QuadIndices>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(quads: usize) -> Self {
        Self {
            quads: Vec::with_capacity(quads),
            indices: Vec::with_capacity(quads),
        }
    }

    /// Appends a single-color quad.
    pub fn push(&mut self, rect: Rect, color: Color) {
        self.push_quad(Quad::new(rect, color));
    }

    /// Appends a prebuilt quad (e.g. one with per-corner colors).
    pub fn push_quad(&mut self, quad: Quad) {
        let n = self.quads.len() as u32;
        self.quads.push(quad);
        self.indices.push(QuadIndices::for_quad(n));
    }

    pub fn clear(&mut self) {
        self.quads.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    /// Always `4 × quad_count`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.quads.len() * 4
    }

    /// Always `6 × quad_count`.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len() * 6
    }

    #[inline]
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Vertex data as raw bytes for buffer upload.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.quads)
    }

    /// Index data as raw bytes for buffer upload (`u32` indices).
    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_track_quads() {
        let mut batch = QuadBatch::new();
        for i in 0..7 {
            batch.push(Rect::new(i as f32, 0.0, 1.0, 1.0), Color::WHITE);
        }
        assert_eq!(batch.quad_count(), 7);
        assert_eq!(batch.vertex_count(), 28);
        assert_eq!(batch.index_count(), 42);
    }

    #[test]
    fn nth_quad_gets_nth_index_block() {
        let mut batch = QuadBatch::new();
        batch.push(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        batch.push(Rect::new(1.0, 0.0, 1.0, 1.0), Color::WHITE);
        batch.push(Rect::new(2.0, 0.0, 1.0, 1.0), Color::WHITE);

        let raw: &[u32] = bytemuck::cast_slice(batch.index_bytes());
        assert_eq!(&raw[0..6], &[0, 1, 2, 0, 2, 3]);
        assert_eq!(&raw[6..12], &[4, 5, 6, 4, 6, 7]);
        assert_eq!(&raw[12..18], &[8, 9, 10, 8, 10, 11]);
    }

    #[test]
    fn byte_views_match_counts() {
        let mut batch = QuadBatch::new();
        batch.push(Rect::new(0.0, 0.0, 32.0, 32.0), Color::WHITE);
        batch.push(Rect::new(32.0, 0.0, 32.0, 32.0), Color::WHITE);

        assert_eq!(
            batch.vertex_bytes().len(),
            batch.vertex_count() * std::mem::size_of::<Vertex>()
        );
        assert_eq!(
            batch.index_bytes().len(),
            batch.index_count() * std::mem::size_of::<u32>()
        );
    }

    #[test]
    fn clear_resets_both_sequences() {
        let mut batch = QuadBatch::new();
        batch.push(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        batch.clear();
        assert!(batch.is_empty());
        assert_eq!(batch.index_count(), 0);
    }
}

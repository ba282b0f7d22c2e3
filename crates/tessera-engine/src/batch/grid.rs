use crate::coords::{Color, Rect};

use super::{Quad, QuadBatch};

/// Builds a `cols × rows` grid of square cells, column-major (all of column 0
/// before column 1), each cell at `(col·cell, row·cell)` with side `cell`.
///
/// `color_fn` receives `(col, row, cell_rect)` and returns the quad to place
/// there, which lets callers pick uniform, per-cell, or per-corner coloring.
pub fn grid<F>(cols: u32, rows: u32, cell: f32, mut color_fn: F) -> QuadBatch
where
    F: FnMut(u32, u32, Rect) -> Quad,
{
    let mut batch = QuadBatch::with_capacity((cols * rows) as usize);
    for col in 0..cols {
        for row in 0..rows {
            let rect = Rect::new(col as f32 * cell, row as f32 * cell, cell, cell);
            batch.push_quad(color_fn(col, row, rect));
        }
    }
    batch
}

/// Convenience wrapper for a uniformly colored grid.
pub fn solid_grid(cols: u32, rows: u32, cell: f32, color: Color) -> QuadBatch {
    grid(cols, rows, cell, |_, _, rect| Quad::new(rect, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_count_is_cols_times_rows() {
        let batch = solid_grid(100, 10, 32.0, Color::WHITE);
        assert_eq!(batch.quad_count(), 1000);
        assert_eq!(batch.vertex_count(), 4000);
        assert_eq!(batch.index_count(), 6000);
    }

    #[test]
    fn cells_land_on_the_lattice() {
        let batch = solid_grid(3, 2, 32.0, Color::WHITE);
        // Column-major: quad 1 is (col 0, row 1), quad 2 is (col 1, row 0).
        let q1 = batch.quads()[1];
        assert_eq!(q1.vertices()[0].position, [0.0, 32.0]);
        let q2 = batch.quads()[2];
        assert_eq!(q2.vertices()[0].position, [32.0, 0.0]);
        assert_eq!(q2.vertices()[2].position, [64.0, 32.0]);
    }

    #[test]
    fn color_fn_sees_every_cell_once() {
        let mut seen = 0u32;
        let _ = grid(4, 5, 8.0, |_, _, rect| {
            seen += 1;
            Quad::new(rect, Color::BLACK)
        });
        assert_eq!(seen, 20);
    }

    #[test]
    fn degenerate_grid_is_empty() {
        assert!(solid_grid(0, 10, 32.0, Color::WHITE).is_empty());
        assert!(solid_grid(10, 0, 32.0, Color::WHITE).is_empty());
    }
}

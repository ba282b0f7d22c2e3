//! Shared scene and overlay pieces for the demo binaries.

use tessera_engine::batch::{grid, Quad, QuadBatch};
use tessera_engine::coords::{Color, Rect, Vec2};
use tessera_engine::render::TextSpan;
use tessera_engine::text::{FontId, FontSystem};

/// Background clear, a dark neutral gray.
pub const CLEAR_COLOR: Color = Color::from_f32(0.1, 0.1, 0.1, 1.0);

/// Per-corner accent palette applied to every grid cell, in winding order
/// (top-left, top-right, bottom-right, bottom-left). Interpolation across
/// the quad gives each cell a red-to-blue/green gradient.
pub const ACCENT_CORNERS: [Color; 4] = [
    Color::from_u8(255, 100, 100),
    Color::from_u8(255, 100, 100),
    Color::from_u8(100, 100, 255),
    Color::from_u8(100, 255, 100),
];

pub const GRID_COLS: u32 = 100;
pub const GRID_ROWS: u32 = 10;
pub const CELL_SIZE: f32 = 32.0;

/// The demo scene: a wide strip of gradient cells, built once and uploaded
/// once.
pub fn accent_grid() -> QuadBatch {
    grid(GRID_COLS, GRID_ROWS, CELL_SIZE, |_, _, rect| {
        Quad::with_corner_colors(rect, ACCENT_CORNERS)
    })
}

/// Reads a common system font, trying well-known locations.
///
/// Returns an empty vec when none is found; callers treat that as "no panel
/// text" rather than an error.
pub fn load_system_font() -> Vec<u8> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
    .unwrap_or_default()
}

const PANEL_PADDING: f32 = 8.0;
const PANEL_LINE_FACTOR: f32 = 1.4;

/// Screen-space readout overlay: a translucent background quad sized to its
/// text, plus one [`TextSpan`] per line.
pub struct DebugPanel {
    pub font: FontId,
    pub origin: Vec2,
    pub font_size: f32,
    pub background: Color,
    pub text_color: Color,
}

impl DebugPanel {
    pub fn new(font: FontId) -> Self {
        Self {
            font,
            origin: Vec2::new(12.0, 12.0),
            font_size: 14.0,
            background: Color::from_u8a(18, 18, 26, 220),
            text_color: Color::WHITE,
        }
    }

    /// Lays out `lines` into a background batch and text spans for this frame.
    pub fn build(&self, fonts: &FontSystem, lines: &[String]) -> (QuadBatch, Vec<TextSpan>) {
        let max_line_width = lines
            .iter()
            .map(|l| fonts.measure_text(l, self.font, self.font_size).x)
            .fold(0.0f32, f32::max);
        let (w, h) = panel_extent(max_line_width, lines.len(), self.font_size);

        let mut background = QuadBatch::new();
        background.push(Rect::new(self.origin.x, self.origin.y, w, h), self.background);

        let line_h = self.font_size * PANEL_LINE_FACTOR;
        let spans = lines
            .iter()
            .enumerate()
            .map(|(i, line)| TextSpan {
                text: line.clone(),
                origin: Vec2::new(
                    self.origin.x + PANEL_PADDING,
                    self.origin.y + PANEL_PADDING + i as f32 * line_h,
                ),
                size: self.font_size,
                color: self.text_color,
                font: self.font,
            })
            .collect();

        (background, spans)
    }
}

/// Panel extent from the widest line and the line count.
fn panel_extent(max_line_width: f32, line_count: usize, font_size: f32) -> (f32, f32) {
    let w = max_line_width + PANEL_PADDING * 2.0;
    let h = line_count as f32 * font_size * PANEL_LINE_FACTOR + PANEL_PADDING * 2.0;
    (w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_has_expected_counts() {
        let batch = accent_grid();
        assert_eq!(batch.quad_count(), (GRID_COLS * GRID_ROWS) as usize);
        assert_eq!(batch.vertex_count(), 4 * batch.quad_count());
        assert_eq!(batch.index_count(), 6 * batch.quad_count());
    }

    #[test]
    fn scene_cells_carry_accent_corners() {
        let batch = accent_grid();
        let expected: Vec<[f32; 4]> = ACCENT_CORNERS.iter().map(|c| c.to_array()).collect();
        let quad = &batch.quads()[0];
        for (v, want) in quad.vertices().iter().zip(&expected) {
            assert_eq!(&v.color, want);
        }
    }

    #[test]
    fn scene_first_cell_sits_at_origin() {
        let batch = accent_grid();
        let quad = &batch.quads()[0];
        assert_eq!(quad.vertices()[0].position, [0.0, 0.0]);
        assert_eq!(quad.vertices()[2].position, [CELL_SIZE, CELL_SIZE]);
    }

    #[test]
    fn panel_extent_grows_with_lines() {
        let (w1, h1) = panel_extent(120.0, 1, 14.0);
        let (w3, h3) = panel_extent(120.0, 3, 14.0);
        assert_eq!(w1, w3);
        assert!(h3 > h1);
        assert!(w1 > 120.0);
    }

    #[test]
    fn panel_extent_covers_widest_line() {
        let (w, _) = panel_extent(200.0, 2, 14.0);
        assert!(w >= 200.0 + 2.0 * PANEL_PADDING);
    }
}

/// Straight-alpha RGBA color, components in `[0, 1]`.
///
/// The batch pipeline blends with the classic src-alpha / one-minus-src-alpha
/// configuration, so colors are stored straight (not premultiplied).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_f32(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::from_f32(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::from_f32(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from byte components (`0`–`255`).
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_u8a(r, g, b, 255)
    }

    /// Creates a color from byte components including alpha.
    #[inline]
    pub const fn from_u8a(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Returns the same color with alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Components as an array, the layout vertex buffers expect.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_maps_full_range() {
        let c = Color::from_u8(255, 0, 255);
        assert_eq!(c.to_array(), [1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn from_u8a_scales_alpha() {
        let c = Color::from_u8a(0, 0, 0, 51);
        assert!((c.a - 0.2).abs() < 1e-6);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = Color::from_u8(100, 100, 255).with_alpha(0.5);
        assert_eq!(c.a, 0.5);
        assert_eq!(c.b, 1.0);
    }
}

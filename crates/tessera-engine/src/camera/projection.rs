use glam::Mat4;

use crate::coords::Viewport;

/// Orthographic projection mapping window pixel coordinates to clip space:
/// `ortho(0, width, height, 0)` — origin top-left, +Y down.
///
/// Callers rebuild this from the current viewport every frame, so a window
/// resize updates the projection bounds to the new dimensions.
pub fn ortho_projection(viewport: Viewport) -> Mat4 {
    let w = viewport.width.max(1.0);
    let h = viewport.height.max(1.0);
    Mat4::orthographic_rh(0.0, w, h, 0.0, -1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn corners_map_to_clip_extremes() {
        let proj = ortho_projection(Viewport::new(1024.0, 768.0));
        assert_close(proj.project_point3(Vec3::new(0.0, 0.0, 0.0)), Vec3::new(-1.0, 1.0, 0.5));
        assert_close(proj.project_point3(Vec3::new(1024.0, 768.0, 0.0)), Vec3::new(1.0, -1.0, 0.5));
    }

    #[test]
    fn center_maps_to_origin() {
        let proj = ortho_projection(Viewport::new(800.0, 600.0));
        let c = proj.project_point3(Vec3::new(400.0, 300.0, 0.0));
        assert_close(c, Vec3::new(0.0, 0.0, 0.5));
    }

    #[test]
    fn resize_updates_bounds() {
        // Resizing to 800×600 must produce ortho(0, 800, 600, 0): the point
        // (800, 600) sits at the bottom-right clip corner under the new
        // projection, not under the old one.
        let old = ortho_projection(Viewport::new(1024.0, 768.0));
        let new = ortho_projection(Viewport::new(800.0, 600.0));
        assert_close(new.project_point3(Vec3::new(800.0, 600.0, 0.0)), Vec3::new(1.0, -1.0, 0.5));
        let under_old = old.project_point3(Vec3::new(800.0, 600.0, 0.0));
        assert!((under_old.x - 1.0).abs() > 1e-3);
    }
}

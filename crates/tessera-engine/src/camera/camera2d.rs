use glam::{Mat4, Vec3};

use crate::coords::{Vec2, Viewport};

use super::ortho_projection;

/// Zoom bounds. Multiplicative edits are clamped here.
pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 10.0;

/// Four discrete pan directions sampled once per frame from held keys.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PanInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl PanInput {
    /// Signed direction in pixel space (+X right, +Y down), one unit per axis.
    #[inline]
    pub fn axis(self) -> Vec2 {
        let x = (self.right as i8 - self.left as i8) as f32;
        let y = (self.down as i8 - self.up as i8) as f32;
        Vec2::new(x, y)
    }

    #[inline]
    pub fn any(self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// Smoothed pan/zoom camera over the pixel-space plane.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Where input wants the camera to be.
    pub target: Vec2,
    /// Where the camera currently is (smoothed toward `target`).
    pub position: Vec2,
    /// Scale factor applied about the viewport center.
    zoom: f32,
    /// Pan speed in pixels per second.
    pub pan_speed: f32,
    /// Exponential smoothing rate (1/s). Higher snaps faster.
    pub smoothing: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self {
            target: Vec2::zero(),
            position: Vec2::zero(),
            zoom: 1.0,
            pan_speed: 400.0,
            smoothing: 10.0,
        }
    }
}

impl Camera2D {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates directional input into the target position, scaled by
    /// elapsed frame time.
    pub fn pan(&mut self, input: PanInput, dt: f32) {
        self.target += input.axis() * (self.pan_speed * dt);
    }

    /// Moves the displayed position toward the target.
    ///
    /// Frame-rate independent exponential smoothing:
    /// `position ← target − (target − position) · e^(−smoothing·dt)`.
    pub fn update(&mut self, dt: f32) {
        let blend = 1.0 - (-self.smoothing * dt.max(0.0)).exp();
        self.position += (self.target - self.position) * blend;
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Sets zoom directly, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Multiplicative zoom: `steps` wheel clicks, 1.1× per click.
    pub fn zoom_by(&mut self, steps: f32) {
        self.set_zoom(self.zoom * 1.1f32.powf(steps));
    }

    /// Teleports both target and displayed position.
    pub fn jump_to(&mut self, pos: Vec2) {
        self.target = pos;
        self.position = pos;
    }

    /// View matrix: translate by `−position`, then scale by `zoom` about the
    /// viewport center so zoom edits pivot on what the user is looking at.
    pub fn view_matrix(&self, viewport: Viewport) -> Mat4 {
        let center = Vec3::new(viewport.width * 0.5, viewport.height * 0.5, 0.0);
        Mat4::from_translation(center)
            * Mat4::from_scale(Vec3::new(self.zoom, self.zoom, 1.0))
            * Mat4::from_translation(-center)
            * Mat4::from_translation(Vec3::new(-self.position.x, -self.position.y, 0.0))
    }

    /// Combined projection · view for the current viewport.
    pub fn view_projection(&self, viewport: Viewport) -> Mat4 {
        ortho_projection(viewport) * self.view_matrix(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(1024.0, 768.0);

    #[test]
    fn pan_accumulates_scaled_by_dt() {
        let mut cam = Camera2D::new();
        cam.pan_speed = 100.0;
        let right = PanInput { right: true, ..Default::default() };
        cam.pan(right, 0.5);
        cam.pan(right, 0.5);
        assert_eq!(cam.target, Vec2::new(100.0, 0.0));
        // Displayed position has not moved yet.
        assert_eq!(cam.position, Vec2::zero());
    }

    #[test]
    fn opposing_inputs_cancel() {
        let mut cam = Camera2D::new();
        cam.pan(
            PanInput { left: true, right: true, up: true, down: true },
            1.0,
        );
        assert_eq!(cam.target, Vec2::zero());
    }

    #[test]
    fn update_approaches_target_monotonically() {
        let mut cam = Camera2D::new();
        cam.target = Vec2::new(200.0, -80.0);
        let mut last = (cam.target - cam.position).length();
        for _ in 0..10 {
            cam.update(1.0 / 60.0);
            let d = (cam.target - cam.position).length();
            assert!(d < last);
            last = d;
        }
    }

    #[test]
    fn update_converges_after_long_dt() {
        let mut cam = Camera2D::new();
        cam.target = Vec2::new(500.0, 500.0);
        cam.update(5.0);
        assert!((cam.target - cam.position).length() < 1.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera2D::new();
        cam.set_zoom(1000.0);
        assert_eq!(cam.zoom(), MAX_ZOOM);
        cam.set_zoom(0.0);
        assert_eq!(cam.zoom(), MIN_ZOOM);
    }

    #[test]
    fn zoom_by_is_multiplicative() {
        let mut cam = Camera2D::new();
        cam.zoom_by(1.0);
        assert!((cam.zoom() - 1.1).abs() < 1e-6);
        cam.zoom_by(-1.0);
        assert!((cam.zoom() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn view_at_identity_when_parked() {
        let cam = Camera2D::new();
        let v = cam.view_matrix(VP);
        let p = v.transform_point3(glam::Vec3::new(10.0, 20.0, 0.0));
        assert!((p.x - 10.0).abs() < 1e-4 && (p.y - 20.0).abs() < 1e-4);
    }

    #[test]
    fn pan_shifts_world_opposite() {
        let mut cam = Camera2D::new();
        cam.jump_to(Vec2::new(100.0, 0.0));
        let v = cam.view_matrix(VP);
        let p = v.transform_point3(glam::Vec3::new(100.0, 0.0, 0.0));
        assert!(p.x.abs() < 1e-4);
    }

    #[test]
    fn zoom_pivots_on_viewport_center() {
        let mut cam = Camera2D::new();
        cam.jump_to(Vec2::new(37.0, -12.0));
        cam.set_zoom(2.5);
        // The world point that sits at the viewport center stays put when zoomed.
        let center_world = glam::Vec3::new(
            cam.position.x + VP.width * 0.5,
            cam.position.y + VP.height * 0.5,
            0.0,
        );
        let p = cam.view_matrix(VP).transform_point3(center_world);
        assert!((p.x - VP.width * 0.5).abs() < 1e-3);
        assert!((p.y - VP.height * 0.5).abs() < 1e-3);
    }

    #[test]
    fn view_projection_composes() {
        let cam = Camera2D::new();
        let vp = cam.view_projection(VP);
        let c = vp.project_point3(glam::Vec3::new(512.0, 384.0, 0.0));
        assert!(c.x.abs() < 1e-5 && c.y.abs() < 1e-5);
    }
}

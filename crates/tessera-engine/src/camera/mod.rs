//! 2D pan/zoom camera.
//!
//! The camera separates the *target* position (moved directly by input) from
//! the *displayed* position (exponentially smoothed toward the target), so
//! discrete key presses produce gliding motion. Zoom is a multiplicative
//! scalar applied about the viewport center.

mod camera2d;
mod projection;

pub use camera2d::{Camera2D, PanInput, MAX_ZOOM, MIN_ZOOM};
pub use projection::ortho_projection;

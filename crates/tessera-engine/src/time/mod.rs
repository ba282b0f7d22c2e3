//! Frame timing.
//!
//! One `FrameClock` per window; `tick()` once per presented frame yields a
//! `FrameTime` whose delta drives camera pan increments and smoothing.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};

//! Tessera engine crate.
//!
//! Owns the platform + GPU runtime pieces and the batched-quad data model
//! used by the demo binaries.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod batch;
pub mod camera;
pub mod render;
pub mod text;

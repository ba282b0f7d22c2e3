//! Logging utilities.
//!
//! Centralizes logger initialization on the standard `log` facade. wgpu and
//! naga route driver/validation diagnostics through the same facade, so this
//! is also where GPU-side warnings end up.

mod init;

pub use init::{init_logging, LoggingConfig};

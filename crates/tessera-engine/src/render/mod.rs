//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers, textures) and are
//! created lazily on first draw so they can follow surface-format changes.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The batch vertex shader maps to clip space via a view-projection
//!   uniform; the text shader via a viewport uniform.

mod atlas;
mod batch_renderer;
mod ctx;
mod text_renderer;

pub use batch_renderer::{BatchRenderer, StaticBatch};
pub use ctx::{RenderCtx, RenderTarget};
pub use text_renderer::{TextRenderer, TextSpan};

//! Static batched-quad demo: the grid scene is built once, uploaded once,
//! and redrawn under a window-sized orthographic projection every frame.

use anyhow::Result;
use winit::dpi::LogicalSize;

use tessera_engine::batch::QuadBatch;
use tessera_engine::camera::ortho_projection;
use tessera_engine::coords::Viewport;
use tessera_engine::core::{App, AppControl, FrameCtx};
use tessera_engine::device::GpuInit;
use tessera_engine::input::Key;
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::render::{BatchRenderer, StaticBatch};
use tessera_engine::window::{Runtime, RuntimeConfig};

use tessera_demos::{accent_grid, CLEAR_COLOR};

struct GridApp {
    scene: QuadBatch,
    uploaded: Option<StaticBatch>,
    renderer: BatchRenderer,
}

impl GridApp {
    fn new() -> Self {
        Self {
            scene: accent_grid(),
            uploaded: None,
            renderer: BatchRenderer::new(),
        }
    }
}

impl App for GridApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }

        let (w, h) = ctx.window.logical_size();
        let view_proj = ortho_projection(Viewport::new(w, h));

        let scene = &self.scene;
        let uploaded = &mut self.uploaded;
        let renderer = &mut self.renderer;

        ctx.render(CLEAR_COLOR, |rctx, target| {
            if uploaded.is_none() {
                *uploaded = Some(renderer.upload(rctx, scene));
            }
            let Some(gpu_batch) = uploaded.as_ref() else { return };

            renderer.draw_static(rctx, target, gpu_batch, view_proj);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "tessera grid".to_string(),
        initial_size: LogicalSize::new(1024.0, 768.0),
    };

    Runtime::run(config, GpuInit::default(), GridApp::new())
}

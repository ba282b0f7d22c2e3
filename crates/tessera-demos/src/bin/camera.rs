//! Pan/zoom demo over the same grid scene, with a screen-space debug panel.
//!
//! Controls:
//! - WASD / arrow keys pan the camera target; the displayed position glides
//!   toward it.
//! - Mouse wheel and `-` / `=` adjust zoom about the viewport center.
//! - Escape quits.

use anyhow::Result;
use winit::dpi::LogicalSize;

use tessera_engine::batch::QuadBatch;
use tessera_engine::camera::{ortho_projection, Camera2D, PanInput};
use tessera_engine::coords::Viewport;
use tessera_engine::core::{App, AppControl, FrameCtx};
use tessera_engine::device::GpuInit;
use tessera_engine::input::Key;
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::render::{BatchRenderer, StaticBatch, TextRenderer};
use tessera_engine::text::FontSystem;
use tessera_engine::window::{Runtime, RuntimeConfig};

use tessera_demos::{accent_grid, load_system_font, DebugPanel, CLEAR_COLOR};

struct CameraApp {
    scene: QuadBatch,
    uploaded: Option<StaticBatch>,
    camera: Camera2D,

    // Two batch renderers: the world pass and the screen-space overlay use
    // different view-projection uniforms within one frame.
    world: BatchRenderer,
    overlay: BatchRenderer,
    text: TextRenderer,

    fonts: FontSystem,
    panel: Option<DebugPanel>,
}

impl CameraApp {
    fn new() -> Self {
        let mut fonts = FontSystem::new();
        let panel = match fonts.load_font(&load_system_font()) {
            Ok(font) => Some(DebugPanel::new(font)),
            Err(e) => {
                log::warn!("no usable system font, debug panel disabled: {e}");
                None
            }
        };

        Self {
            scene: accent_grid(),
            uploaded: None,
            camera: Camera2D::new(),
            world: BatchRenderer::new(),
            overlay: BatchRenderer::new(),
            text: TextRenderer::new(),
            fonts,
            panel,
        }
    }

    fn pan_input(ctx: &FrameCtx<'_, '_>) -> PanInput {
        let down = |k: Key| ctx.input.key_down(k);
        PanInput {
            left: down(Key::A) || down(Key::ArrowLeft),
            right: down(Key::D) || down(Key::ArrowRight),
            up: down(Key::W) || down(Key::ArrowUp),
            down: down(Key::S) || down(Key::ArrowDown),
        }
    }
}

impl App for CameraApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }

        let dt = ctx.time.dt;

        self.camera.pan(Self::pan_input(ctx), dt);

        let wheel = ctx.input_frame.wheel_lines;
        if wheel != 0.0 {
            self.camera.zoom_by(wheel);
        }
        if ctx.input_frame.key_pressed(Key::Minus) {
            self.camera.zoom_by(-1.0);
        }
        if ctx.input_frame.key_pressed(Key::Equal) {
            self.camera.zoom_by(1.0);
        }

        self.camera.update(dt);

        let (w, h) = ctx.window.logical_size();
        let viewport = Viewport::new(w, h);
        let world_proj = self.camera.view_projection(viewport);
        let screen_proj = ortho_projection(viewport);

        let panel_content = self.panel.as_ref().map(|panel| {
            let lines = vec![
                format!("pos    {:8.1} {:8.1}", self.camera.position.x, self.camera.position.y),
                format!("target {:8.1} {:8.1}", self.camera.target.x, self.camera.target.y),
                format!("zoom   {:.2}", self.camera.zoom()),
                format!("frame  {:.2} ms", dt * 1000.0),
            ];
            panel.build(&self.fonts, &lines)
        });

        let scene = &self.scene;
        let uploaded = &mut self.uploaded;
        let world = &mut self.world;
        let overlay = &mut self.overlay;
        let text = &mut self.text;
        let fonts = &self.fonts;

        ctx.render(CLEAR_COLOR, |rctx, target| {
            if uploaded.is_none() {
                *uploaded = Some(world.upload(rctx, scene));
            }
            let Some(gpu_batch) = uploaded.as_ref() else { return };

            world.draw_static(rctx, target, gpu_batch, world_proj);

            if let Some((background, spans)) = &panel_content {
                overlay.draw_batch(rctx, target, background, screen_proj);
                text.render(rctx, target, fonts, spans);
            }
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "tessera camera".to_string(),
        initial_size: LogicalSize::new(1024.0, 768.0),
    };

    Runtime::run(config, GpuInit::default(), CameraApp::new())
}

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::batch::{QuadBatch, QuadIndices, Vertex};
use crate::render::{RenderCtx, RenderTarget};

/// Straight-alpha blending (src-alpha / one-minus-src-alpha).
fn alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

/// A quad batch resident in GPU-owned buffers.
///
/// Created once via [`BatchRenderer::upload`] and never mutated afterward —
/// the static-grid geometry of the demos lives here for the life of the
/// process.
pub struct StaticBatch {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
}

impl StaticBatch {
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// Renderer for [`QuadBatch`] geometry.
///
/// One indexed draw call per batch; the vertex shader applies a single
/// view-projection matrix uniform. Two paths:
/// - [`upload`](Self::upload) + [`draw_static`](Self::draw_static) for
///   geometry built once,
/// - [`draw_batch`](Self::draw_batch) for per-frame geometry (overlays),
///   backed by capacity-growing buffers.
///
/// One instance per view-projection consumer per frame: the uniform buffer
/// is written with `Queue::write_buffer`, so sharing an instance between the
/// world pass and a screen-space overlay would make the last write win for
/// both passes.
#[derive(Default)]
pub struct BatchRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    camera_ubo: Option<wgpu::Buffer>,

    dyn_vbo: Option<wgpu::Buffer>,
    dyn_ibo: Option<wgpu::Buffer>,
    dyn_capacity: usize,
}

impl BatchRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads `batch` into fresh GPU buffers, returning a handle that can be
    /// drawn every frame without further writes.
    pub fn upload(&mut self, ctx: &RenderCtx<'_>, batch: &QuadBatch) -> StaticBatch {
        let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tessera static batch vbo"),
            contents: batch.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tessera static batch ibo"),
            contents: batch.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });

        StaticBatch {
            vbo,
            ibo,
            index_count: batch.index_count() as u32,
        }
    }

    /// Draws a previously uploaded batch under `view_proj`.
    pub fn draw_static(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        batch: &StaticBatch,
        view_proj: Mat4,
    ) {
        if batch.index_count == 0 {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.write_camera_uniform(ctx, view_proj);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = begin_load_pass(target, "tessera static batch pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, batch.vbo.slice(..));
        rpass.set_index_buffer(batch.ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..batch.index_count, 0, 0..1);
    }

    /// Draws a CPU-side batch rebuilt this frame (e.g. a panel background).
    ///
    /// Buffers grow to the next power of two of the quad count and are
    /// rewritten each call.
    pub fn draw_batch(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        batch: &QuadBatch,
        view_proj: Mat4,
    ) {
        if batch.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.write_camera_uniform(ctx, view_proj);
        self.ensure_dynamic_capacity(ctx, batch.quad_count());

        let Some(dyn_vbo) = self.dyn_vbo.as_ref() else { return };
        let Some(dyn_ibo) = self.dyn_ibo.as_ref() else { return };

        ctx.queue.write_buffer(dyn_vbo, 0, batch.vertex_bytes());
        ctx.queue.write_buffer(dyn_ibo, 0, batch.index_bytes());

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = begin_load_pass(target, "tessera batch pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, dyn_vbo.slice(..));
        rpass.set_index_buffer(dyn_ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..batch.index_count() as u32, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tessera batch shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/batch.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("tessera batch bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(camera_ubo_min_binding_size()),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("tessera batch pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tessera batch pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.camera_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.camera_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let camera_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tessera batch camera ubo"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tessera batch bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_ubo.as_entire_binding(),
            }],
        });

        self.camera_ubo = Some(camera_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_camera_uniform(&mut self, ctx: &RenderCtx<'_>, view_proj: Mat4) {
        let Some(ubo) = self.camera_ubo.as_ref() else { return };
        let u = CameraUniform {
            view_proj: view_proj.to_cols_array_2d(),
        };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }

    fn ensure_dynamic_capacity(&mut self, ctx: &RenderCtx<'_>, required_quads: usize) {
        if required_quads <= self.dyn_capacity && self.dyn_vbo.is_some() && self.dyn_ibo.is_some() {
            return;
        }

        let new_cap = required_quads.next_power_of_two().max(64);

        self.dyn_vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tessera dynamic batch vbo"),
            size: (new_cap * 4 * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.dyn_ibo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tessera dynamic batch ibo"),
            size: (new_cap * std::mem::size_of::<QuadIndices>()) as u64,
            usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.dyn_capacity = new_cap;
    }
}

fn begin_load_pass<'a>(
    target: &'a mut RenderTarget<'_>,
    label: &'static str,
) -> wgpu::RenderPass<'a> {
    target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target.color_view,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    })
}

/// The camera uniform is a mat4 (64 bytes); size is non-zero by construction.
fn camera_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<CameraUniform>() as u64)
        .expect("CameraUniform has non-zero size by construction")
}

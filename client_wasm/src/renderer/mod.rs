pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_quad, Mesh};
use game_core::render::{center_line, Scene};
use game_core::Config;
use resources::SceneBuffers;

pub struct Meshes {
    pub quad: Mesh,
    pub circle: Mesh,
}

/// Presents game scenes on a WebGPU canvas
pub struct Renderer {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub surface: wgpu::Surface<'static>,
    pub surface_config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    pub camera_bind_group: wgpu::BindGroup,
    pub buffers: SceneBuffers,
    pub meshes: Meshes,
}

impl Renderer {
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        config: &Config,
    ) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::top_left(config.width, config.height);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        // Center line dashes plus both paddles
        let rect_capacity = center_line(config).count() + 2;
        let buffers = resources::create_buffers(&ctx.device, &camera, rect_capacity);

        let camera_bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        let meshes = Meshes {
            quad: create_quad(&ctx.device),
            circle: create_circle(&ctx.device, 32),
        };

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            pipeline: pipes.pipeline,
            camera_bind_group,
            buffers,
            meshes,
        })
    }
}

impl game_core::Surface for Renderer {
    type Error = String;

    fn present(&mut self, scene: &Scene) -> Result<(), String> {
        draw::draw_scene(self, scene)
    }
}

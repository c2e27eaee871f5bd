use super::resources::{InstanceBuffer, InstanceData};
use super::Renderer;
use crate::mesh::Mesh;
use game_core::render::Scene;
use wgpu::*;

pub fn draw_scene(renderer: &mut Renderer, scene: &Scene) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one draws to the fresh surface
            log::warn!("surface lost, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());

    upload_instances(renderer, scene);

    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    {
        let clear = scene.clear;
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: clear.r as f64,
                        g: clear.g as f64,
                        b: clear.b as f64,
                        a: clear.a as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

        // Rects first (center line, paddles), ball on top
        draw_instances(&mut pass, &renderer.meshes.quad, &renderer.buffers.rects);
        draw_instances(&mut pass, &renderer.meshes.circle, &renderer.buffers.circles);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn upload_instances(renderer: &mut Renderer, scene: &Scene) {
    let rects: Vec<InstanceData> = scene.rects.iter().map(InstanceData::from).collect();
    let circles: Vec<InstanceData> = scene.circles.iter().map(InstanceData::from).collect();

    renderer
        .buffers
        .rects
        .upload(&renderer.device, &renderer.queue, &rects);
    renderer
        .buffers
        .circles
        .upload(&renderer.device, &renderer.queue, &circles);
}

fn draw_instances(pass: &mut RenderPass<'_>, mesh: &Mesh, instances: &InstanceBuffer) {
    if instances.len == 0 {
        return;
    }
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, instances.buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..mesh.index_count, 0, 0..instances.len);
}

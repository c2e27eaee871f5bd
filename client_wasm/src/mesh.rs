//! Unit meshes, scaled per instance by the shader
//!
//! The quad spans `[0, 1]` so an instance's `xy` is its top-left corner;
//! the circle has radius 1 around the origin so `xy` is its center.

use wgpu::util::DeviceExt;
use wgpu::*;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    fn new(device: &Device, label: &str, vertices: &[Vertex], indices: &[u16]) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(vertices),
            usage: BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(indices),
            usage: BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

pub fn create_quad(device: &Device) -> Mesh {
    let vertices = [
        Vertex { position: [0.0, 0.0] },
        Vertex { position: [1.0, 0.0] },
        Vertex { position: [1.0, 1.0] },
        Vertex { position: [0.0, 1.0] },
    ];
    let indices: [u16; 6] = [0, 1, 2, 0, 2, 3];
    Mesh::new(device, "Quad", &vertices, &indices)
}

/// Triangle fan around the center, `segments` slices
pub fn create_circle(device: &Device, segments: u16) -> Mesh {
    let mut vertices = vec![Vertex { position: [0.0, 0.0] }];
    for i in 0..segments {
        let theta = std::f32::consts::TAU * i as f32 / segments as f32;
        vertices.push(Vertex {
            position: [theta.cos(), theta.sin()],
        });
    }

    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        indices.push(0);
        indices.push(1 + i);
        indices.push(1 + (i + 1) % segments);
    }

    Mesh::new(device, "Circle", &vertices, &indices)
}

use crate::camera::{Camera, CameraUniform};
use game_core::render::{Circle, Rect};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

impl From<&Rect> for InstanceData {
    fn from(rect: &Rect) -> Self {
        Self {
            transform: [rect.x, rect.y, rect.w, rect.h],
            tint: rect.color.to_array(),
        }
    }
}

impl From<&Circle> for InstanceData {
    fn from(circle: &Circle) -> Self {
        Self {
            transform: [circle.x, circle.y, circle.r, circle.r],
            tint: circle.color.to_array(),
        }
    }
}

/// Growable per-instance vertex buffer
pub struct InstanceBuffer {
    label: &'static str,
    pub buffer: Buffer,
    capacity: usize,
    pub len: u32,
}

impl InstanceBuffer {
    pub fn new(device: &Device, label: &'static str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            label,
            buffer: Self::allocate(device, label, capacity),
            capacity,
            len: 0,
        }
    }

    fn allocate(device: &Device, label: &'static str, capacity: usize) -> Buffer {
        device.create_buffer(&BufferDescriptor {
            label: Some(label),
            size: (capacity * std::mem::size_of::<InstanceData>()) as u64,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Replace the contents, reallocating if the frame needs more room
    pub fn upload(&mut self, device: &Device, queue: &Queue, instances: &[InstanceData]) {
        if instances.len() > self.capacity {
            self.capacity = instances.len().next_power_of_two();
            self.buffer = Self::allocate(device, self.label, self.capacity);
            log::debug!("{} grown to {} instances", self.label, self.capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(instances));
        }
        self.len = instances.len() as u32;
    }
}

pub struct SceneBuffers {
    pub camera: Buffer,
    pub rects: InstanceBuffer,
    pub circles: InstanceBuffer,
}

pub fn create_buffers(device: &Device, camera: &Camera, rect_capacity: usize) -> SceneBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    SceneBuffers {
        camera: camera_buffer,
        rects: InstanceBuffer::new(device, "Rect Instance Buffer", rect_capacity),
        circles: InstanceBuffer::new(device, "Circle Instance Buffer", 1),
    }
}

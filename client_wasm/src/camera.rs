//! Orthographic camera mapping playfield units onto the canvas
//!
//! Y points down, so a playfield coordinate equals a canvas pixel.

use glam::Mat4;

pub struct Camera {
    pub projection: Mat4,
}

impl Camera {
    /// Playfield is `width` x `height` units with the origin top-left
    pub fn top_left(width: f32, height: f32) -> Self {
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { projection }
    }
}

/// Camera uniform data (matches the WGSL `Camera` struct)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.projection.to_cols_array_2d(),
        }
    }
}

//! Pixel-space camera for 2D simulations

use glam::Mat4;

/// Orthographic camera mapping window pixels to clip space.
///
/// The origin is the top-left corner of the window and y grows downwards,
/// matching the coordinates the simulations work in.
#[derive(Debug, Clone)]
pub struct PixelCamera {
    pub width: f32,
    pub height: f32,
}

impl PixelCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.width, self.height, 0.0, -1.0, 1.0)
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &PixelCamera) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
        }
    }
}

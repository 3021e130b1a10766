//! Orthographic camera for 2D scenes

use glam::{Mat4, Vec3};

/// 2D orthographic camera.
///
/// `zoom` is the distance in world units from the centre of the view to its
/// top edge; the horizontal extent follows the aspect ratio.
#[derive(Debug, Clone)]
pub struct Camera2D {
    pub position: Vec3,
    pub zoom: f32,
    pub aspect_ratio: f32,
}

impl Camera2D {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            zoom: 1.0,
            aspect_ratio,
        }
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        let half_width = self.zoom * self.aspect_ratio;
        let half_height = self.zoom;

        let projection = Mat4::orthographic_rh(
            -half_width,
            half_width,
            -half_height,
            half_height,
            -1.0,
            1.0,
        );

        let view = Mat4::from_translation(-self.position);

        projection * view
    }

    /// Half extents of the visible region in world units
    pub fn half_extents(&self) -> (f32, f32) {
        (self.zoom * self.aspect_ratio, self.zoom)
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub fn from_camera_2d(camera: &Camera2D) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            position: [camera.position.x, camera.position.y, camera.position.z, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_of_view_maps_to_clip_corner() {
        let mut camera = Camera2D::new(800.0 / 600.0);
        camera.zoom = 100.0;

        let (hw, hh) = camera.half_extents();
        let clip = camera.view_projection() * glam::Vec4::new(hw, hh, 0.0, 1.0);
        assert!((clip.x - 1.0).abs() < 1e-5, "x = {}", clip.x);
        assert!((clip.y - 1.0).abs() < 1e-5, "y = {}", clip.y);

        let origin = camera.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(origin.x.abs() < 1e-6 && origin.y.abs() < 1e-6);
    }

    #[test]
    fn panning_shifts_the_view() {
        let mut camera = Camera2D::new(1.0);
        camera.zoom = 10.0;
        camera.position = Vec3::new(10.0, 0.0, 0.0);

        let clip = camera.view_projection() * glam::Vec4::new(10.0, 0.0, 0.0, 1.0);
        assert!(clip.x.abs() < 1e-6);
    }

    #[test]
    fn uniform_carries_camera_position() {
        let mut camera = Camera2D::new(2.0);
        camera.position = Vec3::new(1.0, 2.0, 0.0);
        let uniform = CameraUniform::from_camera_2d(&camera);
        assert_eq!(uniform.position, [1.0, 2.0, 0.0, 1.0]);
    }
}

use glam::{Mat4, Vec2, Vec3};

use super::projection::{Ray, ScreenProjector, Viewport};
use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Surface the camera renders into.
    viewport: Viewport,
}

impl PerspectiveCamera {
    /// Build a camera from options for a surface of the given size.
    #[must_use]
    pub fn new(options: &CameraOptions, viewport: Viewport) -> Self {
        Self {
            eye: Vec3::from_array(options.eye),
            target: Vec3::from_array(options.target),
            up: Vec3::Y,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
            viewport,
        }
    }

    /// Track a surface resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh uses [0,1] depth range (wgpu/Vulkan convention)
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.viewport.aspect(),
            self.znear,
            self.zfar,
        );
        proj * view
    }
}

impl ScreenProjector for PerspectiveCamera {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn ray_through(&self, ndc: Vec2) -> Ray {
        let inverse = self.build_matrix().inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));
        Ray {
            origin: near,
            direction: (far - near).normalize_or(self.target - self.eye),
        }
    }
}

/// 200×200 surface, 90° fov, eye at z=5 looking at the origin: pixel
/// `(x, y)` lands on the z=0 plane at `((x - 100) / 20, (100 - y) / 20, 0)`.
#[cfg(test)]
pub(crate) fn square_camera() -> PerspectiveCamera {
    let options = CameraOptions {
        fovy: 90.0,
        ..CameraOptions::default()
    };
    PerspectiveCamera::new(&options, Viewport::new(200.0, 200.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Plane;

    #[test]
    fn centre_ray_hits_target() {
        let camera = square_camera();
        let hit = camera
            .project_to_plane(Vec2::ZERO, &Plane::facing_z(0.0))
            .unwrap();
        assert!(hit.distance(Vec3::ZERO) < 1e-4, "hit = {hit}");
    }

    #[test]
    fn edge_ray_spreads_with_field_of_view() {
        // 90° vertical fov at distance 5: the edge of the view is 5 units out.
        let camera = square_camera();
        let edge = Vec2::new(200.0, 100.0);
        let hit = camera
            .project_screen_to_plane(edge, &Plane::facing_z(0.0))
            .unwrap();
        assert!(hit.distance(Vec3::new(5.0, 0.0, 0.0)) < 1e-3, "hit = {hit}");
    }

    #[test]
    fn deeper_plane_is_closer_to_the_eye() {
        let camera = square_camera();
        let hit = camera
            .project_to_plane(Vec2::new(0.0, 1.0), &Plane::facing_z(2.5))
            .unwrap();
        assert!(hit.distance(Vec3::new(0.0, 2.5, 2.5)) < 1e-3, "hit = {hit}");
    }

    #[test]
    fn resize_changes_aspect_only() {
        let mut camera = square_camera();
        camera.resize(400.0, 200.0);
        assert_eq!(camera.viewport().aspect(), 2.0);
        // Vertical spread is unchanged by a wider surface.
        let hit = camera
            .project_to_plane(Vec2::new(0.0, 1.0), &Plane::facing_z(0.0))
            .unwrap();
        assert!(hit.distance(Vec3::new(0.0, 5.0, 0.0)) < 1e-3, "hit = {hit}");
    }
}

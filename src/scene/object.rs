use glam::{Mat4, Quat, Vec3};

/// A mounted scene object the controller can move, spin and scale.
///
/// The renderer owns the real node; this trait is the narrow view the
/// controller needs of it. Only the integrator calls the setters.
pub trait Manipulable {
    /// World position of the object's origin.
    fn position(&self) -> Vec3;
    /// Move the object's origin.
    fn set_position(&mut self, position: Vec3);
    /// Rotation about the world Y axis, in radians.
    fn yaw(&self) -> f32;
    /// Set the rotation about the world Y axis.
    fn set_yaw(&mut self, yaw: f32);
    /// Set the uniform scale.
    fn set_uniform_scale(&mut self, scale: f32);
}

/// Position, yaw and uniform scale of a door model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransform {
    /// World position.
    pub position: Vec3,
    /// Yaw in radians.
    pub yaw: f32,
    /// Uniform scale.
    pub scale: f32,
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            scale: 1.0,
        }
    }
}

impl ObjectTransform {
    /// Transform at `position` with the given yaw and unit scale.
    #[must_use]
    pub fn at(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            yaw,
            ..Self::default()
        }
    }

    /// Model matrix for the renderer.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(self.yaw),
            self.position,
        )
    }
}

impl Manipulable for ObjectTransform {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn yaw(&self) -> f32 {
        self.yaw
    }

    fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
}

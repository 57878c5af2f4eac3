//! Per-frame smoothing of the manipulated object's transform.
//!
//! Runs once per rendered frame. Scale, zoom position and yaw ease toward
//! the router's targets at a frame-rate independent rate; drag follows the
//! live pointer with a fixed blend.

use glam::Vec2;

use crate::camera::{Plane, ScreenProjector};
use crate::input::InteractionState;
use crate::options::{ManipulationOptions, Options};
use crate::scene::Manipulable;

/// Advances [`InteractionState`] and commits the result to the object.
#[derive(Debug, Clone)]
pub struct TransformIntegrator {
    manipulation: ManipulationOptions,
    plane: Plane,
}

impl TransformIntegrator {
    /// Create an integrator from gesture tuning.
    #[must_use]
    pub fn new(manipulation: ManipulationOptions) -> Self {
        let plane = Plane::facing_z(manipulation.pan_plane_depth);
        Self {
            manipulation,
            plane,
        }
    }

    /// Create an integrator from the top-level options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(options.manipulation.clone())
    }

    /// Clamp a raw frame delta into `[0, max_frame_delta]`. Non-finite
    /// deltas count as zero.
    #[must_use]
    pub fn clamp_delta(&self, dt: f32) -> f32 {
        if dt.is_finite() {
            dt.min(self.manipulation.max_frame_delta).max(0.0)
        } else {
            0.0
        }
    }

    /// Advance one frame.
    ///
    /// `pointer` is the cursor in normalized device coordinates. A frame
    /// with no elapsed time, or with no mounted object, changes nothing.
    pub fn tick<P, O>(
        &self,
        state: &mut InteractionState,
        object: Option<&mut O>,
        projector: &P,
        dt: f32,
        pointer: Vec2,
    ) where
        P: ScreenProjector + ?Sized,
        O: Manipulable + ?Sized,
    {
        let Some(object) = object else {
            return;
        };
        let dt = self.clamp_delta(dt);
        if dt == 0.0 {
            return;
        }
        // Approach fraction; capped so a high rate cannot overshoot.
        let alpha = (dt * self.manipulation.smooth_rate).min(1.0);

        self.smooth_zoom(state, object, alpha);
        if state.is_dragging {
            self.follow_drag(state, object, projector, pointer);
        }
        self.spin(state, object, alpha);
    }

    fn smooth_zoom<O>(
        &self,
        state: &mut InteractionState,
        object: &mut O,
        alpha: f32,
    ) where
        O: Manipulable + ?Sized,
    {
        let scale_diff = state.target_scale - state.current_scale;
        if scale_diff.abs() <= self.manipulation.epsilon {
            return;
        }

        state.current_scale = self
            .manipulation
            .clamp_scale(state.current_scale + scale_diff * alpha);
        object.set_uniform_scale(state.current_scale);
        object.set_position(
            object.position().lerp(state.target_position, alpha),
        );
    }

    fn follow_drag<P, O>(
        &self,
        state: &InteractionState,
        object: &mut O,
        projector: &P,
        pointer: Vec2,
    ) where
        P: ScreenProjector + ?Sized,
        O: Manipulable + ?Sized,
    {
        let Some(hit) = projector.project_to_plane(pointer, &self.plane) else {
            return;
        };

        let new_position = hit - state.drag_offset;
        let mut position = object
            .position()
            .lerp(new_position, self.manipulation.drag_blend);
        position.z = self.manipulation.pan_plane_depth;
        object.set_position(position);
    }

    fn spin<O>(&self, state: &mut InteractionState, object: &mut O, alpha: f32)
    where
        O: Manipulable + ?Sized,
    {
        if state.is_rotating {
            state.target_rotation_y += state.rotation_velocity;
        } else if state.rotation_velocity.abs() > self.manipulation.epsilon {
            if self.manipulation.coast_on_release {
                state.target_rotation_y += state.rotation_velocity;
            }
            state.rotation_velocity *= self.manipulation.rotation_decay;
        }

        let yaw = object.yaw();
        object.set_yaw(yaw + (state.target_rotation_y - yaw) * alpha);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::core::square_camera;
    use crate::camera::PerspectiveCamera;
    use crate::scene::ObjectTransform;

    const FRAME: f32 = 1.0 / 60.0;

    /// One door in front of the test camera.
    struct Rig {
        integrator: TransformIntegrator,
        camera: PerspectiveCamera,
        door: ObjectTransform,
        state: InteractionState,
    }

    impl Rig {
        fn new(
            manipulation: ManipulationOptions,
            door: ObjectTransform,
        ) -> Self {
            let state =
                InteractionState::new(door.position, door.yaw, door.scale);
            Self {
                integrator: TransformIntegrator::new(manipulation),
                camera: square_camera(),
                door,
                state,
            }
        }

        fn tick(&mut self, dt: f32, pointer: Vec2) {
            self.integrator.tick(
                &mut self.state,
                Some(&mut self.door),
                &self.camera,
                dt,
                pointer,
            );
        }

        fn frames(&mut self, count: usize) {
            for _ in 0..count {
                self.tick(FRAME, Vec2::ZERO);
            }
        }
    }

    fn tuning() -> ManipulationOptions {
        ManipulationOptions {
            initial_scale: 1.0,
            ..ManipulationOptions::default()
        }
    }

    fn rig() -> Rig {
        Rig::new(tuning(), ObjectTransform::default())
    }

    #[test]
    fn zero_delta_frames_change_nothing() {
        let door = ObjectTransform::at(Vec3::new(0.5, 0.5, 0.0), 0.2);
        let mut rig = Rig::new(tuning(), door);
        rig.state.target_scale = 3.0;
        rig.state.target_position = Vec3::new(-1.0, 2.0, 0.0);
        rig.state.target_rotation_y = 1.0;
        rig.state.rotation_velocity = 0.3;
        rig.state.is_dragging = true;
        let before = (rig.door, rig.state.clone());

        for _ in 0..10 {
            rig.tick(0.0, Vec2::ONE);
        }

        assert_eq!((rig.door, rig.state), before);
    }

    #[test]
    fn delta_is_clamped() {
        let integrator = rig().integrator;
        assert_eq!(integrator.clamp_delta(2.5), 0.1);
        assert_eq!(integrator.clamp_delta(-1.0), 0.0);
        assert_eq!(integrator.clamp_delta(f32::NAN), 0.0);
        assert_eq!(integrator.clamp_delta(FRAME), FRAME);
    }

    #[test]
    fn stalled_frame_acts_like_max_delta() {
        let run = |dt| {
            let mut rig = rig();
            rig.state.target_scale = 2.0;
            rig.state.target_rotation_y = 1.0;
            rig.tick(dt, Vec2::ZERO);
            (rig.door, rig.state)
        };
        assert_eq!(run(30.0), run(0.1));
    }

    #[test]
    fn unvalidated_tuning_does_not_panic() {
        let mut rig = Rig::new(
            ManipulationOptions {
                min_scale: 4.0,
                max_scale: 2.0,
                max_frame_delta: f32::NAN,
                ..tuning()
            },
            ObjectTransform::default(),
        );
        rig.state.target_scale = 3.0;

        rig.frames(5);
        assert_eq!(rig.door.scale, 2.0);
        assert!(rig.door.position.is_finite());
        assert!(rig.door.yaw.is_finite());
    }

    #[test]
    fn scale_converges_without_leaving_bounds() {
        let mut rig = rig();
        rig.state.target_scale = 5.0;

        let mut last = rig.state.current_scale();
        for frame in 0..240 {
            let dt = if frame % 7 == 3 { 0.1 } else { FRAME };
            rig.tick(dt, Vec2::ZERO);
            let scale = rig.state.current_scale();
            assert!(scale >= last);
            assert!(scale <= 5.0);
            assert_eq!(rig.door.scale, scale);
            last = scale;
        }
        assert!((rig.state.current_scale() - 5.0).abs() <= 0.001);
    }

    #[test]
    fn zoom_position_follows_target_while_scaling() {
        let mut rig = rig();
        rig.state.target_scale = 1.1;
        rig.state.target_position = Vec3::new(-0.2, 0.0, 0.0);

        rig.frames(120);

        let door = rig.door;
        assert!(door.position.distance(Vec3::new(-0.2, 0.0, 0.0)) < 0.01);
        // The anchored point (2, 0, 0) is still under the cursor.
        let anchor = Vec3::new(2.0, 0.0, 0.0);
        let anchored = door.position + anchor * door.scale;
        assert!(anchored.distance(anchor) < 0.03, "{anchored}");
    }

    #[test]
    fn drag_stays_on_the_pan_plane() {
        let mut rig = Rig::new(
            ManipulationOptions {
                pan_plane_depth: 0.5,
                ..tuning()
            },
            ObjectTransform::at(Vec3::new(0.0, 0.0, 1.0), 0.0),
        );
        rig.camera.eye = Vec3::new(3.0, 2.0, 6.0);
        rig.state.begin_pan(Vec3::new(0.2, -0.1, -0.5));

        for frame in 0..60 {
            let t = frame as f32 / 60.0;
            let pointer = Vec2::new(t.sin() * 0.8, t.cos() * 0.6 - 0.3);
            rig.tick(FRAME, pointer);
            assert_eq!(rig.door.position.z, 0.5, "frame {frame}");
        }
    }

    #[test]
    fn drag_eases_toward_pointer_minus_offset() {
        let mut rig = rig();
        rig.state.begin_pan(Vec3::new(1.0, 0.0, 0.0));
        let pointer = Vec2::new(0.4, 0.0);

        // NDC (0.4, 0) hits world (2, 0, 0); the door origin should head to
        // (1, 0, 0), covering 30% of the distance per frame.
        rig.tick(FRAME, pointer);
        assert!(rig.door.position.distance(Vec3::new(0.3, 0.0, 0.0)) < 1e-3);

        for _ in 0..40 {
            rig.tick(FRAME, pointer);
        }
        assert!(rig.door.position.distance(Vec3::new(1.0, 0.0, 0.0)) < 1e-3);
    }

    #[test]
    fn rotating_accumulates_velocity_into_target() {
        let mut rig = rig();
        rig.state.begin_rotate(0.0, 0.0);
        rig.state.track_rotation(20.0, 0.005);

        rig.frames(3);

        assert!((rig.state.target_rotation_y() - 0.3).abs() < 1e-6);
        assert!(rig.door.yaw > 0.0 && rig.door.yaw < 0.3);
        // Velocity is held, not decayed, while the button is down.
        assert!((rig.state.rotation_velocity() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn coasting_velocity_decays_geometrically() {
        let mut rig = rig();
        rig.state.rotation_velocity = 0.2;

        let mut expected = 0.2_f32;
        for _ in 0..50 {
            rig.frames(1);
            expected *= 0.95;
            let velocity = rig.state.rotation_velocity();
            assert!((velocity - expected).abs() < 1e-6);
        }
        let closed_form = 0.19_f32 * 0.95_f32.powi(49);
        assert!((closed_form - rig.state.rotation_velocity()).abs() < 1e-6);
        // Without coasting enabled the target yaw does not move.
        assert_eq!(rig.state.target_rotation_y(), 0.0);
    }

    #[test]
    fn coasting_spins_the_door_after_release() {
        let mut rig = Rig::new(
            ManipulationOptions {
                coast_on_release: true,
                ..tuning()
            },
            ObjectTransform::default(),
        );
        rig.state.begin_rotate(0.0, 0.0);
        rig.state.track_rotation(40.0, 0.005);
        rig.state.release(true);

        rig.frames(1);
        assert!((rig.state.target_rotation_y() - 0.2).abs() < 1e-6);
        assert!((rig.state.rotation_velocity() - 0.19).abs() < 1e-6);

        rig.frames(1);
        assert!((rig.state.target_rotation_y() - 0.39).abs() < 1e-6);
        assert!((rig.state.rotation_velocity() - 0.1805).abs() < 1e-6);

        let mut previous = rig.state.rotation_velocity();
        for _ in 0..500 {
            rig.frames(1);
            assert!(rig.state.rotation_velocity() <= previous);
            previous = rig.state.rotation_velocity();
        }
        assert!(rig.state.rotation_velocity() <= 0.001);
        // The spin settles: the sum of a geometric series from 0.2 at 0.95.
        assert!(rig.state.target_rotation_y() < 4.0);
    }

    #[test]
    fn tiny_velocity_stops_decaying() {
        let mut rig = rig();
        rig.state.rotation_velocity = 0.0005;
        rig.frames(1);
        assert_eq!(rig.state.rotation_velocity(), 0.0005);
    }

    #[test]
    fn yaw_never_overshoots_on_large_delta() {
        let mut rig = Rig::new(
            ManipulationOptions {
                smooth_rate: 30.0,
                ..tuning()
            },
            ObjectTransform::default(),
        );
        rig.state.target_rotation_y = 1.5;

        rig.tick(0.1, Vec2::ZERO);
        assert_eq!(rig.door.yaw, 1.5);
    }

    #[test]
    fn missing_object_is_a_no_op() {
        let rig = rig();
        let mut state = InteractionState::new(Vec3::ZERO, 0.0, 1.0);
        state.target_scale = 4.0;
        state.rotation_velocity = 0.2;
        let before = state.clone();

        rig.integrator.tick::<_, ObjectTransform>(
            &mut state,
            None,
            &rig.camera,
            FRAME,
            Vec2::ZERO,
        );
        assert_eq!(state, before);
    }
}

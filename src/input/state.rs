use glam::Vec3;

/// Which gesture, if any, currently owns the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveGesture {
    /// No button is held.
    #[default]
    Idle,
    /// Dragging across the pan plane.
    Panning,
    /// Spinning about the vertical axis.
    Rotating,
}

/// Gesture flags, targets and smoothed values shared by the router and
/// the integrator.
///
/// The router writes the gesture flags and targets; the integrator advances
/// `current_scale` and coasting velocity and commits the object transform.
/// Every router operation leaves the record consistent before it returns.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    pub(crate) is_dragging: bool,
    pub(crate) is_rotating: bool,
    /// Grabbed point minus object origin, fixed for one pan gesture.
    pub(crate) drag_offset: Vec3,
    pub(crate) last_pointer_x: f32,
    /// Yaw change per frame while rotating or coasting.
    pub(crate) rotation_velocity: f32,
    pub(crate) target_rotation_y: f32,
    pub(crate) target_scale: f32,
    pub(crate) current_scale: f32,
    pub(crate) target_position: Vec3,
}

impl InteractionState {
    /// Fresh state for an object mounted at `position` with `yaw` and
    /// uniform `scale`.
    #[must_use]
    pub fn new(position: Vec3, yaw: f32, scale: f32) -> Self {
        Self {
            is_dragging: false,
            is_rotating: false,
            drag_offset: Vec3::ZERO,
            last_pointer_x: 0.0,
            rotation_velocity: 0.0,
            target_rotation_y: yaw,
            target_scale: scale,
            current_scale: scale,
            target_position: position,
        }
    }

    /// Gesture that currently owns the pointer.
    #[must_use]
    pub fn active_gesture(&self) -> ActiveGesture {
        if self.is_dragging {
            ActiveGesture::Panning
        } else if self.is_rotating {
            ActiveGesture::Rotating
        } else {
            ActiveGesture::Idle
        }
    }

    /// Whether a pan gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Whether a rotate gesture is active.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.is_rotating
    }

    /// Offset between the grabbed point and the object origin.
    #[must_use]
    pub fn drag_offset(&self) -> Vec3 {
        self.drag_offset
    }

    /// Last pointer X seen during a rotate gesture.
    #[must_use]
    pub fn last_pointer_x(&self) -> f32 {
        self.last_pointer_x
    }

    /// Current yaw velocity.
    #[must_use]
    pub fn rotation_velocity(&self) -> f32 {
        self.rotation_velocity
    }

    /// Yaw the object is easing toward.
    #[must_use]
    pub fn target_rotation_y(&self) -> f32 {
        self.target_rotation_y
    }

    /// Scale the object is easing toward.
    #[must_use]
    pub fn target_scale(&self) -> f32 {
        self.target_scale
    }

    /// Smoothed scale last applied to the object.
    #[must_use]
    pub fn current_scale(&self) -> f32 {
        self.current_scale
    }

    /// Position the zoom is easing toward.
    #[must_use]
    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    /// Start a pan. Any rotate gesture is ended.
    pub(crate) fn begin_pan(&mut self, drag_offset: Vec3) {
        self.is_dragging = true;
        self.is_rotating = false;
        self.rotation_velocity = 0.0;
        self.drag_offset = drag_offset;
    }

    /// Start a rotation from the object's current yaw. Any pan is ended.
    pub(crate) fn begin_rotate(&mut self, pointer_x: f32, yaw: f32) {
        self.is_rotating = true;
        self.is_dragging = false;
        self.rotation_velocity = 0.0;
        self.last_pointer_x = pointer_x;
        self.target_rotation_y = yaw;
    }

    /// Turn horizontal pointer travel since the last move into velocity.
    pub(crate) fn track_rotation(&mut self, pointer_x: f32, gain: f32) {
        let delta_x = pointer_x - self.last_pointer_x;
        self.rotation_velocity = delta_x * gain;
        self.last_pointer_x = pointer_x;
    }

    /// End every gesture. Velocity survives only when coasting.
    pub(crate) fn release(&mut self, coast: bool) {
        self.is_dragging = false;
        self.is_rotating = false;
        if !coast {
            self.rotation_velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle_and_settled() {
        let state = InteractionState::new(Vec3::new(0.0, -1.8, 1.0), 0.3, 1.7);
        assert_eq!(state.active_gesture(), ActiveGesture::Idle);
        assert_eq!(state.target_scale(), state.current_scale());
        assert_eq!(state.target_rotation_y(), 0.3);
        assert_eq!(state.target_position(), Vec3::new(0.0, -1.8, 1.0));
    }

    #[test]
    fn gestures_replace_each_other() {
        let mut state = InteractionState::new(Vec3::ZERO, 0.0, 1.0);
        state.begin_rotate(10.0, 0.5);
        state.track_rotation(30.0, 0.005);
        assert_eq!(state.active_gesture(), ActiveGesture::Rotating);

        state.begin_pan(Vec3::X);
        assert_eq!(state.active_gesture(), ActiveGesture::Panning);
        assert!(!state.is_rotating());
        assert_eq!(state.rotation_velocity(), 0.0);

        state.begin_rotate(0.0, 0.5);
        assert_eq!(state.active_gesture(), ActiveGesture::Rotating);
        assert!(!state.is_dragging());
    }

    #[test]
    fn release_keeps_velocity_only_when_coasting() {
        let mut state = InteractionState::new(Vec3::ZERO, 0.0, 1.0);
        state.begin_rotate(0.0, 0.0);
        state.track_rotation(40.0, 0.005);
        state.release(true);
        assert!((state.rotation_velocity() - 0.2).abs() < 1e-6);

        state.begin_rotate(0.0, 0.0);
        state.track_rotation(40.0, 0.005);
        state.release(false);
        assert_eq!(state.rotation_velocity(), 0.0);
        assert_eq!(state.active_gesture(), ActiveGesture::Idle);
    }
}

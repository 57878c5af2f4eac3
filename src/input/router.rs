//! Routes pointer and wheel events into [`InteractionState`] changes.
//!
//! The router is purely event-driven: it never reads frame time and never
//! writes the object's transform. It only sets gesture flags and targets
//! for the [`TransformIntegrator`](crate::integrator::TransformIntegrator)
//! to chase on the next frame.

use glam::Vec2;

use super::event::{EventResponse, GestureIntent, InputEvent};
use super::state::{ActiveGesture, InteractionState};
use crate::camera::{Plane, ScreenProjector};
use crate::options::{GestureBindings, ManipulationOptions, Options};
use crate::scene::Manipulable;

/// Converts [`InputEvent`]s into [`InteractionState`] mutations.
///
/// # Usage
///
/// ```ignore
/// let response =
///     router.handle_event(&mut state, door.as_ref(), &camera, event);
/// if response.prevent_default {
///     dom_event.prevent_default();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputRouter {
    bindings: GestureBindings,
    manipulation: ManipulationOptions,
    plane: Plane,
}

impl InputRouter {
    /// Create a router from explicit bindings and gesture tuning.
    #[must_use]
    pub fn new(
        bindings: GestureBindings,
        manipulation: ManipulationOptions,
    ) -> Self {
        let plane = Plane::facing_z(manipulation.pan_plane_depth);
        Self {
            bindings,
            manipulation,
            plane,
        }
    }

    /// Create a router from the top-level options.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(options.bindings, options.manipulation.clone())
    }

    /// The plane pan gestures move within.
    #[must_use]
    pub fn plane(&self) -> Plane {
        self.plane
    }

    /// Read-only access to the button bindings.
    #[must_use]
    pub fn bindings(&self) -> &GestureBindings {
        &self.bindings
    }

    /// Which gesture `event` feeds, given the gesture already in progress.
    #[must_use]
    pub fn classify(
        &self,
        state: &InteractionState,
        event: &InputEvent,
    ) -> Option<GestureIntent> {
        match *event {
            InputEvent::PointerDown { button, .. } => {
                self.bindings.intent_for(button)
            }
            InputEvent::PointerMove { .. } => match state.active_gesture() {
                ActiveGesture::Panning => Some(GestureIntent::Pan),
                ActiveGesture::Rotating => Some(GestureIntent::Rotate),
                ActiveGesture::Idle => None,
            },
            InputEvent::PointerUp | InputEvent::PointerCancel => {
                Some(GestureIntent::Release)
            }
            InputEvent::Wheel { .. } => Some(GestureIntent::Zoom),
        }
    }

    /// Apply one event to `state`.
    ///
    /// `object` is `None` until the door is mounted; gesture starts and
    /// zooms are skipped until then.
    pub fn handle_event<P, O>(
        &self,
        state: &mut InteractionState,
        object: Option<&O>,
        projector: &P,
        event: InputEvent,
    ) -> EventResponse
    where
        P: ScreenProjector + ?Sized,
        O: Manipulable + ?Sized,
    {
        match event {
            InputEvent::PointerDown { button, x, y } => {
                match self.bindings.intent_for(button) {
                    Some(GestureIntent::Pan) => self.begin_pan(
                        state,
                        object,
                        projector,
                        Vec2::new(x, y),
                    ),
                    Some(GestureIntent::Rotate) => {
                        Self::begin_rotate(state, object, x)
                    }
                    _ => EventResponse::IGNORED,
                }
            }
            InputEvent::PointerMove { x, .. } => {
                // Drag follows the live pointer in the integrator; only
                // rotation integrates deltas here.
                if !state.is_rotating {
                    return EventResponse::IGNORED;
                }
                state.track_rotation(x, self.manipulation.rotation_gain);
                EventResponse::CONSUMED
            }
            InputEvent::PointerUp | InputEvent::PointerCancel => {
                let ended = state.active_gesture();
                state.release(self.manipulation.coast_on_release);
                if ended == ActiveGesture::Idle {
                    return EventResponse::IGNORED;
                }
                log::debug!("{ended:?} gesture ended");
                EventResponse::CONSUMED
            }
            InputEvent::Wheel { delta_y, x, y } => {
                self.zoom(state, object, projector, delta_y, Vec2::new(x, y))
            }
        }
    }

    fn begin_pan<P, O>(
        &self,
        state: &mut InteractionState,
        object: Option<&O>,
        projector: &P,
        screen: Vec2,
    ) -> EventResponse
    where
        P: ScreenProjector + ?Sized,
        O: Manipulable + ?Sized,
    {
        let Some(object) = object else {
            return EventResponse::IGNORED;
        };
        let Some(hit) = projector.project_screen_to_plane(screen, &self.plane)
        else {
            log::debug!("pan start at {screen} misses the pan plane");
            return EventResponse::IGNORED;
        };

        state.begin_pan(hit - object.position());
        log::debug!("pan started, grabbed {hit}");
        EventResponse::CONSUMED
    }

    fn begin_rotate<O>(
        state: &mut InteractionState,
        object: Option<&O>,
        pointer_x: f32,
    ) -> EventResponse
    where
        O: Manipulable + ?Sized,
    {
        let Some(object) = object else {
            return EventResponse::IGNORED;
        };

        state.begin_rotate(pointer_x, object.yaw());
        log::debug!("rotate started at yaw {}", object.yaw());
        EventResponse::CONSUMED
    }

    /// Step the target scale and move the target position so the world
    /// point under the cursor stays put once the scale settles.
    fn zoom<P, O>(
        &self,
        state: &mut InteractionState,
        object: Option<&O>,
        projector: &P,
        delta_y: f32,
        screen: Vec2,
    ) -> EventResponse
    where
        P: ScreenProjector + ?Sized,
        O: Manipulable + ?Sized,
    {
        let Some(object) = object else {
            return EventResponse {
                consumed: false,
                prevent_default: true,
            };
        };

        let direction = wheel_direction(delta_y);
        state.target_scale = self.manipulation.clamp_scale(
            state.target_scale + direction * self.manipulation.zoom_step,
        );

        if let Some(anchor) =
            projector.project_screen_to_plane(screen, &self.plane)
        {
            let offset = anchor - object.position();
            let scale_factor = state.target_scale / state.current_scale;
            state.target_position = anchor - offset * scale_factor;
        } else {
            // Zoom about the object itself; an anchor from an earlier zoom
            // would pull the door back to where it was.
            state.target_position = object.position();
            log::debug!("zoom at {screen} misses the pan plane, no anchor");
        }

        EventResponse {
            consumed: true,
            prevent_default: true,
        }
    }
}

/// `sign(-delta_y)`, with zero (and NaN) mapping to no change.
fn wheel_direction(delta_y: f32) -> f32 {
    if delta_y > 0.0 {
        -1.0
    } else if delta_y < 0.0 {
        1.0
    } else {
        0.0
    }
}

//! The door controller: one object, one interaction state, two entry
//! points.
//!
//! Hosts feed pointer and wheel events to
//! [`handle_event`](DoorController::handle_event) as they arrive and call
//! [`tick`](DoorController::tick) once per rendered frame. Both take
//! `&mut self`, so calls are serialized by construction.

use glam::{Vec2, Vec3};

use crate::camera::ScreenProjector;
use crate::input::{EventResponse, InputEvent, InputRouter, InteractionState};
use crate::integrator::TransformIntegrator;
use crate::options::Options;
use crate::scene::Manipulable;

/// Drives a single [`Manipulable`] from pointer and wheel input.
///
/// # Lifecycle
///
/// - [`mount`](Self::mount) / [`unmount`](Self::unmount) hand the scene
///   object in and out. Interaction state is created on mount and
///   discarded on unmount.
/// - [`attach`](Self::attach) / [`detach`](Self::detach) bracket the time
///   the host's event listeners are registered. Events are ignored while
///   detached, and detaching cancels any gesture in flight.
///
/// ```ignore
/// let mut controller = DoorController::new(camera, &options);
/// controller.mount(ObjectTransform::at(Vec3::new(0.0, -1.8, 1.0), 0.0));
/// controller.attach();
///
/// // event loop
/// controller.handle_event(event);
/// controller.tick(dt, pointer_ndc);
/// renderer.draw(controller.object().map(ObjectTransform::to_matrix));
/// ```
pub struct DoorController<P, O> {
    router: InputRouter,
    integrator: TransformIntegrator,
    state: InteractionState,
    projector: P,
    object: Option<O>,
    initial_scale: f32,
    attached: bool,
}

impl<P, O> DoorController<P, O>
where
    P: ScreenProjector,
    O: Manipulable,
{
    /// Create a detached controller with nothing mounted.
    #[must_use]
    pub fn new(projector: P, options: &Options) -> Self {
        let initial_scale = options.manipulation.initial_scale;
        Self {
            router: InputRouter::from_options(options),
            integrator: TransformIntegrator::from_options(options),
            state: InteractionState::new(Vec3::ZERO, 0.0, initial_scale),
            projector,
            object: None,
            initial_scale,
            attached: false,
        }
    }

    /// Take ownership of the scene object and start tracking it.
    ///
    /// The object is immediately given the initial scale, and the zoom
    /// target is set to its current position. Any previously mounted
    /// object is returned.
    pub fn mount(&mut self, mut object: O) -> Option<O> {
        object.set_uniform_scale(self.initial_scale);
        self.state = InteractionState::new(
            object.position(),
            object.yaw(),
            self.initial_scale,
        );
        log::info!("door mounted at {}", object.position());
        self.object.replace(object)
    }

    /// Release the scene object and discard interaction state.
    pub fn unmount(&mut self) -> Option<O> {
        let object = self.object.take();
        if object.is_some() {
            self.reset_state();
            log::info!("door unmounted");
        }
        object
    }

    /// Start accepting events. Idempotent.
    pub fn attach(&mut self) {
        if !self.attached {
            self.attached = true;
            log::info!("input listeners attached");
        }
    }

    /// Stop accepting events and cancel any active gesture. Idempotent.
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            let _ = self.router.handle_event(
                &mut self.state,
                self.object.as_ref(),
                &self.projector,
                InputEvent::PointerCancel,
            );
            log::info!("input listeners detached");
        }
    }

    /// Whether events are currently accepted.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Route one input event. Ignored while detached.
    pub fn handle_event(&mut self, event: InputEvent) -> EventResponse {
        if !self.attached {
            return EventResponse::IGNORED;
        }
        self.router.handle_event(
            &mut self.state,
            self.object.as_ref(),
            &self.projector,
            event,
        )
    }

    /// Advance one rendered frame.
    ///
    /// `dt` is the elapsed time in seconds since the previous frame and
    /// `pointer` the cursor in normalized device coordinates.
    pub fn tick(&mut self, dt: f32, pointer: Vec2) {
        self.integrator.tick(
            &mut self.state,
            self.object.as_mut(),
            &self.projector,
            dt,
            pointer,
        );
    }

    /// Shared interaction state (read-only).
    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// The mounted object, if any.
    #[must_use]
    pub fn object(&self) -> Option<&O> {
        self.object.as_ref()
    }

    /// The screen projector.
    #[must_use]
    pub fn projector(&self) -> &P {
        &self.projector
    }

    /// Mutable projector access, e.g. to track a surface resize.
    pub fn projector_mut(&mut self) -> &mut P {
        &mut self.projector
    }

    /// The event router.
    #[must_use]
    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    fn reset_state(&mut self) {
        self.state = InteractionState::new(Vec3::ZERO, 0.0, self.initial_scale);
    }
}

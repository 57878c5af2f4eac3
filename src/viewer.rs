//! Standalone interaction window backed by winit.
//!
//! The viewer owns no renderer. It wires native window events into a
//! [`DoorController`], drives the per-frame tick, and logs the committed
//! transform so the control loop can be exercised and tuned without a
//! scene.
//!
//! ```no_run
//! # use doorkit::Viewer;
//! Viewer::builder()
//!     .with_title("Door")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use glam::{Vec2, Vec3};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    camera::{PerspectiveCamera, ScreenProjector, Viewport},
    error::DoorkitError,
    options::Options,
    util::frame_clock::FrameClock,
    DoorController, InputEvent, MouseButton, ObjectTransform,
};

/// Pixels per wheel line, matching the DOM's line-mode scaling.
const LINE_HEIGHT_PX: f32 = 100.0;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Doorkit", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Doorkit".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that drives a door controller from real input.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), DoorkitError> {
        self.options.validate()?;
        let event_loop =
            EventLoop::new().map_err(|e| DoorkitError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            controller: None,
            clock: FrameClock::new(self.options.manipulation.max_frame_delta),
            cursor: Vec2::ZERO,
            last_logged: None,
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| DoorkitError::Viewer(e.to_string()))
    }
}

// ── Event translation ────────────────────────────────────────────────────

/// Translate a winit window event into a controller event.
///
/// `cursor` is the last known cursor position in physical pixels; winit
/// button and wheel events do not carry one.
#[must_use]
pub fn translate_window_event(
    event: &WindowEvent,
    cursor: Vec2,
) -> Option<InputEvent> {
    match event {
        WindowEvent::MouseInput { state, button, .. } => Some(match state {
            ElementState::Pressed => InputEvent::PointerDown {
                button: MouseButton::from(*button),
                x: cursor.x,
                y: cursor.y,
            },
            ElementState::Released => InputEvent::PointerUp,
        }),
        WindowEvent::CursorMoved { position, .. } => {
            Some(InputEvent::PointerMove {
                x: position.x as f32,
                y: position.y as f32,
            })
        }
        WindowEvent::MouseWheel { delta, .. } => {
            // winit: positive y scrolls up. DOM: positive delta_y scrolls down.
            let delta_y = match delta {
                MouseScrollDelta::LineDelta(_, y) => -y * LINE_HEIGHT_PX,
                MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
            };
            Some(InputEvent::Wheel {
                delta_y,
                x: cursor.x,
                y: cursor.y,
            })
        }
        WindowEvent::Focused(false) => Some(InputEvent::PointerCancel),
        _ => None,
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

type Controller = DoorController<PerspectiveCamera, ObjectTransform>;

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    controller: Option<Controller>,
    clock: FrameClock,
    /// Cursor in physical pixels.
    cursor: Vec2,
    last_logged: Option<ObjectTransform>,
    options: Options,
    title: String,
}

fn viewport_of(size: PhysicalSize<u32>) -> Viewport {
    Viewport::new(size.width as f32, size.height as f32)
}

impl ViewerApp {
    fn build_controller(&self, size: PhysicalSize<u32>) -> Controller {
        let camera =
            PerspectiveCamera::new(&self.options.camera, viewport_of(size));
        let mut controller = DoorController::new(camera, &self.options);
        let placement = &self.options.placement;
        let _ = controller.mount(ObjectTransform::at(
            Vec3::from_array(placement.position),
            placement.yaw,
        ));
        controller.attach();
        controller
    }

    fn redraw(&mut self) {
        let dt = self.clock.tick();
        let Some(controller) = &mut self.controller else {
            return;
        };
        let pointer = controller.projector().viewport().to_ndc(self.cursor);
        controller.tick(dt, pointer);

        if let Some(door) = controller.object().copied() {
            if self.last_logged != Some(door) {
                log::debug!(
                    "door at {} yaw {:.3} scale {:.3} ({:.0} fps)",
                    door.position,
                    door.yaw,
                    door.scale,
                    self.clock.fps()
                );
                self.last_logged = Some(door);
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1024, 768));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        self.controller = Some(self.build_controller(window.inner_size()));
        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            if let Some(controller) = &mut self.controller {
                controller.detach();
                let _ = controller.unmount();
            }
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(size) => {
                if let Some(controller) = &mut self.controller {
                    controller
                        .projector_mut()
                        .resize(size.width as f32, size.height as f32);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }
            event => {
                if let WindowEvent::CursorMoved { position, .. } = &event {
                    self.cursor =
                        Vec2::new(position.x as f32, position.y as f32);
                }
                let Some(input) = translate_window_event(&event, self.cursor)
                else {
                    return;
                };
                if let Some(controller) = &mut self.controller {
                    let _ = controller.handle_event(input);
                }
            }
        }
    }
}

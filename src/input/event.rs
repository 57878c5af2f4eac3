use serde::{Deserialize, Serialize};

/// Platform-agnostic pointer and wheel events.
///
/// Coordinates are in pixels relative to the top-left corner of the
/// interaction surface. These are fed into an
/// [`InputRouter`](super::InputRouter), usually through
/// [`DoorController::handle_event`](crate::DoorController::handle_event).
///
/// # Example
///
/// ```ignore
/// let response = controller.handle_event(InputEvent::Wheel {
///     delta_y: -100.0,
///     x: 320.0,
///     y: 240.0,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pointer button was pressed over the surface.
    PointerDown {
        /// Which button went down.
        button: MouseButton,
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// The pointer moved over the surface.
    PointerMove {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// A pointer button was released anywhere, on or off the surface.
    PointerUp,
    /// The platform cancelled the pointer stream (focus loss, capture loss).
    PointerCancel,
    /// Wheel scrolled over the surface.
    Wheel {
        /// Vertical scroll amount, DOM convention (positive = away from the
        /// user, which zooms out).
        delta_y: f32,
        /// Horizontal cursor position in pixels.
        x: f32,
        /// Vertical cursor position in pixels.
        y: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any other button, by platform index.
    Other(u16),
}

impl MouseButton {
    /// Map a DOM `PointerEvent.button` index.
    #[must_use]
    pub fn from_dom_index(index: i16) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            other => Self::Other(other.unsigned_abs()),
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(index) => Self::Other(index),
        }
    }
}

/// What a gesture event asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureIntent {
    /// Drag the object across the pan plane.
    Pan,
    /// Spin the object about its vertical axis.
    Rotate,
    /// Scale the object around the cursor.
    Zoom,
    /// End whatever gesture is active.
    Release,
}

/// How the host should treat the native event after routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// The event changed interaction state.
    pub consumed: bool,
    /// The host should suppress the platform default (page scroll).
    pub prevent_default: bool,
}

impl EventResponse {
    /// Event was not used.
    pub const IGNORED: Self = Self {
        consumed: false,
        prevent_default: false,
    };
    /// Event updated interaction state.
    pub const CONSUMED: Self = Self {
        consumed: true,
        prevent_default: false,
    };
}

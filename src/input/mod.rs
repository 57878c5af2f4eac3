//! Input handling: event types, the shared interaction state, and the
//! router that converts raw pointer and wheel events into state changes.

/// Platform-agnostic input events.
pub mod event;
/// Routes events into interaction state.
pub mod router;
/// Gesture flags, targets and smoothed values.
pub mod state;

pub use event::{EventResponse, GestureIntent, InputEvent, MouseButton};
pub use router::InputRouter;
pub use state::{ActiveGesture, InteractionState};

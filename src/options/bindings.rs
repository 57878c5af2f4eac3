use serde::{Deserialize, Serialize};

use crate::input::{GestureIntent, MouseButton};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Which pointer button starts which gesture.
///
/// ```toml
/// [bindings]
/// pan_button = "middle"
/// rotate_button = "left"
/// ```
pub struct GestureBindings {
    /// Button that starts a pan (drag on the plane).
    pub pan_button: MouseButton,
    /// Button that starts a yaw rotation.
    pub rotate_button: MouseButton,
}

impl Default for GestureBindings {
    fn default() -> Self {
        Self {
            pan_button: MouseButton::Left,
            rotate_button: MouseButton::Right,
        }
    }
}

impl GestureBindings {
    /// Middle button pans, left button rotates.
    #[must_use]
    pub fn middle_pan() -> Self {
        Self {
            pan_button: MouseButton::Middle,
            rotate_button: MouseButton::Left,
        }
    }

    /// Gesture started by pressing `button`, if it is bound.
    #[must_use]
    pub fn intent_for(&self, button: MouseButton) -> Option<GestureIntent> {
        if button == self.pan_button {
            Some(GestureIntent::Pan)
        } else if button == self.rotate_button {
            Some(GestureIntent::Rotate)
        } else {
            None
        }
    }
}

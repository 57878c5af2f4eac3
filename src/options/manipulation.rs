use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lower zoom bound.
pub const MIN_SCALE: f32 = 1.0;
/// Upper zoom bound.
pub const MAX_SCALE: f32 = 5.0;
/// Scale change per wheel notch.
pub const ZOOM_STEP: f32 = 0.1;
/// Radians of yaw velocity per pixel of horizontal pointer travel.
pub const ROTATION_GAIN: f32 = 0.005;
/// Per-frame multiplier applied to coasting yaw velocity.
pub const ROTATION_DECAY: f32 = 0.95;
/// Exponential approach rate (per second) for scale, position and yaw.
pub const SMOOTH_RATE: f32 = 10.0;
/// Fixed per-frame blend toward the dragged position.
pub const DRAG_BLEND: f32 = 0.3;
/// Ceiling on the frame delta fed to the integrator, in seconds.
pub const MAX_FRAME_DELTA: f32 = 0.1;
/// Convergence threshold for scale and coasting velocity.
pub const EPSILON: f32 = 0.001;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Manipulation", inline)]
#[serde(default)]
/// Tuning for the pan / rotate / zoom gestures and their smoothing.
pub struct ManipulationOptions {
    /// Z of the plane the object is panned within (plane normal is +Z).
    #[schemars(skip)]
    pub pan_plane_depth: f32,
    /// Smallest allowed uniform scale.
    #[schemars(title = "Min Scale", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub min_scale: f32,
    /// Largest allowed uniform scale.
    #[schemars(title = "Max Scale", range(min = 1.0, max = 20.0), extend("step" = 0.5))]
    pub max_scale: f32,
    /// Scale applied to both target and current scale at mount.
    #[schemars(skip)]
    pub initial_scale: f32,
    /// Scale change per wheel notch.
    #[schemars(title = "Zoom Step", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom_step: f32,
    /// Yaw velocity per pixel of horizontal pointer travel.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotation_gain: f32,
    /// Per-frame decay of coasting yaw velocity.
    #[schemars(title = "Rotation Decay", range(min = 0.5, max = 0.999), extend("step" = 0.005))]
    pub rotation_decay: f32,
    /// Exponential approach rate for scale, position and yaw.
    #[schemars(title = "Smoothing", range(min = 1.0, max = 30.0), extend("step" = 0.5))]
    pub smooth_rate: f32,
    /// Per-frame blend toward the dragged position (not time-scaled).
    #[schemars(title = "Drag Blend", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub drag_blend: f32,
    /// Frame delta ceiling in seconds.
    #[schemars(skip)]
    pub max_frame_delta: f32,
    /// Convergence threshold.
    #[schemars(skip)]
    pub epsilon: f32,
    /// Keep spinning after release instead of stopping dead.
    #[schemars(title = "Coast On Release")]
    pub coast_on_release: bool,
}

impl Default for ManipulationOptions {
    fn default() -> Self {
        Self {
            pan_plane_depth: 0.0,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            initial_scale: 1.7,
            zoom_step: ZOOM_STEP,
            rotation_gain: ROTATION_GAIN,
            rotation_decay: ROTATION_DECAY,
            smooth_rate: SMOOTH_RATE,
            drag_blend: DRAG_BLEND,
            max_frame_delta: MAX_FRAME_DELTA,
            epsilon: EPSILON,
            coast_on_release: false,
        }
    }
}

impl ManipulationOptions {
    /// Clamp a scale into `[min_scale, max_scale]`.
    #[must_use]
    ///
    /// Unlike [`f32::clamp`] this never panics: inverted bounds resolve to
    /// `max_scale`, and a NaN bound is ignored.
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.max(self.min_scale).min(self.max_scale)
    }

    /// Describe the first violated constraint, if any.
    pub(crate) fn violation(&self) -> Option<String> {
        let fields = [
            ("pan_plane_depth", self.pan_plane_depth),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("initial_scale", self.initial_scale),
            ("zoom_step", self.zoom_step),
            ("rotation_gain", self.rotation_gain),
            ("rotation_decay", self.rotation_decay),
            ("smooth_rate", self.smooth_rate),
            ("drag_blend", self.drag_blend),
            ("max_frame_delta", self.max_frame_delta),
            ("epsilon", self.epsilon),
        ];
        if let Some((name, value)) =
            fields.iter().find(|(_, value)| !value.is_finite())
        {
            return Some(format!("{name} must be finite, got {value}"));
        }
        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale) {
            return Some(format!(
                "scale bounds [{}, {}] must be positive and ordered",
                self.min_scale, self.max_scale
            ));
        }
        let scales = self.min_scale..=self.max_scale;
        if !scales.contains(&self.initial_scale) {
            return Some(format!(
                "initial_scale {} outside [{}, {}]",
                self.initial_scale, self.min_scale, self.max_scale
            ));
        }
        if !(0.0..1.0).contains(&self.rotation_decay) {
            return Some(format!(
                "rotation_decay {} must be in [0, 1)",
                self.rotation_decay
            ));
        }
        if !(self.drag_blend > 0.0 && self.drag_blend <= 1.0) {
            return Some(format!(
                "drag_blend {} must be in (0, 1]",
                self.drag_blend
            ));
        }
        if self.smooth_rate <= 0.0 || self.max_frame_delta <= 0.0 {
            return Some(
                "smooth_rate and max_frame_delta must be positive".into(),
            );
        }
        if self.zoom_step <= 0.0 || self.epsilon < 0.0 {
            return Some(format!(
                "zoom_step {} must be positive and epsilon {} non-negative",
                self.zoom_step, self.epsilon
            ));
        }
        None
    }
}

//! Interaction options with TOML preset support.
//!
//! Gesture tuning, button bindings, the reference camera and the initial
//! placement are consolidated here. Options serialize to/from TOML for
//! presets stored in `assets/presets/`.

mod bindings;
mod camera;
mod manipulation;
mod placement;

use std::path::Path;

pub use bindings::GestureBindings;
pub use camera::CameraOptions;
pub use manipulation::{
    ManipulationOptions, DRAG_BLEND, EPSILON, MAX_FRAME_DELTA, MAX_SCALE,
    MIN_SCALE, ROTATION_DECAY, ROTATION_GAIN, SMOOTH_RATE, ZOOM_STEP,
};
pub use placement::PlacementOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DoorkitError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[bindings]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Gesture tuning and smoothing.
    pub manipulation: ManipulationOptions,
    /// Pointer button → gesture mapping.
    #[schemars(skip)]
    pub bindings: GestureBindings,
    /// Reference camera for pointer ray casting.
    pub camera: CameraOptions,
    /// Initial placement of the door.
    pub placement: PlacementOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The UI schema as pretty-printed JSON, for host settings panels.
    pub fn schema_json() -> Result<String, DoorkitError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| DoorkitError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, DoorkitError> {
        let content = std::fs::read_to_string(path).map_err(DoorkitError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse and validate options from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, DoorkitError> {
        let opts: Self = toml::from_str(content)
            .map_err(|e| DoorkitError::OptionsParse(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), DoorkitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DoorkitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DoorkitError::Io)?;
        }
        std::fs::write(path, content).map_err(DoorkitError::Io)
    }

    /// Reject option sets the controller cannot honor.
    pub fn validate(&self) -> Result<(), DoorkitError> {
        if let Some(msg) = self.manipulation.violation() {
            return Err(DoorkitError::InvalidOptions(msg));
        }
        if self.bindings.pan_button == self.bindings.rotate_button {
            return Err(DoorkitError::InvalidOptions(format!(
                "pan and rotate are both bound to {:?}",
                self.bindings.pan_button
            )));
        }
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{GestureIntent, MouseButton};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[manipulation]
zoom_step = 0.25
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.manipulation.zoom_step, 0.25);
        // Everything else should be default
        assert_eq!(opts.manipulation.max_scale, MAX_SCALE);
        assert_eq!(opts.bindings, GestureBindings::default());
        assert_eq!(opts.placement.position, [0.0, -1.8, 1.0]);
    }

    #[test]
    fn middle_pan_preset_loads() {
        let preset = include_str!("../../assets/presets/middle_pan.toml");
        let opts = Options::from_toml(preset).unwrap();
        assert_eq!(opts.bindings, GestureBindings::middle_pan());
        assert_eq!(
            opts.bindings.intent_for(MouseButton::Middle),
            Some(GestureIntent::Pan)
        );
        assert_eq!(
            opts.bindings.intent_for(MouseButton::Left),
            Some(GestureIntent::Rotate)
        );
        assert_eq!(opts.bindings.intent_for(MouseButton::Right), None);
    }

    #[test]
    fn inverted_scale_bounds_are_rejected() {
        let toml_str = r"
[manipulation]
min_scale = 4.0
max_scale = 2.0
";
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, DoorkitError::InvalidOptions(_)));
    }

    #[test]
    fn non_finite_tuning_is_rejected() {
        for field in ["max_frame_delta", "smooth_rate", "zoom_step", "epsilon"]
        {
            let toml_str = format!("[manipulation]\n{field} = nan\n");
            let err = Options::from_toml(&toml_str).unwrap_err();
            let rejected = matches!(
                &err,
                DoorkitError::InvalidOptions(msg) if msg.contains(field)
            );
            assert!(rejected, "{field}: {err}");
        }
        let err = Options::from_toml("[manipulation]\nmax_scale = inf\n")
            .unwrap_err();
        assert!(matches!(err, DoorkitError::InvalidOptions(_)));
    }

    #[test]
    fn scale_clamp_tolerates_unvalidated_bounds() {
        let inverted = ManipulationOptions {
            min_scale: 4.0,
            max_scale: 2.0,
            ..ManipulationOptions::default()
        };
        assert_eq!(inverted.clamp_scale(3.0), 2.0);

        let open_low = ManipulationOptions {
            min_scale: f32::NAN,
            ..ManipulationOptions::default()
        };
        assert_eq!(open_low.clamp_scale(0.5), 0.5);
        assert_eq!(open_low.clamp_scale(9.0), MAX_SCALE);
    }

    #[test]
    fn shared_button_is_rejected() {
        let toml_str = r#"
[bindings]
pan_button = "left"
rotate_button = "left"
"#;
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, DoorkitError::InvalidOptions(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err =
            Options::from_toml("[manipulation\nzoom_step = ").unwrap_err();
        assert!(matches!(err, DoorkitError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_through_a_file() {
        let dir = std::env::temp_dir().join(format!(
            "doorkit-options-{}",
            std::process::id()
        ));
        let path = dir.join("tuned.toml");
        let mut opts = Options::default();
        opts.manipulation.coast_on_release = true;
        opts.save(&path).unwrap();

        assert_eq!(Options::load(&path).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["tuned".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("manipulation"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("placement"));
        assert!(!props.contains_key("bindings"));

        let manipulation = &props["manipulation"]["properties"];
        assert!(manipulation.get("zoom_step").is_some());
        assert!(manipulation.get("coast_on_release").is_some());
        assert!(manipulation.get("pan_plane_depth").is_none());
        assert!(manipulation.get("epsilon").is_none());
    }

    #[test]
    fn schema_json_carries_slider_hints() {
        let json = Options::schema_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let manipulation = &value["properties"]["manipulation"];
        let zoom = &manipulation["properties"]["zoom_step"];
        assert_eq!(zoom["title"], "Zoom Step");
        assert_eq!(zoom["step"], 0.01);
    }
}

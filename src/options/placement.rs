use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Placement", inline)]
#[serde(default)]
/// Where the door sits when it is first placed in the scene.
pub struct PlacementOptions {
    /// Initial world position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial yaw in radians.
    #[schemars(title = "Yaw")]
    pub yaw: f32,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            position: [0.0, -1.8, 1.0],
            yaw: 0.0,
        }
    }
}

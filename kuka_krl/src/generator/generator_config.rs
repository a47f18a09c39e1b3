use crate::JointPoint;
use serde::{Deserialize, Serialize};

/// Per-program generator settings written into the fixed header.
///
/// `advance_run` is the controller's `$ADVANCE` look-ahead depth: how many
/// upcoming motion blocks are pre-planned for blending. Small values
/// (1 to 5) are typical. `home_position` is the joint pose the header PTP
/// moves to before the first caller statement.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub advance_run: u8,
    pub home_position: JointPoint,
}

impl GeneratorConfig {
    pub fn new(advance_run: u8, home_position: JointPoint) -> Self {
        Self {
            advance_run,
            home_position,
        }
    }
}

impl Default for GeneratorConfig {
    /// `$ADVANCE = 3` and the upright transport pose
    /// (A2 -90, A3 90, A5 90, everything else 0).
    fn default() -> Self {
        Self {
            advance_run: 3,
            home_position: JointPoint {
                a2: -90.0,
                a3: 90.0,
                a5: 90.0,
                ..JointPoint::default()
            },
        }
    }
}

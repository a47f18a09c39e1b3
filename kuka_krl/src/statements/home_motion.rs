use crate::JointPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Motion back to the program's home pose. Renders the same PTP shape the
/// program header uses: no smoothing token, followed by the fold-closing
/// line and a blank line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HomeMotion {
    #[serde(rename = "Position")]
    pub position: JointPoint,
}

impl HomeMotion {
    pub fn new(position: JointPoint) -> Self {
        Self { position }
    }
}

impl fmt::Display for HomeMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PTP {}\n;ENDFOLD\n\n", self.position)
    }
}

use crate::JointPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-to-point motion to a joint-space target. Joint moves always use
/// exact positioning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JointMotion {
    #[serde(rename = "Position")]
    pub position: JointPoint,
}

impl JointMotion {
    pub fn new(position: JointPoint) -> Self {
        Self { position }
    }
}

impl fmt::Display for JointMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PTP {} C_PTP\n", self.position)
    }
}

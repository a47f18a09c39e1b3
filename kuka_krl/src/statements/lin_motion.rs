use crate::CartesianPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Linear motion to a Cartesian target, always with continuous-path
/// smoothing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LinMotion {
    #[serde(rename = "Position")]
    pub position: CartesianPoint,
}

impl LinMotion {
    pub fn new(position: CartesianPoint) -> Self {
        Self { position }
    }
}

impl fmt::Display for LinMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LIN {} C_DIS\n", self.position)
    }
}

use crate::CartesianPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spline-interpolated linear motion to a Cartesian target.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SlinMotion {
    #[serde(rename = "Position")]
    pub position: CartesianPoint,
}

impl SlinMotion {
    pub fn new(position: CartesianPoint) -> Self {
        Self { position }
    }
}

impl fmt::Display for SlinMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SLIN {} C_DIS\n", self.position)
    }
}

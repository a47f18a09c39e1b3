use crate::{CartesianPoint, Smoothing};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spline-interpolated point-to-point motion with a selectable
/// approximation mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SptpMotion {
    #[serde(rename = "Position")]
    pub position: CartesianPoint,
    #[serde(rename = "Smoothing")]
    pub smoothing: Smoothing,
}

impl SptpMotion {
    pub fn new(position: CartesianPoint, smoothing: Smoothing) -> Self {
        Self {
            position,
            smoothing,
        }
    }
}

impl fmt::Display for SptpMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SPTP {} {}\n", self.position, self.smoothing)
    }
}

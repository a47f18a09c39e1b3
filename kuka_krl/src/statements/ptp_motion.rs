use crate::{CartesianPoint, Smoothing};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point-to-point motion to a Cartesian target with a selectable
/// approximation mode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PtpMotion {
    #[serde(rename = "Position")]
    pub position: CartesianPoint,
    #[serde(rename = "Smoothing")]
    pub smoothing: Smoothing,
}

impl PtpMotion {
    pub fn new(position: CartesianPoint, smoothing: Smoothing) -> Self {
        Self {
            position,
            smoothing,
        }
    }
}

impl fmt::Display for PtpMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PTP {} {}\n", self.position, self.smoothing)
    }
}

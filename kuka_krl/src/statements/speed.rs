use serde::{Deserialize, Serialize};
use std::fmt;

/// Sets the Cartesian path velocity in m/s via the BAS package.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SetLinSpeed {
    #[serde(rename = "Speed")]
    pub speed: f64,
}

impl SetLinSpeed {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }
}

impl fmt::Display for SetLinSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BAS(#VEL_CP, {})\n", self.speed)
    }
}

/// Sets the joint velocity as a percentage of maximum.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SetJointSpeed {
    #[serde(rename = "Speed")]
    pub speed: f64,
}

impl SetJointSpeed {
    pub fn new(speed: f64) -> Self {
        Self { speed }
    }
}

impl fmt::Display for SetJointSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BAS(#VEL_PTP, {})\n", self.speed)
    }
}

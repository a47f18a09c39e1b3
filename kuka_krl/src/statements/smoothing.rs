use serde::{Deserialize, Serialize};
use std::fmt;

/// Sets the continuous-path distance tolerance (`$APO.CDIS`, millimeters)
/// used by `C_DIS` approximation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SetLinSmoothing {
    #[serde(rename = "Distance")]
    pub distance: f64,
}

impl SetLinSmoothing {
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }
}

impl fmt::Display for SetLinSmoothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$APO.CDIS = {}\n", self.distance)
    }
}

/// Sets the per-axis approximation tolerances for PTP motions, one
/// `$APO_DIS_PTP[i]` assignment line per entry, 1-based.
///
/// The conventional shape is 12 entries (6 robot axes + 6 external slots);
/// entry count is not validated. Every entry line is newline-terminated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SetJointSmoothing {
    #[serde(rename = "Tolerances")]
    pub tolerances: Vec<f64>,
}

impl SetJointSmoothing {
    pub fn new(tolerances: Vec<f64>) -> Self {
        Self { tolerances }
    }

    /// The 12-entry all-zero default: no approximation on any axis.
    pub fn zeroed() -> Self {
        Self {
            tolerances: vec![0.0; 12],
        }
    }
}

impl fmt::Display for SetJointSmoothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.tolerances.iter().enumerate() {
            write!(f, "$APO_DIS_PTP[{}] = {}\n", i + 1, val)?;
        }
        Ok(())
    }
}

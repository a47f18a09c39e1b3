use crate::CartesianPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `SPLINE` .. `ENDSPLINE` block interpolating smoothly through an
/// ordered sequence of Cartesian points.
///
/// Each point renders as one indented segment line with continuous-path
/// smoothing. The controller plans the whole block as a single motion, so
/// the points are emitted in exactly the given order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SplineBlock {
    #[serde(rename = "Points")]
    pub points: Vec<CartesianPoint>,
}

impl SplineBlock {
    pub fn new(points: Vec<CartesianPoint>) -> Self {
        Self { points }
    }
}

impl fmt::Display for SplineBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SPLINE\n")?;
        for p in &self.points {
            write!(f, "   {} C_DIS\n", p)?;
        }
        write!(f, "ENDSPLINE\n")
    }
}

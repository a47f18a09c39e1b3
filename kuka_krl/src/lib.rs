use serde::{Deserialize, Serialize};
use std::fmt;

pub mod errors;
pub use errors::*;

pub mod statements;

pub mod program;
pub use program::Statement;

pub mod generator;
pub use generator::*;

/// A Cartesian target pose: position, orientation and up to four external
/// axes (turntables, linear rails).
///
/// Field names follow the KRL aggregate tokens (`X`, `Y`, `Z`, `A`, `B`,
/// `C`, `E1`..`E4`), which is also how the type serializes. No validation
/// is performed; out-of-range angles are rendered verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(default)]
    pub e1: f64,
    #[serde(default)]
    pub e2: f64,
    #[serde(default)]
    pub e3: f64,
    #[serde(default)]
    pub e4: f64,
}

impl fmt::Display for CartesianPoint {
    /// Renders the KRL aggregate literal, e.g.
    /// `{X 100, Y 0, Z 50, A 0, B 0, C 0, E1 0, E2 0, E3 0, E4 0}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{X {}, Y {}, Z {}, A {}, B {}, C {}, E1 {}, E2 {}, E3 {}, E4 {}}}",
            self.x, self.y, self.z, self.a, self.b, self.c, self.e1, self.e2, self.e3, self.e4
        )
    }
}

/// A joint-space target pose: the six robot axes plus up to four external
/// axes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub struct JointPoint {
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
    pub a4: f64,
    pub a5: f64,
    pub a6: f64,
    #[serde(default)]
    pub e1: f64,
    #[serde(default)]
    pub e2: f64,
    #[serde(default)]
    pub e3: f64,
    #[serde(default)]
    pub e4: f64,
}

impl fmt::Display for JointPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{A1 {}, A2 {}, A3 {}, A4 {}, A5 {}, A6 {}, E1 {}, E2 {}, E3 {}, E4 {}}}",
            self.a1, self.a2, self.a3, self.a4, self.a5, self.a6, self.e1, self.e2, self.e3,
            self.e4
        )
    }
}

/// A rigid 6-DOF coordinate-frame offset, used for tool-center-point
/// (`$TOOL`) and workpiece-base (`$BASE`) definitions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{FRAME: X {}, Y {}, Z {}, A {}, B {}, C {}}}",
            self.x, self.y, self.z, self.a, self.b, self.c
        )
    }
}

/// Approximate-positioning mode appended to a motion statement.
///
/// Controls how the controller transitions at the end of a move:
///
/// * `CDis` - continuous-path blending (`C_DIS`): the robot rounds the
///   corner within the configured distance tolerance and keeps moving.
/// * `CPtp` - exact positioning (`C_PTP`): the robot settles on the target
///   pose before the next statement executes.
///
/// `C_DIS` is the default because toolpath output overwhelmingly wants
/// blended corners; use `CPtp` for approach/retract moves where the exact
/// pose matters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Smoothing {
    #[serde(rename = "C_DIS")]
    CDis,
    #[serde(rename = "C_PTP")]
    CPtp,
}

impl Default for Smoothing {
    fn default() -> Self {
        Smoothing::CDis
    }
}

impl fmt::Display for Smoothing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Smoothing::CDis => write!(f, "C_DIS"),
            Smoothing::CPtp => write!(f, "C_PTP"),
        }
    }
}

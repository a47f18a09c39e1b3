use crate::Frame;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assigns the workpiece base frame (`$BASE`) by value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SetBaseFrame {
    #[serde(rename = "Frame")]
    pub frame: Frame,
}

impl SetBaseFrame {
    pub fn new(frame: Frame) -> Self {
        Self { frame }
    }
}

impl fmt::Display for SetBaseFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$BASE = {}\n", self.frame)
    }
}

/// Assigns the tool-center-point frame (`$TOOL`) by value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SetToolFrame {
    #[serde(rename = "Frame")]
    pub frame: Frame,
}

impl SetToolFrame {
    pub fn new(frame: Frame) -> Self {
        Self { frame }
    }
}

impl fmt::Display for SetToolFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$TOOL = {}\n", self.frame)
    }
}

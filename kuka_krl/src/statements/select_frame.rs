use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects a controller-stored base frame by its number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SelectBase {
    #[serde(rename = "BaseNumber")]
    pub base_number: u8,
}

impl SelectBase {
    pub fn new(base_number: u8) -> Self {
        Self { base_number }
    }
}

impl fmt::Display for SelectBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BAS(#BASE, {})\n", self.base_number)
    }
}

/// Selects a controller-stored tool frame by its number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SelectTool {
    #[serde(rename = "ToolNumber")]
    pub tool_number: u8,
}

impl SelectTool {
    pub fn new(tool_number: u8) -> Self {
        Self { tool_number }
    }
}

impl fmt::Display for SelectTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BAS(#TOOL, {})\n", self.tool_number)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Invokes the `Vorfraesen()` pre-milling pass, which cuts an outline of
/// the drilling before the actual process runs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PreMilling;

impl PreMilling {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PreMilling {
    fn default() -> Self {
        Self
    }
}

impl fmt::Display for PreMilling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vorfraesen()\n")
    }
}

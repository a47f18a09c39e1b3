use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic BAS parameter assignment for variables without a dedicated
/// statement. The name is rendered verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SetParameter {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

impl SetParameter {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for SetParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BAS({}, {})\n", self.name, self.value)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pauses program execution for the given number of seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Delay {
    #[serde(rename = "Seconds")]
    pub seconds: f64,
}

impl Delay {
    pub fn new(seconds: f64) -> Self {
        Self { seconds }
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WAIT SEC {}\n", self.seconds)
    }
}

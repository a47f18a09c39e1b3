use serde::{Deserialize, Serialize};
use std::fmt;

/// Assigns a digital output port. Renders the value as the KRL booleans
/// `TRUE` / `FALSE`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SetDigitalOut {
    #[serde(rename = "PortNumber")]
    pub port_number: u16,
    #[serde(rename = "PortValue")]
    pub port_value: bool,
}

impl SetDigitalOut {
    pub fn new(port_number: u16, port_value: bool) -> Self {
        Self {
            port_number,
            port_value,
        }
    }
}

impl fmt::Display for SetDigitalOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if self.port_value { "TRUE" } else { "FALSE" };
        write!(f, "$OUT[{}] = {}\n", self.port_number, value)
    }
}

/// Assigns an analog output port.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SetAnalogOut {
    #[serde(rename = "PortNumber")]
    pub port_number: u16,
    #[serde(rename = "PortValue")]
    pub port_value: f64,
}

impl SetAnalogOut {
    pub fn new(port_number: u16, port_value: f64) -> Self {
        Self {
            port_number,
            port_value,
        }
    }
}

impl fmt::Display for SetAnalogOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$ANOUT[{}] = {}\n", self.port_number, self.port_value)
    }
}

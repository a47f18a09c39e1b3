use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form KRL appended verbatim: no templating, no terminator, no
/// validation of any kind.
///
/// This is the unsafe escape hatch for constructs the structured
/// statements don't cover. The caller owns the syntax, including line
/// terminators.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawKrl {
    #[serde(rename = "Content")]
    pub content: String,
}

impl RawKrl {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl fmt::Display for RawKrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.content)
    }
}

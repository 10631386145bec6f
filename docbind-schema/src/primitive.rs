use std::fmt;

use serde::Deserialize;

/// Generic primitive classification understood by schema compilers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Primitive {
    /// Text values, including opaque binary rendered as text.
    #[serde(rename = "string")]
    Text,
    /// Numeric values.
    #[serde(rename = "number")]
    Number,
}

impl Primitive {
    /// The JSON Schema `type` tag for this classification.
    pub fn schema_tag(&self) -> &'static str {
        match self {
            Primitive::Text => "string",
            Primitive::Number => "number",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_tag())
    }
}

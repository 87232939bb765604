//! Core type definitions for schema representation.

use std::fmt;

use serde::Serialize;

/// Inferred type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// Every data value reads as a float.
    Numeric,
    /// At least one value is text; enumerated by its distinct values.
    Nominal,
}

impl AttributeType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, AttributeType::Numeric)
    }

    /// The keyword used for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::Numeric => "numeric",
            AttributeType::Nominal => "nominal",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Work category value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of a work
///
/// Reference works can be consulted in the library but never borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fiction,
    Technical,
    Reference,
}

impl Category {
    /// Returns true for reference-only works
    pub fn is_reference(self) -> bool {
        matches!(self, Category::Reference)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::Technical => "Technical",
            Category::Reference => "Reference",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fiction" => Ok(Category::Fiction),
            "technical" | "scitech" => Ok(Category::Technical),
            "reference" => Ok(Category::Reference),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

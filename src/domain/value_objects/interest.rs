//! Interest kind value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Event a user can register interest in for a given work
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestKind {
    /// A copy of the work became available again
    Availability,
    /// Someone borrowed the work
    Borrowing,
}

impl InterestKind {
    /// Prefix used when a notification of this kind is rendered
    pub fn label(self) -> &'static str {
        match self {
            InterestKind::Availability => "AVAILABILITY",
            InterestKind::Borrowing => "BORROWING",
        }
    }
}

impl fmt::Display for InterestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

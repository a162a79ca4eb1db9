//! User status value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a user may currently borrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
}

impl UserStatus {
    pub fn is_suspended(self) -> bool {
        matches!(self, UserStatus::Suspended)
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStatus::Active => write!(f, "ACTIVE"),
            UserStatus::Suspended => write!(f, "SUSPENDED"),
        }
    }
}

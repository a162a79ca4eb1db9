//! Library snapshot - the full engine state as plain data
//!
//! A snapshot is what persistence reads and writes. Creators and id
//! counters are not stored; they are rebuilt from the works and users.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Request, User, Work};
use crate::domain::value_objects::{Day, InterestKind, UserId, WorkId};

/// One registered interest of one user in one work
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InterestRecord {
    pub kind: InterestKind,
    pub work: WorkId,
    pub user: UserId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    #[serde(default)]
    pub current_date: Day,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub works: Vec<Work>,
    #[serde(default)]
    pub active_requests: Vec<Request>,
    #[serde(default)]
    pub returned_requests: Vec<Request>,
    #[serde(default)]
    pub interests: Vec<InterestRecord>,
}

impl LibrarySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.works.is_empty() && self.current_date == 0
    }
}

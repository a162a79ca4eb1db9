//! Notification entity

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Day, InterestKind};

/// A message queued on a user, carrying the work as it looked when the
/// event happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    timestamp: Day,
    kind: InterestKind,
    work_snapshot: String,
}

impl Notification {
    pub fn new(timestamp: Day, kind: InterestKind, work_snapshot: impl Into<String>) -> Self {
        Self {
            timestamp,
            kind,
            work_snapshot: work_snapshot.into(),
        }
    }

    pub fn timestamp(&self) -> Day {
        self.timestamp
    }

    pub fn kind(&self) -> InterestKind {
        self.kind
    }

    pub fn work_snapshot(&self) -> &str {
        &self.work_snapshot
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.work_snapshot)
    }
}

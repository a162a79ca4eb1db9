//! Creator entity - an author or director
//!
//! Informational only: borrowing never touches creators.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::WorkId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    name: String,
    works: BTreeSet<WorkId>,
}

impl Creator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            works: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids of the works credited to this creator, ascending
    pub fn works(&self) -> &BTreeSet<WorkId> {
        &self.works
    }

    pub(crate) fn credit(&mut self, work: WorkId) {
        self.works.insert(work);
    }
}

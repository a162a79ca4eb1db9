//! Error types for the library engine
//!
//! Every failure is deterministic given the library state; nothing here is
//! worth retrying.

use thiserror::Error;

use crate::domain::services::{InventoryError, RuleId};
use crate::domain::value_objects::{UserId, WorkId};

/// Result type alias for engine operations
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Main error type for engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("no user with id {0}")]
    NoSuchUser(UserId),

    #[error("no work with id {0}")]
    NoSuchWork(WorkId),

    #[error("no creator named '{0}'")]
    NoSuchCreator(String),

    /// A borrowing rule blocked the request; `rule_id` is its 1-based position
    #[error("user {user_id} cannot borrow work {work_id}: rule {rule_id} failed")]
    BorrowingRuleFailed {
        user_id: UserId,
        work_id: WorkId,
        rule_id: RuleId,
    },

    #[error("work {work_id} is not borrowed by user {user_id}")]
    WorkNotBorrowedByUser { work_id: WorkId, user_id: UserId },

    /// Fine payment attempted with nothing owed
    #[error("user {0} is active and owes nothing")]
    UserIsActive(UserId),

    #[error("could not register user '{name}' <{email}>")]
    UserRegistrationFailed { name: String, email: String },

    #[error("invalid work '{title}': {reason}")]
    InvalidWork { title: String, reason: String },

    #[error("inventory change rejected for work {work_id}: {source}")]
    Inventory {
        work_id: WorkId,
        #[source]
        source: InventoryError,
    },

    #[error("the date can only move forward (got {0} days)")]
    InvalidDateAdvance(u32),

    /// A stored library whose derived fields disagree with its ledger
    #[error("inconsistent library snapshot: {0}")]
    InconsistentSnapshot(String),
}

impl LibraryError {
    /// The failed rule id for borrowing failures
    pub fn rule_id(&self) -> Option<RuleId> {
        match self {
            LibraryError::BorrowingRuleFailed { rule_id, .. } => Some(*rule_id),
            _ => None,
        }
    }
}

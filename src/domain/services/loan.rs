//! Loan duration lookup

use crate::domain::entities::{User, Work};
use crate::domain::value_objects::{CopyTier, Day};

/// Days a loan of `work` to `user` lasts.
///
/// Scarce works go out for shorter periods; the user's tier picks the row.
pub fn duration(user: &User, work: &Work) -> Day {
    user.behavior()
        .loan_days(CopyTier::for_total_copies(work.total_copies()))
}

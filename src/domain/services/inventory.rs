//! Inventory bookkeeping
//!
//! Borrowing and returning move a copy between shelf and borrower, so only
//! the available count changes. Stocking changes total and available
//! together. Either way `available <= total` holds afterwards.

use thiserror::Error;

use crate::domain::entities::Work;

/// Available-copy count before and after a change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryChange {
    pub before: u32,
    pub after: u32,
}

impl InventoryChange {
    /// The work went from no copies on the shelf to at least one
    pub fn became_available(&self) -> bool {
        self.before == 0 && self.after > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("no copy available to lend")]
    NoCopyAvailable,

    #[error("every copy is already on the shelf")]
    AllCopiesOnShelf,

    #[error("cannot remove {requested} copies, only {available} available")]
    NotEnoughInventory { requested: u32, available: u32 },

    #[error("copy count overflow")]
    Overflow,
}

/// Take one copy off the shelf
pub fn check_out(work: &mut Work) -> Result<InventoryChange, InventoryError> {
    let before = work.available_copies();
    let after = before.checked_sub(1).ok_or(InventoryError::NoCopyAvailable)?;
    work.set_copies(work.total_copies(), after);
    Ok(InventoryChange { before, after })
}

/// Put one copy back on the shelf
pub fn check_in(work: &mut Work) -> Result<InventoryChange, InventoryError> {
    let before = work.available_copies();
    if before >= work.total_copies() {
        return Err(InventoryError::AllCopiesOnShelf);
    }
    let after = before + 1;
    work.set_copies(work.total_copies(), after);
    Ok(InventoryChange { before, after })
}

/// Add (positive `delta`) or remove (negative) copies from the collection
pub fn adjust(work: &mut Work, delta: i64) -> Result<InventoryChange, InventoryError> {
    let before = work.available_copies();
    let magnitude = u32::try_from(delta.unsigned_abs()).map_err(|_| InventoryError::Overflow)?;

    let (total, after) = if delta >= 0 {
        let total = work
            .total_copies()
            .checked_add(magnitude)
            .ok_or(InventoryError::Overflow)?;
        let after = before.checked_add(magnitude).ok_or(InventoryError::Overflow)?;
        (total, after)
    } else {
        let after = before
            .checked_sub(magnitude)
            .ok_or(InventoryError::NotEnoughInventory {
                requested: magnitude,
                available: before,
            })?;
        (work.total_copies() - magnitude, after)
    };

    work.set_copies(total, after);
    Ok(InventoryChange { before, after })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewWork;
    use crate::domain::value_objects::{Category, WorkId};

    fn work(copies: u32) -> Work {
        Work::new(
            WorkId::new(1),
            NewWork::book("T", vec!["A".into()], 10, Category::Fiction, "i", copies),
        )
    }

    #[test]
    fn check_out_and_in_move_available_only() {
        let mut w = work(2);
        let change = check_out(&mut w).unwrap();
        assert_eq!((change.before, change.after), (2, 1));
        assert_eq!(w.total_copies(), 2);

        check_out(&mut w).unwrap();
        assert_eq!(check_out(&mut w), Err(InventoryError::NoCopyAvailable));

        let change = check_in(&mut w).unwrap();
        assert!(change.became_available());
        check_in(&mut w).unwrap();
        assert_eq!(check_in(&mut w), Err(InventoryError::AllCopiesOnShelf));
    }

    #[test]
    fn adjust_moves_both_counts() {
        let mut w = work(2);
        check_out(&mut w).unwrap();

        adjust(&mut w, 3).unwrap();
        assert_eq!((w.total_copies(), w.available_copies()), (5, 4));

        adjust(&mut w, -4).unwrap();
        assert_eq!((w.total_copies(), w.available_copies()), (1, 0));
    }

    #[test]
    fn adjust_rejects_removing_borrowed_copies() {
        let mut w = work(2);
        check_out(&mut w).unwrap();

        let err = adjust(&mut w, -2).unwrap_err();
        assert_eq!(
            err,
            InventoryError::NotEnoughInventory {
                requested: 2,
                available: 1
            }
        );
        assert_eq!((w.total_copies(), w.available_copies()), (2, 1));
    }

    #[test]
    fn adjust_reports_zero_to_positive_transition() {
        let mut w = work(1);
        check_out(&mut w).unwrap();
        assert!(adjust(&mut w, 1).unwrap().became_available());
        assert!(!adjust(&mut w, 1).unwrap().became_available());
    }
}

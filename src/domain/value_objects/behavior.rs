//! Behavior Value Object
//!
//! A user's behavioral tier, derived from their return history. Each tier
//! carries a fixed lending policy: how many works may be held at once, how
//! long a loan lasts, and whether expensive works may be borrowed.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Day;

/// Behavioral tier of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    /// Every new user starts here
    #[default]
    Normal,
    /// Five consecutive on-time returns
    Dutiful,
    /// Three consecutive late returns
    Overdue,
}

/// Copy-count tier of a work, used to pick the loan duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTier {
    /// Exactly one copy exists
    Single,
    /// Two to five copies
    Few,
    /// More than five copies
    Many,
}

impl CopyTier {
    /// Classify a work by its total number of copies
    pub fn for_total_copies(total_copies: u32) -> Self {
        match total_copies {
            0 | 1 => CopyTier::Single,
            2..=5 => CopyTier::Few,
            _ => CopyTier::Many,
        }
    }

    fn index(self) -> usize {
        match self {
            CopyTier::Single => 0,
            CopyTier::Few => 1,
            CopyTier::Many => 2,
        }
    }
}

/// Lending policy attached to a behavior tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorPolicy {
    /// Maximum number of simultaneously open requests
    pub max_allowed_works: u32,
    /// Loan duration in days, indexed by `CopyTier`
    pub loan_days: [Day; 3],
    /// Whether works above the price ceiling may be borrowed
    pub can_borrow_expensive: bool,
}

const NORMAL: BehaviorPolicy = BehaviorPolicy {
    max_allowed_works: 3,
    loan_days: [3, 8, 15],
    can_borrow_expensive: false,
};

const DUTIFUL: BehaviorPolicy = BehaviorPolicy {
    max_allowed_works: 5,
    loan_days: [8, 15, 30],
    can_borrow_expensive: true,
};

const OVERDUE: BehaviorPolicy = BehaviorPolicy {
    max_allowed_works: 1,
    loan_days: [2, 2, 2],
    can_borrow_expensive: false,
};

impl Behavior {
    /// The lending policy for this tier
    pub const fn policy(self) -> &'static BehaviorPolicy {
        match self {
            Behavior::Normal => &NORMAL,
            Behavior::Dutiful => &DUTIFUL,
            Behavior::Overdue => &OVERDUE,
        }
    }

    pub fn max_allowed_works(self) -> u32 {
        self.policy().max_allowed_works
    }

    pub fn can_borrow_expensive(self) -> bool {
        self.policy().can_borrow_expensive
    }

    /// Loan duration for a work in the given copy tier
    pub fn loan_days(self, tier: CopyTier) -> Day {
        self.policy().loan_days[tier.index()]
    }

    /// Upper-case label used in user listings
    pub fn label(self) -> &'static str {
        match self {
            Behavior::Normal => "NORMAL",
            Behavior::Dutiful => "DUTIFUL",
            Behavior::Overdue => "OVERDUE",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_normal() {
        assert_eq!(Behavior::default(), Behavior::Normal);
    }

    #[test]
    fn quota_per_tier() {
        assert_eq!(Behavior::Normal.max_allowed_works(), 3);
        assert_eq!(Behavior::Dutiful.max_allowed_works(), 5);
        assert_eq!(Behavior::Overdue.max_allowed_works(), 1);
    }

    #[test]
    fn only_dutiful_borrows_expensive() {
        assert!(Behavior::Dutiful.can_borrow_expensive());
        assert!(!Behavior::Normal.can_borrow_expensive());
        assert!(!Behavior::Overdue.can_borrow_expensive());
    }

    #[test]
    fn copy_tier_boundaries() {
        assert_eq!(CopyTier::for_total_copies(1), CopyTier::Single);
        assert_eq!(CopyTier::for_total_copies(2), CopyTier::Few);
        assert_eq!(CopyTier::for_total_copies(5), CopyTier::Few);
        assert_eq!(CopyTier::for_total_copies(6), CopyTier::Many);
    }

    #[test]
    fn loan_days_table() {
        let tiers = [CopyTier::Single, CopyTier::Few, CopyTier::Many];
        let dutiful: Vec<_> = tiers.iter().map(|t| Behavior::Dutiful.loan_days(*t)).collect();
        let overdue: Vec<_> = tiers.iter().map(|t| Behavior::Overdue.loan_days(*t)).collect();
        let normal: Vec<_> = tiers.iter().map(|t| Behavior::Normal.loan_days(*t)).collect();

        assert_eq!(dutiful, vec![8, 15, 30]);
        assert_eq!(overdue, vec![2, 2, 2]);
        assert_eq!(normal, vec![3, 8, 15]);
    }

    #[test]
    fn serde_lowercase() {
        let behavior: Behavior = serde_json::from_str(r#""dutiful""#).unwrap();
        assert_eq!(behavior, Behavior::Dutiful);
    }
}

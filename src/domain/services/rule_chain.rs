//! Borrowing rule chain
//!
//! The rules are data: an ordered table of `(id, predicate)` pairs evaluated
//! front to back. The first predicate that fails decides the outcome and
//! nothing after it is looked at.

use crate::domain::entities::{User, Work};

/// 1-based position of a rule in the chain. `0` is never a rule id.
pub type RuleId = u8;

/// Works priced above this need a tier that may borrow expensive works
pub const PRICE_CEILING: u32 = 25;

/// A single eligibility predicate
#[derive(Debug, Clone, Copy)]
pub struct BorrowingRule {
    id: RuleId,
    description: &'static str,
    check: fn(&User, &Work) -> bool,
}

impl BorrowingRule {
    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Returns true when `user` may borrow `work` as far as this rule goes
    pub fn allows(&self, user: &User, work: &Work) -> bool {
        (self.check)(user, work)
    }
}

fn not_already_requested(user: &User, work: &Work) -> bool {
    !user.has_requested(work.id())
}

fn not_suspended(user: &User, _: &Work) -> bool {
    !user.is_suspended()
}

fn copy_available(_: &User, work: &Work) -> bool {
    work.is_available()
}

fn under_quota(user: &User, _: &Work) -> bool {
    user.current_requests() < user.behavior().max_allowed_works()
}

fn not_reference(_: &User, work: &Work) -> bool {
    !work.category().is_reference()
}

fn within_price_ceiling(user: &User, work: &Work) -> bool {
    user.behavior().can_borrow_expensive() || work.price() <= PRICE_CEILING
}

static STANDARD_RULES: [BorrowingRule; 6] = [
    BorrowingRule {
        id: 1,
        description: "user already holds this work",
        check: not_already_requested,
    },
    BorrowingRule {
        id: 2,
        description: "user is suspended",
        check: not_suspended,
    },
    BorrowingRule {
        id: 3,
        description: "no copy available",
        check: copy_available,
    },
    BorrowingRule {
        id: 4,
        description: "user reached the request quota",
        check: under_quota,
    },
    BorrowingRule {
        id: 5,
        description: "reference works cannot be borrowed",
        check: not_reference,
    },
    BorrowingRule {
        id: 6,
        description: "work is above the price ceiling",
        check: within_price_ceiling,
    },
];

/// Ordered eligibility rules for a borrow attempt
///
/// Cheap to copy; every chain built with `standard()` shares the same
/// immutable rule table.
#[derive(Debug, Clone, Copy)]
pub struct RuleChain {
    rules: &'static [BorrowingRule],
}

impl RuleChain {
    /// The six library rules, in evaluation order
    pub fn standard() -> Self {
        Self {
            rules: &STANDARD_RULES,
        }
    }

    pub fn rules(&self) -> &[BorrowingRule] {
        self.rules
    }

    /// Look up a rule by id
    pub fn rule(&self, id: RuleId) -> Option<&BorrowingRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// The first rule `user` violates when borrowing `work`, if any
    pub fn first_violation(&self, user: &User, work: &Work) -> Option<&BorrowingRule> {
        self.rules.iter().find(|rule| !rule.allows(user, work))
    }

    /// `0` when eligible, otherwise the id of the first violated rule
    pub fn evaluate(&self, user: &User, work: &Work) -> RuleId {
        self.first_violation(user, work).map_or(0, BorrowingRule::id)
    }
}

impl Default for RuleChain {
    fn default() -> Self {
        Self::standard()
    }
}

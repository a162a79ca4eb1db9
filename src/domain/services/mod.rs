//! Domain Services
//!
//! Stateless (or plain-data) business logic over the entities:
//! - `rule_chain` - Ordered, short-circuiting borrow eligibility checks
//! - `behavior` - Behavior tier state machine driven by return streaks
//! - `fines` - Late-return penalty
//! - `loan` - Loan duration lookup
//! - `inventory` - Copy-count bookkeeping
//! - `interest` - Interest registry and notification fan-out
//! - `search` - Catalogue search by title/creator, category or work type

pub mod behavior;
pub mod fines;
pub mod interest;
pub mod inventory;
pub mod loan;
pub mod rule_chain;
pub mod search;

pub use behavior::ReturnStreak;
pub use fines::FineCalculator;
pub use interest::InterestRegistry;
pub use inventory::{InventoryChange, InventoryError};
pub use rule_chain::{BorrowingRule, RuleChain, RuleId, PRICE_CEILING};
pub use search::SearchField;

//! Domain Value Objects
//!
//! Immutable value types without identity:
//! - `UserId`, `WorkId` - Sequential identifiers handed out by the engine
//! - `Day` - Library calendar day (the engine's only clock)
//! - `Behavior` - Behavioral tier with its lending policy
//! - `UserStatus` - Active or suspended
//! - `Category` - Work category
//! - `InterestKind` - Which event a user wants to hear about

mod behavior;
mod category;
mod ids;
mod interest;
mod status;

pub use behavior::{Behavior, BehaviorPolicy, CopyTier};
pub use category::Category;
pub use ids::{UserId, WorkId};
pub use interest::InterestKind;
pub use status::UserStatus;

/// A day on the library calendar.
///
/// Day 0 is the day the library was created. The engine only ever moves it
/// forward.
pub type Day = u32;

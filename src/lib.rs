//! lendlib - lending library engine
//!
//! Users borrow books and DVDs under an ordered chain of eligibility rules.
//! Late returns are fined, return streaks move users between behavior tiers,
//! and interested users are notified when a work is borrowed or comes back
//! on the shelf.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{LibraryEngine, LibrarySession};
pub use config::{Config, Verbosity};
pub use domain::entities::{LibrarySnapshot, NewWork, Notification, Request, User, Work, WorkKind};
pub use domain::value_objects::{Behavior, Category, Day, InterestKind, UserId, UserStatus, WorkId};
pub use error::{LibraryError, LibraryResult};
pub use infrastructure::JsonSnapshotRepository;

//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `User` - A registered borrower with status, tier, fines and notifications
//! - `Work` - A book or DVD with its copy counts
//! - `Creator` - An author or director, keyed by name
//! - `Request` - A loan, open until returned
//! - `Notification` - A queued availability/borrowing message
//! - `LibrarySnapshot` - Whole-library state for persistence

mod creator;
mod notification;
mod request;
mod snapshot;
mod user;
mod work;

pub use creator::Creator;
pub use notification::Notification;
pub use request::Request;
pub use snapshot::{InterestRecord, LibrarySnapshot};
pub use user::User;
pub use work::{NewWork, Work, WorkKind};

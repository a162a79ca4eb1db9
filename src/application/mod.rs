//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `LibraryEngine` - Owns the library state and runs every operation on it
//! - `LibrarySession` - Load, run, save-if-changed around a snapshot repository
//! - `import` - Apply a parsed directive stream, all-or-nothing

pub mod engine;
pub mod import;
pub mod session;

pub use engine::LibraryEngine;
pub use import::{ImportDirective, ImportError, ImportLine, ImportSummary};
pub use session::{LibrarySession, SessionError};

//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Snapshot persistence (JSON)
//! - `text_import` - Parser for the line-based import format

pub mod repositories;
pub mod text_import;

pub use repositories::JsonSnapshotRepository;

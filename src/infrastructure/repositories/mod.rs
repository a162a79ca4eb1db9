//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_snapshot;

pub use json_snapshot::{JsonSnapshotRepository, FORMAT_VERSION};

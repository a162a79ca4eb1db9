//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON)
//! - Log subscriber setup
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `output` - Command results and their text/JSON renderings
//! - `logging` - tracing subscriber writing to stderr

pub mod cli;
pub mod logging;
pub mod output;

pub use output::{OutputFormat, Report};

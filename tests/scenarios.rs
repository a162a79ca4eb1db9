//! Scenario tests for lendlib.
//!
//! Scenarios walk through complete library workflows, through the engine
//! API and through the command line.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/late_return.rs"]
mod late_return;

#[path = "scenarios/waiting_list.rs"]
mod waiting_list;

#[path = "scenarios/front_desk.rs"]
mod front_desk;

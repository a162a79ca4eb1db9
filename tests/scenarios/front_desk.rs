//! Scenario: Front Desk
//!
//! Journey: a librarian seeds a library from an import file, lends a work,
//! advances the calendar and takes it back late, all from the command line.

use crate::common::*;

/// SCENARIO: init with import, borrow, advance, return with payment
#[test]
fn scenario_front_desk_day() {
    let env = TestEnv::new();
    env.write_project_file("seed.txt", SEED_IMPORT);

    let result = env.run(&["init", "--import", "seed.txt"]).assert_ok();
    assert!(result.stdout.contains("Imported 2 users, 3 works, 0 requests"));
    assert!(env.project_path("library.json").exists());

    let result = env.run(&["request", "borrow", "1", "1"]).assert_ok();
    assert!(result.stdout.contains("return by day 3"), "{}", result.stdout);

    env.run(&["date", "advance", "5"]).assert_ok();
    let user = env.run(&["user", "show", "1", "--json"]).assert_ok().json();
    assert_eq!(user["user"]["status"], "SUSPENDED");

    let result = env.run(&["request", "return", "1", "1", "--pay"]).assert_ok();
    assert!(result.stdout.contains("Fine due: EUR 10"), "{}", result.stdout);
    assert!(result.stdout.contains("Fine paid; user is active"));

    let user = env.run(&["user", "show", "1", "--json"]).assert_ok().json();
    assert_eq!(user["user"]["status"], "ACTIVE");
    assert_eq!(user["user"]["fines"], 0);
}

/// SCENARIO: reference works and expensive works are refused with the rule id
#[test]
fn scenario_front_desk_refusals() {
    let env = TestEnv::new();
    env.write_project_file("seed.txt", SEED_IMPORT);
    env.run(&["init", "--import", "seed.txt"]).assert_ok();

    let result = env.run(&["request", "borrow", "1", "3"]);
    assert!(!result.success);
    assert!(result.stderr.contains("rule 5 failed"), "{}", result.stderr);

    let result = env.run(&["request", "borrow", "1", "2"]);
    assert!(!result.success);
    assert!(result.stderr.contains("rule 6 failed"), "{}", result.stderr);
}

//! Scenario: Late Return
//!
//! Journey: a user borrows the only copy of a book, keeps it past the
//! deadline, is fined and suspended, pays, and can borrow again.

use lendlib::{Behavior, LibraryError, UserStatus};

use crate::common::*;

/// SCENARIO: borrow on day 1, return on day 6, pay, borrow again
#[test]
fn scenario_late_return_fine_and_recovery() {
    let (mut engine, users, work) = engine_with_book(1);
    let user = users[0];

    engine.advance_date(1).unwrap();
    let limit = engine.request_work(user, work).unwrap();
    assert_eq!(limit, 4, "single copy, normal user: 3 days");

    engine.advance_date(5).unwrap();
    assert_eq!(
        engine.user(user).unwrap().status(),
        UserStatus::Suspended,
        "holding an overdue work suspends the user"
    );

    let fine = engine.return_work(user, work).unwrap();
    assert_eq!(fine, 10, "two days late at 5 per day");
    let u = engine.user(user).unwrap();
    assert_eq!(u.fines(), 10);
    assert_eq!(u.status(), UserStatus::Suspended);
    assert_eq!(u.consecutive_late(), 1);
    assert_eq!(u.behavior(), Behavior::Normal);

    let err = engine.request_work(user, work).unwrap_err();
    assert_eq!(err.rule_id(), Some(2), "suspended users cannot borrow");

    assert!(engine.pay_fine(user, 10).unwrap());
    assert_eq!(
        engine.pay_fine(user, 10).unwrap_err(),
        LibraryError::UserIsActive(user)
    );

    engine.request_work(user, work).unwrap();
    assert_eq!(engine.work(work).unwrap().available_copies(), 0);
}

/// SCENARIO: three late returns in a row demote, three on-time returns restore
#[test]
fn scenario_overdue_tier_and_recovery() {
    let (mut engine, users, work) = engine_with_book(1);
    let user = users[0];

    for _ in 0..3 {
        engine.request_work(user, work).unwrap();
        engine.advance_date(10).unwrap();
        let fine = engine.return_work(user, work).unwrap();
        engine.pay_fine(user, fine).unwrap();
    }
    assert_eq!(engine.user(user).unwrap().behavior(), Behavior::Overdue);

    let limit = engine.request_work(user, work).unwrap();
    assert_eq!(limit, engine.current_date() + 2, "overdue users get 2 days");
    engine.return_work(user, work).unwrap();

    for _ in 0..2 {
        engine.request_work(user, work).unwrap();
        engine.return_work(user, work).unwrap();
    }
    assert_eq!(engine.user(user).unwrap().behavior(), Behavior::Normal);
}

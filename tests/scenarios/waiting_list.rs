//! Scenario: Waiting List
//!
//! Journey: two users want the same single-copy book. The second asks to be
//! told when it is back and gets exactly one notification.

use lendlib::InterestKind;

use crate::common::*;

/// SCENARIO: availability notification after the holder returns
#[test]
fn scenario_availability_notification_is_delivered_once() {
    let (mut engine, users, work) = engine_with_book(2);
    let (holder, waiter) = (users[0], users[1]);

    engine.request_work(holder, work).unwrap();
    let err = engine.request_work(waiter, work).unwrap_err();
    assert_eq!(err.rule_id(), Some(3));

    engine.register_availability_interest(waiter, work).unwrap();
    engine.return_work(holder, work).unwrap();

    let notes = engine.drain_notifications(waiter).unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind(), InterestKind::Availability);
    assert!(notes[0].to_string().starts_with("AVAILABILITY: 1 - 1 of 1 - Book - Dune"));
    assert!(engine.drain_notifications(waiter).unwrap().is_empty());

    engine.request_work(waiter, work).unwrap();
    assert!(
        !engine.is_interested(InterestKind::Availability, waiter, work),
        "borrowing clears the borrower's own interest"
    );
}

/// SCENARIO: borrowing interest tells watchers about every loan but the watcher's own
#[test]
fn scenario_borrowing_interest_watches_other_loans() {
    let (mut engine, users, work) = engine_with_book(3);
    let (a, b, watcher) = (users[0], users[1], users[2]);
    engine.change_work_inventory(work, 1).unwrap();
    engine.register_borrowing_interest(watcher, work).unwrap();

    engine.request_work(a, work).unwrap();
    engine.request_work(b, work).unwrap();

    let notes = engine.show_user_notifications(watcher).unwrap();
    assert_eq!(notes.len(), 2);
    assert!(notes.iter().all(|n| n.starts_with("BORROWING: ")));
    assert!(notes[1].contains("0 of 2"));
}

//! Property tests for copy accounting.

use proptest::prelude::*;

use lendlib::{Category, LibraryEngine, NewWork};

fn library(copies: u32, borrowers: u32) -> LibraryEngine {
    let mut engine = LibraryEngine::new();
    engine
        .register_work(NewWork::book(
            "Shared",
            vec!["Author".to_string()],
            10,
            Category::Fiction,
            "isbn",
            copies,
        ))
        .unwrap();
    for i in 0..borrowers {
        engine
            .register_user(&format!("Reader {i}"), &format!("reader{i}@example.org"))
            .unwrap();
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: available never exceeds total, whatever the adjustments.
    #[test]
    fn property_available_never_exceeds_total(
        copies in 1u32..10,
        deltas in prop::collection::vec(-5i32..6, 0..20),
    ) {
        let mut engine = library(copies, 0);
        let work = engine.works()[0].id();

        for delta in deltas {
            let before = engine.work(work).unwrap().clone();
            match engine.change_work_inventory(work, delta) {
                Ok(()) => {
                    let after = engine.work(work).unwrap();
                    prop_assert_eq!(
                        i64::from(after.total_copies()),
                        i64::from(before.total_copies()) + i64::from(delta)
                    );
                }
                Err(_) => prop_assert_eq!(engine.work(work).unwrap(), &before),
            }
            let w = engine.work(work).unwrap();
            prop_assert!(w.available_copies() <= w.total_copies());
        }
    }

    /// PROPERTY: every borrow followed by its return restores the shelf.
    #[test]
    fn property_borrow_then_return_restores_copies(copies in 1u32..6, borrowers in 1u32..6) {
        let mut engine = library(copies, borrowers);
        let work = engine.works()[0].id();
        let users: Vec<_> = engine.users().iter().map(|u| u.id()).collect();

        let mut lent = Vec::new();
        for user in &users {
            if engine.request_work(*user, work).is_ok() {
                lent.push(*user);
            }
        }
        prop_assert_eq!(lent.len() as u32, copies.min(borrowers));
        prop_assert_eq!(engine.work(work).unwrap().available_copies(), copies - lent.len() as u32);

        for user in lent {
            prop_assert_eq!(engine.return_work(user, work).unwrap(), 0);
        }
        let w = engine.work(work).unwrap();
        prop_assert_eq!((w.available_copies(), w.total_copies()), (copies, copies));
        prop_assert!(engine.active_requests().is_empty());
    }
}

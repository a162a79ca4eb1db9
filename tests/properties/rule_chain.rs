//! Property tests for borrow eligibility.
//!
//! Users are driven into random states through the engine itself, then a
//! borrow is attempted. The reported rule must be the first rule in the
//! chain that the state violates, and a refused borrow changes nothing.

use proptest::prelude::*;

use lendlib::domain::services::PRICE_CEILING;
use lendlib::{Category, LibraryEngine, NewWork, UserId, WorkId};

#[derive(Debug, Clone)]
struct Setup {
    already_holds: bool,
    suspended: bool,
    copies_left: bool,
    at_quota: bool,
    category: Category,
    price: u32,
}

fn setup() -> impl Strategy<Value = Setup> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![
            Just(Category::Fiction),
            Just(Category::Technical),
            Just(Category::Reference),
        ],
        0u32..60,
    )
        .prop_map(
            |(already_holds, suspended, copies_left, at_quota, category, price)| Setup {
                already_holds,
                suspended,
                copies_left,
                at_quota,
                category,
                price,
            },
        )
}

fn dvd(title: &str, price: u32, category: Category, copies: u32) -> NewWork {
    NewWork::dvd(title, "Director", price, category, "M/12", copies)
}

/// Build a library where the subject is in the state described by `s`
/// with respect to the target work.
fn build(s: &Setup) -> (LibraryEngine, UserId, WorkId) {
    let mut engine = LibraryEngine::new();
    let user = engine.register_user("Subject", "subject@example.org").unwrap();
    let target = engine.register_work(dvd("Target", s.price, s.category, 2)).unwrap();

    let lendable = s.category != Category::Reference && s.price <= PRICE_CEILING;
    if s.already_holds && lendable {
        engine.request_work(user, target).unwrap();
    }
    if !s.copies_left {
        let on_shelf = engine.work(target).unwrap().available_copies();
        engine.change_work_inventory(target, -(on_shelf as i32)).unwrap();
    }

    // Quota fillers go out before the date moves, while the subject is active
    let quota = 3;
    let wanted = match (s.at_quota, s.suspended) {
        (true, _) => quota,
        (false, true) => engine.user(user).unwrap().current_requests() + 1,
        (false, false) => 0,
    };
    let mut n = 0;
    while engine.user(user).unwrap().current_requests() < wanted {
        let filler = engine
            .register_work(dvd(&format!("Filler {n}"), 1, Category::Fiction, 1))
            .unwrap();
        engine.request_work(user, filler).unwrap();
        n += 1;
    }
    if s.suspended {
        engine.advance_date(30).unwrap();
    }
    (engine, user, target)
}

fn expected_rule(engine: &LibraryEngine, user: UserId, work: WorkId) -> u8 {
    let u = engine.user(user).unwrap();
    let w = engine.work(work).unwrap();
    let violations = [
        u.has_requested(work),
        u.is_suspended(),
        w.available_copies() == 0,
        u.current_requests() >= u.behavior().max_allowed_works(),
        w.category().is_reference(),
        !u.behavior().can_borrow_expensive() && w.price() > PRICE_CEILING,
    ];
    violations
        .iter()
        .position(|&violated| violated)
        .map(|i| i as u8 + 1)
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the reported rule is the first violated one.
    #[test]
    fn property_first_violated_rule_is_reported(s in setup()) {
        let (mut engine, user, work) = build(&s);
        let expected = expected_rule(&engine, user, work);

        match engine.request_work(user, work) {
            Ok(_) => prop_assert_eq!(expected, 0),
            Err(err) => prop_assert_eq!(err.rule_id(), Some(expected)),
        }
    }

    /// PROPERTY: a refused borrow leaves the whole library unchanged.
    #[test]
    fn property_refused_borrow_changes_nothing(s in setup()) {
        let (mut engine, user, work) = build(&s);
        let before = engine.snapshot();

        if engine.request_work(user, work).is_err() {
            prop_assert_eq!(engine.snapshot(), before);
        }
    }
}

//! Test fixtures - reusable import files and library builders.

#![allow(dead_code)]

use lendlib::{Category, LibraryEngine, NewWork, UserId, WorkId};

/// Two users and three works:
/// - work 1: single-copy fiction book, price 10
/// - work 2: three-copy technical DVD, price 30
/// - work 3: reference book
pub const SEED_IMPORT: &str = "\
# users
USER:Ana Lopes:ana@example.org
USER:Rui Costa:rui@example.org

# works
BOOK:Dune:Frank Herbert:10:FICTION:9780441:1
DVD:Rust in Practice:Jo Smith:30:SCITECH:M/6:3
BOOK:Big Dictionary:Many Hands:40:REFERENCE:1111:2
";

/// Engine with `users` users and one single-copy, price-10 fiction book
pub fn engine_with_book(users: u32) -> (LibraryEngine, Vec<UserId>, WorkId) {
    let mut engine = LibraryEngine::new();
    let ids = (1..=users)
        .map(|i| {
            engine
                .register_user(&format!("User {i}"), &format!("user{i}@example.org"))
                .unwrap()
        })
        .collect();
    let work = engine
        .register_work(NewWork::book(
            "Dune",
            vec!["Frank Herbert".to_string()],
            10,
            Category::Fiction,
            "9780441",
            1,
        ))
        .unwrap();
    (engine, ids, work)
}

//! Bulk import
//!
//! A directive stream is applied through the engine's ordinary operations,
//! so imported data passes the same validation as interactive input. The
//! import is all-or-nothing: directives run against a copy of the engine,
//! which replaces the original only when every directive succeeded.

use std::path::PathBuf;

use thiserror::Error;

use crate::application::LibraryEngine;
use crate::domain::entities::NewWork;
use crate::domain::value_objects::{UserId, WorkId};
use crate::error::LibraryError;

/// One line of an import file, already parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDirective {
    User { name: String, email: String },
    Work(NewWork),
    /// Borrow on the current date
    Request { user: UserId, work: WorkId },
}

/// A directive together with the 1-based line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLine {
    pub line: usize,
    pub directive: ImportDirective,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read import file {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: LibraryError,
    },
}

impl ImportError {
    /// Line the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            ImportError::Io { .. } => None,
            ImportError::Parse { line, .. } | ImportError::Rejected { line, .. } => Some(*line),
        }
    }
}

/// Counts of what an import added
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub users: usize,
    pub works: usize,
    pub requests: usize,
}

impl ImportSummary {
    pub fn total(&self) -> usize {
        self.users + self.works + self.requests
    }
}

/// Apply `lines` to `engine`. On error the engine is left untouched.
pub fn apply(
    engine: &mut LibraryEngine,
    lines: impl IntoIterator<Item = ImportLine>,
) -> Result<ImportSummary, ImportError> {
    let mut staged = engine.clone();
    let mut summary = ImportSummary::default();

    for ImportLine { line, directive } in lines {
        let rejected = |source| ImportError::Rejected { line, source };
        match directive {
            ImportDirective::User { name, email } => {
                staged.register_user(&name, &email).map_err(rejected)?;
                summary.users += 1;
            }
            ImportDirective::Work(spec) => {
                staged.register_work(spec).map_err(rejected)?;
                summary.works += 1;
            }
            ImportDirective::Request { user, work } => {
                staged.request_work(user, work).map_err(rejected)?;
                summary.requests += 1;
            }
        }
    }

    *engine = staged;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Category;

    fn at(line: usize, directive: ImportDirective) -> ImportLine {
        ImportLine { line, directive }
    }

    fn user(name: &str, email: &str) -> ImportDirective {
        ImportDirective::User {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    fn dvd(title: &str, copies: u32) -> ImportDirective {
        ImportDirective::Work(NewWork::dvd(
            title,
            "Director",
            10,
            Category::Fiction,
            "M/12",
            copies,
        ))
    }

    #[test]
    fn applies_directives_in_order() {
        let mut engine = LibraryEngine::new();
        let summary = apply(
            &mut engine,
            vec![
                at(1, user("Ana", "ana@example.org")),
                at(2, dvd("Vertigo", 2)),
                at(3, ImportDirective::Request {
                    user: UserId::new(1),
                    work: WorkId::new(1),
                }),
            ],
        )
        .unwrap();

        assert_eq!(
            summary,
            ImportSummary {
                users: 1,
                works: 1,
                requests: 1
            }
        );
        assert_eq!(summary.total(), 3);
        assert_eq!(engine.work(WorkId::new(1)).unwrap().available_copies(), 1);
    }

    #[test]
    fn failure_leaves_engine_untouched() {
        let mut engine = LibraryEngine::new();
        engine.register_user("Ana", "ana@example.org").unwrap();
        let before = engine.snapshot();

        let err = apply(
            &mut engine,
            vec![
                at(1, dvd("Vertigo", 1)),
                at(4, user("Other Ana", "ana@example.org")),
            ],
        )
        .unwrap_err();

        assert_eq!(err.line(), Some(4));
        assert!(matches!(
            err,
            ImportError::Rejected {
                source: LibraryError::UserRegistrationFailed { .. },
                ..
            }
        ));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn request_goes_through_rule_chain() {
        let mut engine = LibraryEngine::new();
        let err = apply(
            &mut engine,
            vec![
                at(1, user("Ana", "ana@example.org")),
                at(2, dvd("Vertigo", 1)),
                at(3, ImportDirective::Request {
                    user: UserId::new(1),
                    work: WorkId::new(1),
                }),
                at(4, ImportDirective::Request {
                    user: UserId::new(1),
                    work: WorkId::new(1),
                }),
            ],
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "line 4: user 1 cannot borrow work 1: rule 1 failed");
    }
}

//! Work entity - a catalogued book or DVD
//!
//! Creators are referenced by name only. The engine keeps the reverse
//! association (creator -> works) in its own creator map.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Category, WorkId};

/// Type-specific details of a work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkKind {
    Book { isbn: String, authors: Vec<String> },
    Dvd { igac: String, director: String },
}

impl WorkKind {
    pub fn label(&self) -> &'static str {
        match self {
            WorkKind::Book { .. } => "Book",
            WorkKind::Dvd { .. } => "DVD",
        }
    }

    /// Names of every creator credited on this work
    pub fn creators(&self) -> Vec<&str> {
        match self {
            WorkKind::Book { authors, .. } => authors.iter().map(String::as_str).collect(),
            WorkKind::Dvd { director, .. } => vec![director.as_str()],
        }
    }
}

/// Everything needed to catalogue a new work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWork {
    pub title: String,
    pub price: u32,
    pub category: Category,
    pub copies: u32,
    pub kind: WorkKind,
}

impl NewWork {
    pub fn book(
        title: impl Into<String>,
        authors: Vec<String>,
        price: u32,
        category: Category,
        isbn: impl Into<String>,
        copies: u32,
    ) -> Self {
        Self {
            title: title.into(),
            price,
            category,
            copies,
            kind: WorkKind::Book {
                isbn: isbn.into(),
                authors,
            },
        }
    }

    pub fn dvd(
        title: impl Into<String>,
        director: impl Into<String>,
        price: u32,
        category: Category,
        igac: impl Into<String>,
        copies: u32,
    ) -> Self {
        Self {
            title: title.into(),
            price,
            category,
            copies,
            kind: WorkKind::Dvd {
                igac: igac.into(),
                director: director.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    id: WorkId,
    title: String,
    price: u32,
    category: Category,
    kind: WorkKind,
    total_copies: u32,
    available_copies: u32,
}

impl Work {
    /// Catalogue a work with every copy on the shelf
    pub fn new(id: WorkId, spec: NewWork) -> Self {
        Self {
            id,
            title: spec.title,
            price: spec.price,
            category: spec.category,
            kind: spec.kind,
            total_copies: spec.copies,
            available_copies: spec.copies,
        }
    }

    pub fn id(&self) -> WorkId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn kind(&self) -> &WorkKind {
        &self.kind
    }

    pub fn creators(&self) -> Vec<&str> {
        self.kind.creators()
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    pub(crate) fn set_copies(&mut self, total: u32, available: u32) {
        debug_assert!(available <= total);
        self.total_copies = total;
        self.available_copies = available;
    }
}

impl fmt::Display for Work {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} of {} - {} - {} - {} - {}",
            self.id,
            self.available_copies,
            self.total_copies,
            self.kind.label(),
            self.title,
            self.price,
            self.category
        )?;
        match &self.kind {
            WorkKind::Book { isbn, authors } => write!(f, " - {} - {}", authors.join("; "), isbn),
            WorkKind::Dvd { igac, director } => write!(f, " - {} - {}", director, igac),
        }
    }
}

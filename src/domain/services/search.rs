//! Catalogue search
//!
//! Every field is a case-insensitive substring match. The default field
//! looks at the title and every creator name.

use std::fmt;
use std::str::FromStr;

use crate::domain::entities::Work;

/// Which part of a work a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    /// Title or any creator
    #[default]
    Any,
    Title,
    Creator,
    Category,
    /// Book or DVD
    Type,
}

impl SearchField {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Any => "any",
            SearchField::Title => "title",
            SearchField::Creator => "creator",
            SearchField::Category => "category",
            SearchField::Type => "type",
        }
    }

    /// Whether `work` matches an already lowercased `needle`
    fn matches(self, work: &Work, needle: &str) -> bool {
        let has = |text: &str| text.to_lowercase().contains(needle);
        match self {
            SearchField::Any => {
                SearchField::Title.matches(work, needle)
                    || SearchField::Creator.matches(work, needle)
            }
            SearchField::Title => has(work.title()),
            SearchField::Creator => work.creators().iter().any(|creator| has(*creator)),
            SearchField::Category => has(work.category().as_str()),
            SearchField::Type => has(work.kind().label()),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "any" => Ok(SearchField::Any),
            "title" => Ok(SearchField::Title),
            "creator" | "author" | "director" => Ok(SearchField::Creator),
            "category" => Ok(SearchField::Category),
            "type" | "kind" => Ok(SearchField::Type),
            other => Err(format!(
                "unknown search field '{}' (expected any, title, creator, category or type)",
                other
            )),
        }
    }
}

/// Works matching `term` on the title or a creator, in the order given
pub fn search<'a>(works: impl IntoIterator<Item = &'a Work>, term: &str) -> Vec<&'a Work> {
    search_by(works, SearchField::Any, term)
}

/// Works whose `field` matches `term`, in the order given
pub fn search_by<'a>(
    works: impl IntoIterator<Item = &'a Work>,
    field: SearchField,
    term: &str,
) -> Vec<&'a Work> {
    let needle = term.to_lowercase();
    works
        .into_iter()
        .filter(|work| field.matches(work, &needle))
        .collect()
}

//! Text import format
//!
//! One directive per line, fields separated by `:`. Blank lines and lines
//! starting with `#` are skipped.
//!
//! ```text
//! USER:name:email
//! BOOK:title:author1,author2:price:category:isbn:copies
//! DVD:title:director:price:category:igac:copies
//! REQUEST:userId:workId
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::application::import::{ImportDirective, ImportError, ImportLine};
use crate::domain::entities::NewWork;
use crate::domain::value_objects::{Category, UserId, WorkId};

/// Read and parse an import file
pub fn read_import_file(path: &Path) -> Result<Vec<ImportLine>, ImportError> {
    let content = fs::read_to_string(path).map_err(|e| ImportError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse(&content)
}

/// Parse every directive in `content`, stopping at the first bad line
pub fn parse(content: &str) -> Result<Vec<ImportLine>, ImportError> {
    content
        .lines()
        .enumerate()
        .map(|(index, raw)| (index + 1, raw.trim()))
        .filter(|(_, raw)| !raw.is_empty() && !raw.starts_with('#'))
        .map(|(line, raw)| {
            parse_line(raw)
                .map(|directive| ImportLine { line, directive })
                .map_err(|message| ImportError::Parse { line, message })
        })
        .collect()
}

fn parse_line(raw: &str) -> Result<ImportDirective, String> {
    let fields: Vec<&str> = raw.split(':').map(str::trim).collect();
    let (tag, args) = fields
        .split_first()
        .ok_or_else(|| "empty directive".to_string())?;

    match tag.to_ascii_uppercase().as_str() {
        "USER" => {
            let [name, email] = expect_fields::<2>(tag, args)?;
            Ok(ImportDirective::User {
                name: name.to_string(),
                email: email.to_string(),
            })
        }
        "BOOK" => {
            let [title, authors, price, category, isbn, copies] = expect_fields::<6>(tag, args)?;
            let authors = authors
                .split(',')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>();
            if authors.is_empty() {
                return Err("BOOK needs at least one author".to_string());
            }
            Ok(ImportDirective::Work(NewWork::book(
                title,
                authors,
                number(price, "price")?,
                category_of(category)?,
                isbn,
                number(copies, "copies")?,
            )))
        }
        "DVD" => {
            let [title, director, price, category, igac, copies] = expect_fields::<6>(tag, args)?;
            Ok(ImportDirective::Work(NewWork::dvd(
                title,
                director,
                number(price, "price")?,
                category_of(category)?,
                igac,
                number(copies, "copies")?,
            )))
        }
        "REQUEST" => {
            let [user, work] = expect_fields::<2>(tag, args)?;
            Ok(ImportDirective::Request {
                user: UserId::new(number(user, "user id")?),
                work: WorkId::new(number(work, "work id")?),
            })
        }
        other => Err(format!("unknown directive '{other}'")),
    }
}

fn expect_fields<'a, const N: usize>(tag: &str, args: &[&'a str]) -> Result<[&'a str; N], String> {
    <[&str; N]>::try_from(args)
        .map_err(|_| format!("{tag} expects {N} fields, found {}", args.len()))
}

fn number<T: FromStr>(value: &str, what: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("invalid {what} '{value}'"))
}

fn category_of(value: &str) -> Result<Category, String> {
    Category::from_str(value)
}

//! CLI Argument Parsing
//!
//! Global flags (--library, --json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::services::SearchField;
use crate::domain::value_objects::Category;

/// lendlib - lending library manager
#[derive(Parser, Debug)]
#[command(name = "lendlib")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Library file (overrides config and LENDLIB_SNAPSHOT)
    #[arg(long, global = true, value_name = "PATH")]
    pub library: Option<PathBuf>,

    /// Output JSON objects instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create an empty library, optionally seeded from an import file
    Init {
        /// Import file to apply to the new library
        #[arg(long, value_name = "FILE")]
        import: Option<PathBuf>,

        /// Replace an existing library
        #[arg(short, long)]
        force: bool,
    },

    /// Apply an import file to the library
    Import {
        file: PathBuf,
    },

    /// Show or move the library calendar
    Date {
        #[command(subcommand)]
        action: DateCommand,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Manage the catalogue
    Work {
        #[command(subcommand)]
        action: WorkCommand,
    },

    /// Borrow and return works
    Request {
        #[command(subcommand)]
        action: RequestCommand,
    },

    /// Register interest in a work
    Interest {
        #[command(subcommand)]
        action: InterestCommand,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum DateCommand {
    /// Print the current date
    Show,
    /// Move the date forward
    Advance { days: u32 },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum UserCommand {
    /// Register a new user
    Register { name: String, email: String },
    /// Show one user
    Show { id: u32 },
    /// List all users
    List,
    /// Print and clear a user's notifications
    Notifications { id: u32 },
    /// Pay a suspended user's fines
    PayFine {
        id: u32,
        /// Amount collected (defaults to the full balance)
        #[arg(long)]
        amount: Option<u32>,
    },
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct WorkFields {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub price: u32,
    /// fiction, technical (or scitech), reference
    #[arg(long)]
    pub category: Category,
    #[arg(long, default_value_t = 1)]
    pub copies: u32,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum WorkCommand {
    /// Catalogue a book
    AddBook {
        #[command(flatten)]
        fields: WorkFields,
        /// Author name (repeat for several authors)
        #[arg(long = "author", required = true)]
        authors: Vec<String>,
        #[arg(long)]
        isbn: String,
    },
    /// Catalogue a DVD
    AddDvd {
        #[command(flatten)]
        fields: WorkFields,
        #[arg(long)]
        director: String,
        #[arg(long)]
        igac: String,
    },
    /// Show one work
    Show { id: u32 },
    /// List all works
    List,
    /// List works by an author or director
    ByCreator { name: String },
    /// Search works; titles and creators unless `--by` says otherwise
    Search {
        term: String,
        /// Field to match: any, title, creator, category, type
        #[arg(long, default_value_t = SearchField::Any)]
        by: SearchField,
    },
    /// Add (positive) or remove (negative) copies
    Inventory {
        id: u32,
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum RequestCommand {
    /// Borrow a work today
    Borrow {
        user: u32,
        work: u32,
        /// If no copy is available, ask to be notified when one is
        #[arg(long)]
        notify: bool,
    },
    /// Return a borrowed work today
    Return {
        user: u32,
        work: u32,
        /// Pay any fine straight away
        #[arg(long)]
        pay: bool,
    },
    /// List open requests
    List,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum InterestCommand {
    /// Be notified when the work is back on the shelf
    Availability { user: u32, work: u32 },
    /// Be notified whenever someone borrows the work
    Borrowing { user: u32, work: u32 },
}

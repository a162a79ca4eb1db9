//! Command handlers
//!
//! One module per command group. Each handler loads the library through the
//! session, runs engine operations, saves if anything changed, and returns a
//! `Report` for `main` to print.

mod library;
mod requests;
mod users;
mod works;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use lendlib::application::{LibraryEngine, LibrarySession};
use lendlib::domain::value_objects::{UserId, WorkId};
use lendlib::infrastructure::JsonSnapshotRepository;
use lendlib::presentation::cli::Commands;
use lendlib::presentation::{OutputFormat, Report};

/// Everything a handler needs besides its own arguments
pub struct Context {
    pub session: LibrarySession<JsonSnapshotRepository>,
    pub format: OutputFormat,
    /// Whether questions may be asked on the terminal
    pub interactive: bool,
    /// Import file from config, used by `init` when none is given
    pub default_import: Option<PathBuf>,
}

impl Context {
    /// Open the library, run `f`, and save if the engine changed
    pub fn with_engine<T>(&self, f: impl FnOnce(&mut LibraryEngine) -> Result<T>) -> Result<T> {
        let mut engine = self
            .session
            .open()
            .with_context(|| format!("failed to open {}", self.session.path().display()))?;
        let out = f(&mut engine)?;
        self.session
            .commit(&mut engine)
            .with_context(|| format!("failed to save {}", self.session.path().display()))?;
        Ok(out)
    }

    /// Ask a yes/no question. Always "no" when not interactive.
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        if !self.interactive {
            return Ok(false);
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("failed to read answer")
    }
}

pub fn dispatch(ctx: &Context, command: Commands) -> Result<Report> {
    match command {
        Commands::Init { import, force } => library::cmd_init(ctx, import, force),
        Commands::Import { file } => library::cmd_import(ctx, &file),
        Commands::Date { action } => library::cmd_date(ctx, action),
        Commands::User { action } => users::cmd_user(ctx, action),
        Commands::Work { action } => works::cmd_work(ctx, action),
        Commands::Request { action } => requests::cmd_request(ctx, action),
        Commands::Interest { action } => requests::cmd_interest(ctx, action),
    }
}

fn user_id(raw: u32) -> UserId {
    UserId::new(raw)
}

fn work_id(raw: u32) -> WorkId {
    WorkId::new(raw)
}

//! Library-wide commands: init, import, date

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use serde_json::json;

use lendlib::application::{import, ImportSummary, LibraryEngine};
use lendlib::infrastructure::text_import;
use lendlib::presentation::cli::DateCommand;
use lendlib::presentation::Report;

use super::Context;

pub fn cmd_init(ctx: &Context, import_file: Option<PathBuf>, force: bool) -> Result<Report> {
    let path = ctx.session.path();
    if ctx.session.exists() && !force {
        bail!(
            "a library already exists at {}. Use --force to replace it.",
            path.display()
        );
    }

    let mut engine = LibraryEngine::new();
    let import_file = import_file.or_else(|| ctx.default_import.clone());
    let summary = match &import_file {
        Some(file) => apply_file(&mut engine, file)?,
        None => ImportSummary::default(),
    };

    ctx.session
        .save(&mut engine)
        .with_context(|| format!("failed to save {}", path.display()))?;
    tracing::info!(path = %path.display(), "initialized library");

    let mut lines = vec![format!("Created library at {}", path.display())];
    if import_file.is_some() {
        lines.push(summary_line(&summary));
    }
    Ok(Report::new(
        lines,
        json!({
            "event": "init",
            "path": path.display().to_string(),
            "imported": summary_json(&summary),
        }),
    ))
}

pub fn cmd_import(ctx: &Context, file: &Path) -> Result<Report> {
    let summary = ctx.with_engine(|engine| apply_file(engine, file))?;
    Ok(Report::line(
        summary_line(&summary),
        json!({
            "event": "import",
            "file": file.display().to_string(),
            "imported": summary_json(&summary),
        }),
    ))
}

fn apply_file(engine: &mut LibraryEngine, file: &Path) -> Result<ImportSummary> {
    let lines = text_import::read_import_file(file)?;
    tracing::debug!(file = %file.display(), directives = lines.len(), "parsed import file");
    let summary = import::apply(engine, lines)
        .with_context(|| format!("import of {} failed", file.display()))?;
    tracing::info!(
        users = summary.users,
        works = summary.works,
        requests = summary.requests,
        "import applied"
    );
    Ok(summary)
}

fn summary_line(summary: &ImportSummary) -> String {
    format!(
        "Imported {} users, {} works, {} requests",
        summary.users, summary.works, summary.requests
    )
}

fn summary_json(summary: &ImportSummary) -> serde_json::Value {
    json!({
        "users": summary.users,
        "works": summary.works,
        "requests": summary.requests,
    })
}

pub fn cmd_date(ctx: &Context, action: DateCommand) -> Result<Report> {
    match action {
        DateCommand::Show => {
            let date = ctx.with_engine(|engine| Ok(engine.current_date()))?;
            Ok(Report::line(
                format!("Current date: {}", date),
                json!({ "event": "date", "date": date }),
            ))
        }
        DateCommand::Advance { days } => {
            let (date, suspended) = ctx.with_engine(|engine| {
                let date = engine.advance_date(days)?;
                let suspended = engine.users().iter().filter(|u| u.is_suspended()).count();
                Ok((date, suspended))
            })?;
            tracing::info!(days, date, suspended, "advanced date");
            Ok(Report::line(
                format!("Current date: {}", date),
                json!({ "event": "date_advanced", "date": date, "suspended_users": suspended }),
            ))
        }
    }
}

//! Catalogue commands

use anyhow::Result;
use serde_json::{json, Value};

use lendlib::domain::entities::{NewWork, Work};
use lendlib::presentation::cli::{WorkCommand, WorkFields};
use lendlib::presentation::output::work_json;
use lendlib::presentation::Report;

use super::{work_id, Context};

pub fn cmd_work(ctx: &Context, action: WorkCommand) -> Result<Report> {
    match action {
        WorkCommand::AddBook {
            fields,
            authors,
            isbn,
        } => {
            let WorkFields {
                title,
                price,
                category,
                copies,
            } = fields;
            add(ctx, NewWork::book(title, authors, price, category, isbn, copies))
        }
        WorkCommand::AddDvd {
            fields,
            director,
            igac,
        } => {
            let WorkFields {
                title,
                price,
                category,
                copies,
            } = fields;
            add(ctx, NewWork::dvd(title, director, price, category, igac, copies))
        }
        WorkCommand::Show { id } => ctx.with_engine(|engine| {
            let work = engine.work(work_id(id))?;
            Ok(Report::line(work.to_string(), json!({ "work": work_json(work) })))
        }),
        WorkCommand::List => ctx.with_engine(|engine| Ok(listing(&engine.works()))),
        WorkCommand::ByCreator { name } => {
            ctx.with_engine(|engine| Ok(listing(&engine.works_by_creator(&name)?)))
        }
        WorkCommand::Search { term, by } => {
            ctx.with_engine(|engine| Ok(listing(&engine.search_works_by(by, &term))))
        }
        WorkCommand::Inventory { id, delta } => ctx.with_engine(|engine| {
            let id = work_id(id);
            engine.change_work_inventory(id, delta)?;
            let work = engine.work(id)?;
            tracing::info!(work = %id, delta, total = work.total_copies(), "inventory changed");
            Ok(Report::line(
                work.to_string(),
                json!({ "event": "inventory_changed", "delta": delta, "work": work_json(work) }),
            ))
        }),
    }
}

fn add(ctx: &Context, spec: NewWork) -> Result<Report> {
    ctx.with_engine(|engine| {
        let id = engine.register_work(spec)?;
        tracing::info!(work = %id, "registered work");
        let work = engine.work(id)?;
        Ok(Report::line(
            format!("Registered work {}", id),
            json!({ "event": "work_registered", "work": work_json(work) }),
        ))
    })
}

fn listing(works: &[&Work]) -> Report {
    Report::new(
        works.iter().map(|w| w.to_string()).collect(),
        json!({ "works": works.iter().map(|w| work_json(w)).collect::<Vec<Value>>() }),
    )
}

//! Borrow, return and interest commands

use anyhow::Result;
use serde_json::json;

use lendlib::application::LibraryEngine;
use lendlib::domain::value_objects::{InterestKind, UserId, WorkId};
use lendlib::presentation::cli::{InterestCommand, RequestCommand};
use lendlib::presentation::output::request_json;
use lendlib::presentation::Report;
use lendlib::LibraryError;

use super::{user_id, work_id, Context};

/// Rule that fails when no copy is on the shelf
const NO_COPY_RULE: u8 = 3;

pub fn cmd_request(ctx: &Context, action: RequestCommand) -> Result<Report> {
    match action {
        RequestCommand::Borrow { user, work, notify } => {
            borrow(ctx, user_id(user), work_id(work), notify)
        }
        RequestCommand::Return { user, work, pay } => {
            give_back(ctx, user_id(user), work_id(work), pay)
        }
        RequestCommand::List => ctx.with_engine(|engine| {
            let requests = engine.active_requests();
            Ok(Report::new(
                requests.iter().map(|r| r.to_string()).collect(),
                json!({ "requests": requests.iter().map(request_json).collect::<Vec<_>>() }),
            ))
        }),
    }
}

fn borrow(ctx: &Context, user: UserId, work: WorkId, notify: bool) -> Result<Report> {
    ctx.with_engine(|engine| match engine.request_work(user, work) {
        Ok(limit) => {
            tracing::info!(%user, %work, limit, "work borrowed");
            Ok(Report::line(
                format!("User {} borrowed work {}; return by day {}", user, work, limit),
                json!({ "event": "borrowed", "user": user.get(), "work": work.get(), "return_by": limit }),
            ))
        }
        Err(err) if err.rule_id() == Some(NO_COPY_RULE) => {
            offer_availability_interest(ctx, engine, user, work, notify, err)
        }
        Err(err) => Err(err.into()),
    })
}

/// No copy is on the shelf: register availability interest if the user
/// asked for it, otherwise report the failed rule.
fn offer_availability_interest(
    ctx: &Context,
    engine: &mut LibraryEngine,
    user: UserId,
    work: WorkId,
    notify: bool,
    err: LibraryError,
) -> Result<Report> {
    let wants_notice =
        notify || ctx.confirm("No copy is available. Notify the user when one is returned?")?;
    if !wants_notice {
        return Err(err.into());
    }

    engine.register_availability_interest(user, work)?;
    tracing::info!(%user, %work, "registered availability interest after failed borrow");
    Ok(Report::line(
        format!(
            "No copy of work {} is available; user {} will be notified when one is",
            work, user
        ),
        json!({
            "event": "interest_registered",
            "kind": InterestKind::Availability.label(),
            "user": user.get(),
            "work": work.get(),
            "reason": err.to_string(),
        }),
    ))
}

fn give_back(ctx: &Context, user: UserId, work: WorkId, pay: bool) -> Result<Report> {
    ctx.with_engine(|engine| {
        let fine = engine.return_work(user, work)?;
        tracing::info!(%user, %work, fine, "work returned");

        let mut lines = vec![format!("User {} returned work {}", user, work)];
        let mut paid = false;
        if fine > 0 {
            lines.push(format!("Fine due: EUR {}", fine));
            let settle = pay || ctx.confirm(&format!("Pay the EUR {} fine now?", fine))?;
            if settle {
                paid = engine.pay_fine(user, fine)?;
                lines.push("Fine paid; user is active".to_string());
            }
        }

        let status = engine.user(user)?.status().to_string();
        Ok(Report::new(
            lines,
            json!({
                "event": "returned",
                "user": user.get(),
                "work": work.get(),
                "fine": fine,
                "paid": paid,
                "status": status,
            }),
        ))
    })
}

pub fn cmd_interest(ctx: &Context, action: InterestCommand) -> Result<Report> {
    let (kind, user, work) = match action {
        InterestCommand::Availability { user, work } => (InterestKind::Availability, user, work),
        InterestCommand::Borrowing { user, work } => (InterestKind::Borrowing, user, work),
    };
    let (user, work) = (user_id(user), work_id(work));

    ctx.with_engine(|engine| {
        engine.register_interest(kind, user, work)?;
        Ok(Report::line(
            format!(
                "User {} will be notified of {} events for work {}",
                user,
                kind.label().to_lowercase(),
                work
            ),
            json!({
                "event": "interest_registered",
                "kind": kind.label(),
                "user": user.get(),
                "work": work.get(),
            }),
        ))
    })
}

//! User commands

use anyhow::Result;
use serde_json::{json, Value};

use lendlib::presentation::cli::UserCommand;
use lendlib::presentation::output::{notification_json, user_json};
use lendlib::presentation::Report;

use super::{user_id, Context};

pub fn cmd_user(ctx: &Context, action: UserCommand) -> Result<Report> {
    match action {
        UserCommand::Register { name, email } => {
            let (id, value) = ctx.with_engine(|engine| {
                let id = engine.register_user(&name, &email)?;
                Ok((id, user_json(engine.user(id)?)))
            })?;
            tracing::info!(user = %id, "registered user");
            Ok(Report::line(
                format!("Registered user {}", id),
                json!({ "event": "user_registered", "user": value }),
            ))
        }
        UserCommand::Show { id } => ctx.with_engine(|engine| {
            let user = engine.user(user_id(id))?;
            Ok(Report::line(user.to_string(), json!({ "user": user_json(user) })))
        }),
        UserCommand::List => ctx.with_engine(|engine| {
            let users = engine.users();
            Ok(Report::new(
                users.iter().map(|u| u.to_string()).collect(),
                json!({ "users": users.iter().map(|u| user_json(u)).collect::<Vec<Value>>() }),
            ))
        }),
        UserCommand::Notifications { id } => ctx.with_engine(|engine| {
            let notifications = engine.drain_notifications(user_id(id))?;
            Ok(Report::new(
                notifications.iter().map(|n| n.to_string()).collect(),
                json!({
                    "user": id,
                    "notifications": notifications.iter().map(notification_json).collect::<Vec<_>>(),
                }),
            ))
        }),
        UserCommand::PayFine { id, amount } => {
            let (paid, active) = ctx.with_engine(|engine| {
                let user = user_id(id);
                let owed = engine.user(user)?.fines();
                let active = engine.pay_fine(user, amount.unwrap_or(owed))?;
                Ok((owed, active))
            })?;
            tracing::info!(user = id, paid, active, "fine paid");
            Ok(Report::line(
                format!("User {} paid EUR {} and is active again", id, paid),
                json!({ "event": "fine_paid", "user": id, "paid": paid, "active": active }),
            ))
        }
    }
}

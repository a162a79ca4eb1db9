//! Output Rendering
//!
//! Every command produces one result. In text mode it is printed as lines;
//! in JSON mode as a single object on stdout.

use serde_json::{json, Value};

use crate::domain::entities::{Notification, Request, User, Work, WorkKind};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

/// A command result with both renderings
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub lines: Vec<String>,
    pub value: Value,
}

impl Report {
    pub fn new(lines: Vec<String>, value: Value) -> Self {
        Self { lines, value }
    }

    pub fn line(line: impl Into<String>, value: Value) -> Self {
        Self {
            lines: vec![line.into()],
            value,
        }
    }

    /// Text for the chosen format, without a trailing newline
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.lines.join("\n"),
            OutputFormat::Json => self.value.to_string(),
        }
    }

    pub fn print(&self, format: OutputFormat) {
        let rendered = self.render(format);
        if !rendered.is_empty() {
            println!("{}", rendered);
        }
    }
}

pub fn user_json(user: &User) -> Value {
    json!({
        "id": user.id().get(),
        "name": user.name(),
        "email": user.email(),
        "behavior": user.behavior().label(),
        "status": user.status().to_string(),
        "fines": user.fines(),
        "current_requests": user.current_requests(),
        "pending_notifications": user.pending_notifications().len(),
    })
}

pub fn work_json(work: &Work) -> Value {
    let mut value = json!({
        "id": work.id().get(),
        "type": work.kind().label(),
        "title": work.title(),
        "price": work.price(),
        "category": work.category().as_str(),
        "total_copies": work.total_copies(),
        "available_copies": work.available_copies(),
    });
    let extra = match work.kind() {
        WorkKind::Book { isbn, authors } => json!({ "isbn": isbn, "authors": authors }),
        WorkKind::Dvd { igac, director } => json!({ "igac": igac, "director": director }),
    };
    if let (Some(target), Value::Object(extra)) = (value.as_object_mut(), extra) {
        target.extend(extra);
    }
    value
}

pub fn request_json(request: &Request) -> Value {
    json!({
        "user": request.user().get(),
        "work": request.work().get(),
        "request_date": request.request_date(),
        "request_limit": request.request_limit(),
        "devolution_date": request.devolution_date(),
    })
}

pub fn notification_json(notification: &Notification) -> Value {
    json!({
        "kind": notification.kind().label(),
        "timestamp": notification.timestamp(),
        "work": notification.work_snapshot(),
    })
}

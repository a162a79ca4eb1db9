//! Request entity - one loan of one work to one user

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Day, UserId, WorkId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    user: UserId,
    work: WorkId,
    request_date: Day,
    request_limit: Day,
    /// `None` while the loan is open
    #[serde(default)]
    devolution_date: Option<Day>,
}

impl Request {
    /// Open a request on `request_date` lasting `duration` days
    pub fn open(user: UserId, work: WorkId, request_date: Day, duration: Day) -> Self {
        Self {
            user,
            work,
            request_date,
            request_limit: request_date.saturating_add(duration),
            devolution_date: None,
        }
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    pub fn work(&self) -> WorkId {
        self.work
    }

    pub fn request_date(&self) -> Day {
        self.request_date
    }

    /// Last day the work can be returned without a fine
    pub fn request_limit(&self) -> Day {
        self.request_limit
    }

    pub fn devolution_date(&self) -> Option<Day> {
        self.devolution_date
    }

    pub fn is_open(&self) -> bool {
        self.devolution_date.is_none()
    }

    /// Whether `(user, work)` names this request while it is still open
    pub fn is_open_for(&self, user: UserId, work: WorkId) -> bool {
        self.is_open() && self.user == user && self.work == work
    }

    /// Open and past its limit on `today`
    pub fn is_overdue(&self, today: Day) -> bool {
        self.is_open() && today > self.request_limit
    }

    pub(crate) fn mark_returned(&mut self, today: Day) {
        self.devolution_date = Some(today);
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "user {} -> work {} (day {} - {})",
            self.user, self.work, self.request_date, self.request_limit
        )?;
        match self.devolution_date {
            Some(day) => write!(f, " [returned on day {}]", day),
            None => write!(f, " [active]"),
        }
    }
}

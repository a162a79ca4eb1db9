//! User entity
//!
//! A registered library user. Holds only ids of the works it is involved
//! with; the requests themselves live in the engine's ledger.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Notification;
use crate::domain::services::behavior::ReturnStreak;
use crate::domain::value_objects::{Behavior, UserId, UserStatus, WorkId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    #[serde(default)]
    status: UserStatus,
    #[serde(default)]
    behavior: Behavior,
    #[serde(default)]
    fines: u32,
    #[serde(default)]
    current_requests: u32,
    #[serde(default)]
    streak: ReturnStreak,
    #[serde(default)]
    requested_works: BTreeSet<WorkId>,
    #[serde(default)]
    interest_works: BTreeSet<WorkId>,
    #[serde(default)]
    notifications: Vec<Notification>,
}

impl User {
    /// Create an active, normal user with a clean record
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            status: UserStatus::Active,
            behavior: Behavior::Normal,
            fines: 0,
            current_requests: 0,
            streak: ReturnStreak::default(),
            requested_works: BTreeSet::new(),
            interest_works: BTreeSet::new(),
            notifications: Vec::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn is_suspended(&self) -> bool {
        self.status.is_suspended()
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Outstanding fine balance in euros
    pub fn fines(&self) -> u32 {
        self.fines
    }

    /// Number of open requests held by this user
    pub fn current_requests(&self) -> u32 {
        self.current_requests
    }

    pub fn streak(&self) -> ReturnStreak {
        self.streak
    }

    pub fn consecutive_on_time(&self) -> u32 {
        self.streak.on_time()
    }

    pub fn consecutive_late(&self) -> u32 {
        self.streak.late()
    }

    /// Works this user currently holds
    pub fn requested_works(&self) -> &BTreeSet<WorkId> {
        &self.requested_works
    }

    pub fn has_requested(&self, work: WorkId) -> bool {
        self.requested_works.contains(&work)
    }

    /// Works this user wants to hear about when they become available
    pub fn interest_works(&self) -> &BTreeSet<WorkId> {
        &self.interest_works
    }

    /// Notifications waiting to be read, oldest first
    pub fn pending_notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub(crate) fn suspend(&mut self) {
        self.status = UserStatus::Suspended;
    }

    pub(crate) fn activate(&mut self) {
        self.status = UserStatus::Active;
    }

    pub(crate) fn add_fine(&mut self, amount: u32) {
        self.fines = self.fines.saturating_add(amount);
    }

    pub(crate) fn clear_fines(&mut self) {
        self.fines = 0;
    }

    pub(crate) fn set_behavior(&mut self, behavior: Behavior) {
        self.behavior = behavior;
    }

    pub(crate) fn streak_mut(&mut self) -> &mut ReturnStreak {
        &mut self.streak
    }

    /// Record that this user now holds `work`
    pub(crate) fn hold(&mut self, work: WorkId) {
        if self.requested_works.insert(work) {
            self.current_requests += 1;
        }
    }

    /// Record that this user gave `work` back
    pub(crate) fn release(&mut self, work: WorkId) {
        if self.requested_works.remove(&work) {
            self.current_requests = self.current_requests.saturating_sub(1);
        }
    }

    pub(crate) fn add_interest(&mut self, work: WorkId) -> bool {
        self.interest_works.insert(work)
    }

    pub(crate) fn remove_interest(&mut self, work: WorkId) -> bool {
        self.interest_works.remove(&work)
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Take every pending notification, leaving the queue empty
    pub(crate) fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} - {} - {}",
            self.id, self.name, self.email, self.behavior, self.status
        )?;
        if self.is_suspended() && self.fines > 0 {
            write!(f, " - EUR {}", self.fines)?;
        }
        Ok(())
    }
}

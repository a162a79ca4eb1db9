//! Interest registration, notification queues and stock changes

use crate::domain::entities::Notification;
use crate::domain::services::{interest, inventory};
use crate::domain::value_objects::{InterestKind, UserId, WorkId};
use crate::error::{LibraryError, LibraryResult};

use super::LibraryEngine;

impl LibraryEngine {
    /// Register `user`'s interest in `kind` events for `work`.
    ///
    /// Availability interest is also recorded on the user. Registering the
    /// same interest twice is a no-op.
    pub fn register_interest(
        &mut self,
        kind: InterestKind,
        user_id: UserId,
        work_id: WorkId,
    ) -> LibraryResult<()> {
        self.work(work_id)?;
        let user = self.user_mut(user_id)?;
        if kind == InterestKind::Availability {
            user.add_interest(work_id);
        }
        if self.interests.register(kind, user_id, work_id) {
            self.touch();
        }
        Ok(())
    }

    pub fn register_availability_interest(
        &mut self,
        user_id: UserId,
        work_id: WorkId,
    ) -> LibraryResult<()> {
        self.register_interest(InterestKind::Availability, user_id, work_id)
    }

    pub fn register_borrowing_interest(
        &mut self,
        user_id: UserId,
        work_id: WorkId,
    ) -> LibraryResult<()> {
        self.register_interest(InterestKind::Borrowing, user_id, work_id)
    }

    /// Withdraw a registered interest. Returns false if there was none.
    pub fn remove_interest(
        &mut self,
        kind: InterestKind,
        user_id: UserId,
        work_id: WorkId,
    ) -> LibraryResult<bool> {
        self.work(work_id)?;
        let user = self.user_mut(user_id)?;
        if kind == InterestKind::Availability {
            user.remove_interest(work_id);
        }
        let removed = self.interests.remove(kind, user_id, work_id);
        if removed {
            self.touch();
        }
        Ok(removed)
    }

    pub fn is_interested(&self, kind: InterestKind, user_id: UserId, work_id: WorkId) -> bool {
        self.interests.is_interested(kind, user_id, work_id)
    }

    /// Take every pending notification of a user, oldest first
    pub fn drain_notifications(&mut self, user_id: UserId) -> LibraryResult<Vec<Notification>> {
        let drained = self.user_mut(user_id)?.drain_notifications();
        if !drained.is_empty() {
            self.touch();
        }
        Ok(drained)
    }

    /// Drain a user's notifications as display strings
    pub fn show_user_notifications(&mut self, user_id: UserId) -> LibraryResult<Vec<String>> {
        Ok(self
            .drain_notifications(user_id)?
            .iter()
            .map(ToString::to_string)
            .collect())
    }

    /// Add or remove copies of a work from the collection.
    ///
    /// Only copies on the shelf can be removed. If the work had no copy on
    /// the shelf and now has one, availability interest is notified.
    pub fn change_work_inventory(&mut self, work_id: WorkId, delta: i32) -> LibraryResult<()> {
        let change = inventory::adjust(self.work_mut(work_id)?, i64::from(delta))
            .map_err(|source| LibraryError::Inventory { work_id, source })?;

        if change.became_available() {
            let work = self.work(work_id)?.clone();
            interest::dispatch(
                &self.interests,
                &mut self.users,
                InterestKind::Availability,
                &work,
                self.current_date,
                None,
            );
        }

        if delta != 0 {
            self.touch();
        }
        Ok(())
    }
}

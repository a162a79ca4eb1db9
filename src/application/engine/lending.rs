//! Borrowing, returning, fines and the calendar

use crate::domain::entities::Request;
use crate::domain::services::{behavior, interest, inventory, loan};
use crate::domain::value_objects::{Day, InterestKind, UserId, WorkId};
use crate::error::{LibraryError, LibraryResult};

use super::LibraryEngine;

impl LibraryEngine {
    /// Move the calendar forward by `days` and re-evaluate every user's
    /// suspension. Returns the new current date.
    pub fn advance_date(&mut self, days: u32) -> LibraryResult<Day> {
        if days == 0 {
            return Err(LibraryError::InvalidDateAdvance(days));
        }
        self.current_date = self.current_date.saturating_add(days);
        self.refresh_suspensions();
        self.touch();
        Ok(self.current_date)
    }

    /// Suspend users who owe fines or hold overdue works; reactivate the rest
    fn refresh_suspensions(&mut self) {
        let today = self.current_date;
        for user in self.users.values_mut() {
            let overdue = self
                .ledger
                .iter()
                .any(|r| r.user() == user.id() && r.is_overdue(today));
            if user.fines() > 0 || overdue {
                user.suspend();
            } else {
                user.activate();
            }
        }
    }

    /// Lend `work` to `user` today. Returns the last day of the loan.
    pub fn request_work(&mut self, user_id: UserId, work_id: WorkId) -> LibraryResult<Day> {
        let user = self.user(user_id)?;
        let work = self.work(work_id)?;

        let duration = loan::duration(user, work);
        let rule_id = self.rules.evaluate(user, work);
        if rule_id != 0 {
            return Err(LibraryError::BorrowingRuleFailed {
                user_id,
                work_id,
                rule_id,
            });
        }

        let today = self.current_date;
        inventory::check_out(self.work_mut(work_id)?).map_err(|source| {
            LibraryError::Inventory { work_id, source }
        })?;

        let user = self.user_mut(user_id)?;
        user.hold(work_id);
        user.remove_interest(work_id);

        let request = Request::open(user_id, work_id, today, duration);
        let limit = request.request_limit();
        self.ledger.push(request);

        self.interests
            .remove(InterestKind::Availability, user_id, work_id);
        self.interests.remove(InterestKind::Borrowing, user_id, work_id);

        let work = self.work(work_id)?.clone();
        interest::dispatch(
            &self.interests,
            &mut self.users,
            InterestKind::Borrowing,
            &work,
            today,
            Some(user_id),
        );

        self.touch();
        Ok(limit)
    }

    /// Take `work` back from `user` today. Returns the fine charged for this
    /// return (zero when on time).
    pub fn return_work(&mut self, user_id: UserId, work_id: WorkId) -> LibraryResult<u32> {
        self.user(user_id)?;
        self.work(work_id)?;

        let position = self
            .ledger
            .iter()
            .position(|r| r.is_open_for(user_id, work_id))
            .ok_or(LibraryError::WorkNotBorrowedByUser { work_id, user_id })?;

        let today = self.current_date;
        let request_limit = self.ledger[position].request_limit();
        let fine = self.fines.compute(request_limit, today);

        let change = inventory::check_in(self.work_mut(work_id)?)
            .map_err(|source| LibraryError::Inventory { work_id, source })?;

        let mut request = self.ledger.remove(position);
        request.mark_returned(today);
        self.returned.push(request);

        let user = self.user_mut(user_id)?;
        user.release(work_id);
        behavior::record_return(user, today <= request_limit);
        if fine > 0 {
            user.add_fine(fine);
            user.suspend();
        }

        if change.became_available() {
            let work = self.work(work_id)?.clone();
            interest::dispatch(
                &self.interests,
                &mut self.users,
                InterestKind::Availability,
                &work,
                today,
                None,
            );
        }

        self.touch();
        Ok(fine)
    }

    /// Settle the user's whole fine balance and reactivate them.
    ///
    /// `amount` is what the caller collected; the balance is cleared in full
    /// regardless. A user who still holds an overdue work is suspended again
    /// by the next `advance_date` pass. Returns whether the user became
    /// active.
    pub fn pay_fine(&mut self, user_id: UserId, _amount: u32) -> LibraryResult<bool> {
        let user = self.user_mut(user_id)?;
        if !user.is_suspended() || user.fines() == 0 {
            return Err(LibraryError::UserIsActive(user_id));
        }

        user.clear_fines();
        user.activate();
        self.touch();
        Ok(true)
    }
}

//! Library Engine
//!
//! Owns every map of the library (users, works, creators, the active-request
//! ledger, interest registrations) and the current date. All operations go
//! through `&mut self`, so each one runs to completion with nothing
//! interleaved. Callers that share an engine between threads must put it
//! behind a single lock.
//!
//! - `mod.rs` - State, registration, queries, snapshots
//! - `lending.rs` - Borrow, return, fines, date advance
//! - `interest.rs` - Interest registration, notifications, inventory

mod interest;
mod lending;

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::{Creator, LibrarySnapshot, NewWork, Request, User, Work};
use crate::domain::services::{search, FineCalculator, InterestRegistry, RuleChain, SearchField};
use crate::domain::value_objects::{Day, InterestKind, UserId, WorkId};
use crate::error::{LibraryError, LibraryResult};

fn inconsistent(reason: String) -> LibraryError {
    LibraryError::InconsistentSnapshot(reason)
}

#[derive(Debug, Clone)]
pub struct LibraryEngine {
    current_date: Day,
    next_user_id: UserId,
    next_work_id: WorkId,
    users: BTreeMap<UserId, User>,
    works: BTreeMap<WorkId, Work>,
    creators: BTreeMap<String, Creator>,
    ledger: Vec<Request>,
    returned: Vec<Request>,
    interests: InterestRegistry,
    rules: RuleChain,
    fines: FineCalculator,
    dirty: bool,
}

impl Default for LibraryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryEngine {
    /// An empty library on day 0
    pub fn new() -> Self {
        Self {
            current_date: 0,
            next_user_id: UserId::new(1),
            next_work_id: WorkId::new(1),
            users: BTreeMap::new(),
            works: BTreeMap::new(),
            creators: BTreeMap::new(),
            ledger: Vec::new(),
            returned: Vec::new(),
            interests: InterestRegistry::new(),
            rules: RuleChain::standard(),
            fines: FineCalculator::default(),
            dirty: false,
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// Requests and interests must reference known users and works, and
    /// every count a user or work carries must agree with the ledger and
    /// the interest records.
    pub fn from_snapshot(snapshot: LibrarySnapshot) -> LibraryResult<Self> {
        let mut engine = Self::new();
        engine.current_date = snapshot.current_date;

        for user in snapshot.users {
            let id = user.id();
            engine.next_user_id = engine.next_user_id.max(id.next());
            if engine.users.insert(id, user).is_some() {
                return Err(inconsistent(format!("user {} is stored twice", id)));
            }
        }
        for work in snapshot.works {
            let id = work.id();
            if work.available_copies() > work.total_copies() {
                return Err(inconsistent(format!(
                    "work {} has {} copies available out of {}",
                    id,
                    work.available_copies(),
                    work.total_copies()
                )));
            }
            engine.next_work_id = engine.next_work_id.max(id.next());
            engine.credit_creators(&work);
            if engine.works.insert(id, work).is_some() {
                return Err(inconsistent(format!("work {} is stored twice", id)));
            }
        }
        for request in snapshot
            .active_requests
            .iter()
            .chain(snapshot.returned_requests.iter())
        {
            engine.user(request.user())?;
            engine.work(request.work())?;
        }
        for record in &snapshot.interests {
            engine.user(record.user)?;
            engine.work(record.work)?;
        }

        engine.ledger = snapshot.active_requests;
        engine.returned = snapshot.returned_requests;
        engine.interests = InterestRegistry::from_records(snapshot.interests);
        engine.check_ledger()?;
        Ok(engine)
    }

    /// Reconcile users and works with the open requests and the
    /// availability interest records
    fn check_ledger(&self) -> LibraryResult<()> {
        let mut held: BTreeMap<UserId, BTreeSet<WorkId>> = BTreeMap::new();
        let mut lent: BTreeMap<WorkId, u32> = BTreeMap::new();
        for request in &self.ledger {
            if !request.is_open() {
                return Err(inconsistent(format!(
                    "active request of user {} for work {} is already returned",
                    request.user(),
                    request.work()
                )));
            }
            if !held.entry(request.user()).or_default().insert(request.work()) {
                return Err(inconsistent(format!(
                    "user {} holds work {} twice",
                    request.user(),
                    request.work()
                )));
            }
            *lent.entry(request.work()).or_default() += 1;
        }

        let empty = BTreeSet::new();
        for user in self.users.values() {
            let expected = held.get(&user.id()).unwrap_or(&empty);
            if user.requested_works() != expected
                || user.current_requests() as usize != expected.len()
            {
                return Err(inconsistent(format!(
                    "user {} counts {} requests but the ledger has {}",
                    user.id(),
                    user.current_requests(),
                    expected.len()
                )));
            }

            let watched: BTreeSet<WorkId> = self
                .works
                .keys()
                .copied()
                .filter(|&work| {
                    self.interests
                        .is_interested(InterestKind::Availability, user.id(), work)
                })
                .collect();
            if user.interest_works() != &watched {
                return Err(inconsistent(format!(
                    "availability interests of user {} disagree with the records",
                    user.id()
                )));
            }
        }

        for work in self.works.values() {
            let out = work.total_copies() - work.available_copies();
            let open = lent.get(&work.id()).copied().unwrap_or(0);
            if out != open {
                return Err(inconsistent(format!(
                    "work {} has {} copies out but {} open requests",
                    work.id(),
                    out,
                    open
                )));
            }
        }
        Ok(())
    }

    /// Capture the full state as plain data
    pub fn snapshot(&self) -> LibrarySnapshot {
        LibrarySnapshot {
            current_date: self.current_date,
            users: self.users.values().cloned().collect(),
            works: self.works.values().cloned().collect(),
            active_requests: self.ledger.clone(),
            returned_requests: self.returned.clone(),
            interests: self.interests.records(),
        }
    }

    /// Whether anything changed since the engine was built or last marked clean
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn touch(&mut self) {
        self.dirty = true;
    }

    pub fn current_date(&self) -> Day {
        self.current_date
    }

    pub fn rules(&self) -> &RuleChain {
        &self.rules
    }

    // === Registration ===

    /// Register a new user and return their id.
    ///
    /// Name and email must be non-blank and the email must not already be
    /// registered (compared case-insensitively).
    pub fn register_user(&mut self, name: &str, email: &str) -> LibraryResult<UserId> {
        let name = name.trim();
        let email = email.trim();
        let duplicate = self
            .users
            .values()
            .any(|user| user.email().eq_ignore_ascii_case(email));
        if name.is_empty() || email.is_empty() || duplicate {
            return Err(LibraryError::UserRegistrationFailed {
                name: name.to_string(),
                email: email.to_string(),
            });
        }

        let id = self.next_user_id;
        self.next_user_id = id.next();
        self.users.insert(id, User::new(id, name, email));
        self.touch();
        Ok(id)
    }

    /// Catalogue a new work and return its id
    pub fn register_work(&mut self, spec: NewWork) -> LibraryResult<WorkId> {
        let invalid = |reason: &str| LibraryError::InvalidWork {
            title: spec.title.clone(),
            reason: reason.to_string(),
        };
        if spec.title.trim().is_empty() {
            return Err(invalid("title is empty"));
        }
        if spec.copies == 0 {
            return Err(invalid("at least one copy is required"));
        }
        if spec.kind.creators().iter().any(|name| name.trim().is_empty()) {
            return Err(invalid("creator name is empty"));
        }

        let id = self.next_work_id;
        self.next_work_id = id.next();
        let work = Work::new(id, spec);
        self.credit_creators(&work);
        self.works.insert(id, work);
        self.touch();
        Ok(id)
    }

    fn credit_creators(&mut self, work: &Work) {
        for name in work.creators() {
            self.creators
                .entry(name.to_string())
                .or_insert_with(|| Creator::new(name))
                .credit(work.id());
        }
    }

    // === Queries ===

    pub fn user(&self, id: UserId) -> LibraryResult<&User> {
        self.users.get(&id).ok_or(LibraryError::NoSuchUser(id))
    }

    pub(crate) fn user_mut(&mut self, id: UserId) -> LibraryResult<&mut User> {
        self.users.get_mut(&id).ok_or(LibraryError::NoSuchUser(id))
    }

    /// All users, ordered by name (then id)
    pub fn users(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by(|a, b| {
            a.name()
                .to_lowercase()
                .cmp(&b.name().to_lowercase())
                .then(a.id().cmp(&b.id()))
        });
        users
    }

    pub fn work(&self, id: WorkId) -> LibraryResult<&Work> {
        self.works.get(&id).ok_or(LibraryError::NoSuchWork(id))
    }

    pub(crate) fn work_mut(&mut self, id: WorkId) -> LibraryResult<&mut Work> {
        self.works.get_mut(&id).ok_or(LibraryError::NoSuchWork(id))
    }

    /// All works, ordered by id
    pub fn works(&self) -> Vec<&Work> {
        self.works.values().collect()
    }

    pub fn creator(&self, name: &str) -> LibraryResult<&Creator> {
        self.creators
            .get(name)
            .ok_or_else(|| LibraryError::NoSuchCreator(name.to_string()))
    }

    /// Works credited to the named creator, ordered by id
    pub fn works_by_creator(&self, name: &str) -> LibraryResult<Vec<&Work>> {
        let creator = self.creator(name)?;
        Ok(creator
            .works()
            .iter()
            .filter_map(|id| self.works.get(id))
            .collect())
    }

    /// Works whose title or creator contains `term`, ignoring case
    pub fn search_works(&self, term: &str) -> Vec<&Work> {
        search::search(self.works.values(), term)
    }

    /// Works whose `field` contains `term`, ignoring case, ordered by id
    pub fn search_works_by(&self, field: SearchField, term: &str) -> Vec<&Work> {
        search::search_by(self.works.values(), field, term)
    }

    /// The ledger of open requests, in the order they were made
    pub fn active_requests(&self) -> &[Request] {
        &self.ledger
    }

    /// Requests that have been returned, oldest first
    pub fn returned_requests(&self) -> &[Request] {
        &self.returned
    }

    /// The open request for `(user, work)`, if any
    pub fn active_request(&self, user: UserId, work: WorkId) -> Option<&Request> {
        self.ledger.iter().find(|r| r.is_open_for(user, work))
    }
}

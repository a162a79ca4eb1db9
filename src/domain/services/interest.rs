//! Interest registry and notification fan-out
//!
//! Interest is kept per kind as `work -> users`. Dispatching an event never
//! clears interest, so a user hears about every occurrence until they (or
//! the engine) remove it.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::{InterestRecord, Notification, User, Work};
use crate::domain::value_objects::{Day, InterestKind, UserId, WorkId};

type InterestMap = BTreeMap<WorkId, BTreeSet<UserId>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestRegistry {
    availability: InterestMap,
    borrowing: InterestMap,
}

impl InterestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from persisted records
    pub fn from_records(records: impl IntoIterator<Item = InterestRecord>) -> Self {
        let mut registry = Self::new();
        for record in records {
            registry.register(record.kind, record.user, record.work);
        }
        registry
    }

    fn map(&self, kind: InterestKind) -> &InterestMap {
        match kind {
            InterestKind::Availability => &self.availability,
            InterestKind::Borrowing => &self.borrowing,
        }
    }

    fn map_mut(&mut self, kind: InterestKind) -> &mut InterestMap {
        match kind {
            InterestKind::Availability => &mut self.availability,
            InterestKind::Borrowing => &mut self.borrowing,
        }
    }

    /// Returns false if the interest was already registered
    pub fn register(&mut self, kind: InterestKind, user: UserId, work: WorkId) -> bool {
        self.map_mut(kind).entry(work).or_default().insert(user)
    }

    /// Returns false if there was nothing to remove
    pub fn remove(&mut self, kind: InterestKind, user: UserId, work: WorkId) -> bool {
        let map = self.map_mut(kind);
        let Some(users) = map.get_mut(&work) else {
            return false;
        };
        let removed = users.remove(&user);
        if users.is_empty() {
            map.remove(&work);
        }
        removed
    }

    pub fn is_interested(&self, kind: InterestKind, user: UserId, work: WorkId) -> bool {
        self.map(kind)
            .get(&work)
            .is_some_and(|users| users.contains(&user))
    }

    /// Users interested in `kind` events for `work`, ascending by id
    pub fn interested(&self, kind: InterestKind, work: WorkId) -> Vec<UserId> {
        self.map(kind)
            .get(&work)
            .map(|users| users.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Every registration as a flat, ordered list
    pub fn records(&self) -> Vec<InterestRecord> {
        [InterestKind::Availability, InterestKind::Borrowing]
            .into_iter()
            .flat_map(|kind| {
                self.map(kind).iter().flat_map(move |(work, users)| {
                    users.iter().map(move |user| InterestRecord {
                        kind,
                        work: *work,
                        user: *user,
                    })
                })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.availability.is_empty() && self.borrowing.is_empty()
    }
}

/// Queue a `kind` notification about `work` on every interested user except
/// `skip`. Returns how many users were notified.
pub fn dispatch(
    registry: &InterestRegistry,
    users: &mut BTreeMap<UserId, User>,
    kind: InterestKind,
    work: &Work,
    today: Day,
    skip: Option<UserId>,
) -> usize {
    let snapshot = work.to_string();
    let mut delivered = 0;
    for user_id in registry.interested(kind, work.id()) {
        if Some(user_id) == skip {
            continue;
        }
        if let Some(user) = users.get_mut(&user_id) {
            user.notify(Notification::new(today, kind, snapshot.clone()));
            delivered += 1;
        }
    }
    delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewWork;
    use crate::domain::value_objects::Category;

    fn users(ids: &[u32]) -> BTreeMap<UserId, User> {
        ids.iter()
            .map(|id| {
                let id = UserId::new(*id);
                (id, User::new(id, format!("u{id}"), format!("u{id}@example.org")))
            })
            .collect()
    }

    fn work() -> Work {
        Work::new(
            WorkId::new(4),
            NewWork::book("Dune", vec!["Frank Herbert".into()], 12, Category::Fiction, "x", 1),
        )
    }

    #[test]
    fn register_is_per_kind() {
        let mut registry = InterestRegistry::new();
        assert!(registry.register(InterestKind::Availability, UserId::new(1), WorkId::new(4)));
        assert!(!registry.register(InterestKind::Availability, UserId::new(1), WorkId::new(4)));

        assert!(registry.is_interested(InterestKind::Availability, UserId::new(1), WorkId::new(4)));
        assert!(!registry.is_interested(InterestKind::Borrowing, UserId::new(1), WorkId::new(4)));
    }

    #[test]
    fn remove_prunes_empty_entries() {
        let mut registry = InterestRegistry::new();
        registry.register(InterestKind::Borrowing, UserId::new(2), WorkId::new(4));
        assert!(registry.remove(InterestKind::Borrowing, UserId::new(2), WorkId::new(4)));
        assert!(!registry.remove(InterestKind::Borrowing, UserId::new(2), WorkId::new(4)));
        assert!(registry.is_empty());
    }

    #[test]
    fn dispatch_notifies_everyone_but_skipped_and_keeps_interest() {
        let mut registry = InterestRegistry::new();
        let mut users = users(&[1, 2, 3]);
        for id in [1, 2, 3] {
            registry.register(InterestKind::Borrowing, UserId::new(id), WorkId::new(4));
        }

        let delivered = dispatch(
            &registry,
            &mut users,
            InterestKind::Borrowing,
            &work(),
            6,
            Some(UserId::new(2)),
        );
        assert_eq!(delivered, 2);
        assert_eq!(users[&UserId::new(1)].pending_notifications().len(), 1);
        assert!(users[&UserId::new(2)].pending_notifications().is_empty());

        dispatch(&registry, &mut users, InterestKind::Borrowing, &work(), 7, None);
        assert_eq!(users[&UserId::new(1)].pending_notifications().len(), 2);
        assert_eq!(users[&UserId::new(2)].pending_notifications().len(), 1);
    }

    #[test]
    fn dispatch_renders_work_snapshot() {
        let mut registry = InterestRegistry::new();
        let mut users = users(&[1]);
        registry.register(InterestKind::Availability, UserId::new(1), WorkId::new(4));

        dispatch(&registry, &mut users, InterestKind::Availability, &work(), 9, None);
        let note = &users[&UserId::new(1)].pending_notifications()[0];
        assert_eq!(note.timestamp(), 9);
        assert_eq!(
            note.to_string(),
            "AVAILABILITY: 4 - 1 of 1 - Book - Dune - 12 - Fiction - Frank Herbert - x"
        );
    }

    #[test]
    fn records_round_trip() {
        let mut registry = InterestRegistry::new();
        registry.register(InterestKind::Availability, UserId::new(3), WorkId::new(1));
        registry.register(InterestKind::Borrowing, UserId::new(1), WorkId::new(2));

        let rebuilt = InterestRegistry::from_records(registry.records());
        assert_eq!(rebuilt, registry);
    }
}

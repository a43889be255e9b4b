//! In-memory user cache.
//!
//! Keeps every successfully fetched user for the lifetime of the session
//! so that drawing the same identifier again skips the network. Entries
//! are never evicted; the identifier range is small enough that the map
//! stays tiny.

use std::collections::HashMap;

use crate::models::{UserId, UserRecord};

/// Identifier → user mapping owned by a single panel.
#[derive(Debug, Default, Clone)]
pub struct UserCache {
    entries: HashMap<UserId, UserRecord>,
}

impl UserCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached user.
    pub fn lookup(&self, id: UserId) -> Option<&UserRecord> {
        self.entries.get(&id)
    }

    /// Store a user, replacing any previous entry for `id`.
    ///
    /// The panel never re-fetches a cached id, so replacement does not
    /// happen in practice.
    pub fn insert(&mut self, id: UserId, record: UserRecord) {
        self.entries.insert(id, record);
    }

    /// Whether `id` has been cached.
    pub fn contains(&self, id: UserId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of cached users.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached identifiers in ascending order.
    pub fn ids(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self.entries.keys().copied().collect();
        ids.sort();
        ids
    }
}

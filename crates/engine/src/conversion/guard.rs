//! Cycle guard: the set of entities already expanded in this conversion.

use std::collections::HashSet;

use idolhub_domain::{AlbumId, UserId};

/// Entities that can be reached more than once in one graph. Leaf entities
/// reference nothing and never need a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum EntityKey {
    User(UserId),
    Album(AlbumId),
}

/// Per-call record of expanded entities.
///
/// Keys are never removed: each user and album is expanded at most once per
/// top-level conversion and every later occurrence becomes a reference. That
/// bounds the work by the number of distinct entities reachable.
#[derive(Debug, Default)]
pub(crate) struct Visited {
    keys: HashSet<EntityKey>,
}

impl Visited {
    /// Record `key`. Returns false if it was already recorded.
    pub(crate) fn first_visit(&mut self, key: EntityKey) -> bool {
        self.keys.insert(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}

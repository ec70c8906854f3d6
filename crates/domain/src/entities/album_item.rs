//! AlbumItem entity - one image or track inside an album

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::OrderedCollection;
use crate::entity::impl_entity;
use crate::types::ItemKind;
use crate::{AlbumItemId, EventId, UserId};

/// An entry of an [`Album`](crate::Album), owned by it
///
/// Tagged users and the related event are references: the item never owns
/// them and they must exist in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumItem {
    id: Option<AlbumItemId>,
    title: String,
    created_at: DateTime<Utc>,
    /// Opaque locator of the binary resource
    endpoint: String,
    kind: ItemKind,
    #[serde(default)]
    tags: OrderedCollection<UserId>,
    event: Option<EventId>,
}

impl AlbumItem {
    pub fn new(
        title: impl Into<String>,
        endpoint: impl Into<String>,
        kind: ItemKind,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            created_at: now,
            endpoint: endpoint.into(),
            kind,
            tags: OrderedCollection::new(),
            event: None,
        }
    }

    // --- Accessors ---

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn tags(&self) -> &OrderedCollection<UserId> {
        &self.tags
    }

    pub fn event(&self) -> Option<EventId> {
        self.event
    }

    // --- Builder methods ---

    pub fn with_tag(mut self, user: UserId) -> Self {
        self.tag(user);
        self
    }

    pub fn with_event(mut self, event: EventId) -> Self {
        self.event = Some(event);
        self
    }

    // --- Mutation methods ---

    /// Tag a user; tagging the same user twice is a no-op
    pub fn tag(&mut self, user: UserId) {
        if !self.tags.contains(&user) {
            self.tags.push(user);
        }
    }

    pub fn set_event(&mut self, event: Option<EventId>) {
        self.event = event;
    }
}

impl_entity!(AlbumItem, AlbumItemId);

//! Album entity - an ordered set of items with one author

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::OrderedCollection;
use crate::entity::impl_entity;
use crate::entities::AlbumItem;
use crate::{AlbumId, UserId};

/// An album owns its items and references its author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    id: Option<AlbumId>,
    title: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    items: OrderedCollection<AlbumItem>,
    /// Required for conversion; `None` only for records loaded without one
    author: Option<UserId>,
}

impl Album {
    pub fn new(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: title.into(),
            created_at: now,
            items: OrderedCollection::new(),
            author: None,
        }
    }

    // --- Accessors ---

    pub fn items(&self) -> &OrderedCollection<AlbumItem> {
        &self.items
    }

    pub fn author(&self) -> Option<UserId> {
        self.author
    }

    // --- Builder methods ---

    pub fn with_author(mut self, author: UserId) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_item(mut self, item: AlbumItem) -> Self {
        self.items.push(item);
        self
    }

    // --- Mutation methods ---

    pub fn add_item(&mut self, item: AlbumItem) {
        self.items.push(item);
    }

    pub fn items_mut(&mut self) -> &mut OrderedCollection<AlbumItem> {
        &mut self.items
    }
}

impl_entity!(Album, AlbumId);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemKind;
    use chrono::TimeZone;

    #[test]
    fn items_keep_insertion_order() {
        let now = Utc.with_ymd_and_hms(2024, 5, 2, 18, 0, 0).unwrap();
        let album = Album::new("Tour photos", now)
            .with_item(AlbumItem::new("Opening", "s3://tour/1.jpg", ItemKind::Image, now))
            .with_item(AlbumItem::new("Encore", "s3://tour/2.mp3", ItemKind::Music, now));

        assert_eq!(album.items().len(), 2);
        assert_eq!(album.items().get(1).unwrap().endpoint(), "s3://tour/1.jpg");
        assert_eq!(album.items().get(2).unwrap().kind(), &ItemKind::Music);
        assert!(album.author().is_none());
    }

    #[test]
    fn tagging_is_idempotent() {
        let now = Utc.with_ymd_and_hms(2024, 5, 2, 18, 0, 0).unwrap();
        let user = UserId::new();
        let mut item = AlbumItem::new("Group shot", "s3://tour/3.jpg", ItemKind::Image, now);
        item.tag(user);
        item.tag(user);
        assert_eq!(item.tags().len(), 1);
    }
}

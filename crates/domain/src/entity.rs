//! The capability every domain entity shares: identity, title, timestamp.

use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, Utc};

use crate::entities::{
    Album, AlbumItem, Bulletin, ChatRoom, ContactInfo, Event, Rating, Subscription, User,
};

/// Base capability of every entity in the domain graph
pub trait Entity {
    type Id: Copy + Eq + Hash + fmt::Display;

    /// Identity; `None` until the entity has been persisted
    fn id(&self) -> Option<Self::Id>;

    fn title(&self) -> &str;

    /// Set once at creation
    fn created_at(&self) -> DateTime<Utc>;

    /// Called by the store when the entity is first persisted
    fn assign_id(&mut self, id: Self::Id);
}

macro_rules! impl_entity {
    ($entity:ty, $id:ty) => {
        impl $crate::entity::Entity for $entity {
            type Id = $id;

            fn id(&self) -> Option<$id> {
                self.id
            }

            fn title(&self) -> &str {
                &self.title
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }

            fn assign_id(&mut self, id: $id) {
                self.id = Some(id);
            }
        }
    };
}

pub(crate) use impl_entity;

/// Any domain entity, borrowed
///
/// This is the polymorphic input of snapshot conversion.
#[derive(Debug, Clone, Copy)]
pub enum DomainEntity<'a> {
    User(&'a User),
    Album(&'a Album),
    AlbumItem(&'a AlbumItem),
    Event(&'a Event),
    ContactInfo(&'a ContactInfo),
    Subscription(&'a Subscription),
    ChatRoom(&'a ChatRoom),
    Rating(&'a Rating),
    Bulletin(&'a Bulletin),
}

impl DomainEntity<'_> {
    /// Name of the entity type, for logs and error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::User(_) => "User",
            Self::Album(_) => "Album",
            Self::AlbumItem(_) => "AlbumItem",
            Self::Event(_) => "Event",
            Self::ContactInfo(_) => "ContactInfo",
            Self::Subscription(_) => "Subscription",
            Self::ChatRoom(_) => "ChatRoom",
            Self::Rating(_) => "Rating",
            Self::Bulletin(_) => "Bulletin",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::User(e) => e.title(),
            Self::Album(e) => e.title(),
            Self::AlbumItem(e) => e.title(),
            Self::Event(e) => e.title(),
            Self::ContactInfo(e) => e.title(),
            Self::Subscription(e) => e.title(),
            Self::ChatRoom(e) => e.title(),
            Self::Rating(e) => e.title(),
            Self::Bulletin(e) => e.title(),
        }
    }
}

macro_rules! domain_entity_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $variant> for DomainEntity<'a> {
                fn from(entity: &'a $variant) -> Self {
                    Self::$variant(entity)
                }
            }
        )*
    };
}

domain_entity_from!(
    User,
    Album,
    AlbumItem,
    Event,
    ContactInfo,
    Subscription,
    ChatRoom,
    Rating,
    Bulletin,
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn wraps_entities_by_reference() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let event = Event::new("Spring Live", now);
        let entity = DomainEntity::from(&event);

        assert_eq!(entity.type_name(), "Event");
        assert_eq!(entity.title(), "Spring Live");
    }

    #[test]
    fn assign_id_sets_identity() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let mut room = ChatRoom::new("Lobby", now);
        assert!(room.id().is_none());

        let id = crate::ChatRoomId::new();
        room.assign_id(id);
        assert_eq!(room.id(), Some(id));
        assert_eq!(room.created_at(), now);
    }
}

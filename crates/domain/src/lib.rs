//! IdolHub Domain - the mutable object graph of users, albums and events
//!
//! Owned relations are stored inline; referenced relations are stored as
//! typed IDs and resolved by the engine at conversion time. That keeps the
//! graph free of ownership cycles even when participants follow each other.

pub mod collection;
pub mod entities;
pub mod entity;
pub mod error;
pub mod ids;
pub mod types;

pub use collection::OrderedCollection;
pub use entities::{
    Album, AlbumItem, Bulletin, ChatRoom, ContactInfo, Event, ParticipantProfile, Rating,
    Subscription, User, UserRole,
};
pub use entity::{DomainEntity, Entity};
pub use error::DomainError;
pub use ids::{
    AlbumId, AlbumItemId, BulletinId, ChatRoomId, ContactInfoId, EventId, RatingId,
    SubscriptionId, UserId,
};
pub use types::{Authority, ItemKind};

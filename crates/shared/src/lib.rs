//! IdolHub Shared - transport-safe snapshots of the domain graph
//!
//! This crate contains the types handed to a transport layer after
//! conversion:
//! - Snapshot structs mirroring each domain entity
//! - `Linked` / `EntityReference` for referenced entities and cycle cut-offs
//! - Snapshot-side vocabulary enums (`SnapshotKind`, `SnapshotAuthority`)
//!
//! # Design Principles
//!
//! 1. **No behavior** - plain data and serialization only
//! 2. **No domain dependency** - enums are mirrored by name, not shared
//! 3. **No domain IDs** - use raw `uuid::Uuid` in snapshots

pub mod snapshots;
pub mod types;

pub use snapshots::{
    AlbumItemSnapshot, AlbumSnapshot, BulletinSnapshot, ChatRoomSnapshot, ContactInfoSnapshot,
    EntityReference, EventSnapshot, Linked, ParticipantSnapshot, RatingSnapshot, SnapshotEntity,
    SubscriptionSnapshot, UserProfileSnapshot, UserSnapshot,
};
pub use types::{SnapshotAuthority, SnapshotKind, UnknownVariant};

//! Snapshot converter - the dispatch engine from domain entities to snapshots.
//!
//! Each top-level call creates a [`ConversionPass`] that owns the visited set
//! for that call only. Referenced entities are resolved through the
//! [`EntityResolver`] port and converted through the same entry points as
//! top-level entities, so polymorphic dispatch and the cycle policy apply at
//! every depth. A user or album is expanded the first time it is met and
//! emitted as a reference on every later occurrence.

use std::sync::Arc;

use idolhub_domain::{
    Album, AlbumId, AlbumItem, ChatRoomId, DomainEntity, Entity, EventId, User, UserId, UserRole,
};
use idolhub_shared::{
    AlbumItemSnapshot, AlbumSnapshot, ChatRoomSnapshot, EntityReference, EventSnapshot, Linked,
    ParticipantSnapshot, SnapshotEntity, UserProfileSnapshot, UserSnapshot,
};

use super::enums::{map_authority, map_kind};
use super::error::ConversionError;
use super::guard::{EntityKey, Visited};
use super::leaves::{
    bulletin_snapshot, chat_room_snapshot, contact_info_snapshot, event_snapshot,
    rating_snapshot, subscription_snapshot,
};
use crate::infrastructure::ports::EntityResolver;

/// Converts domain entities into snapshot entities.
///
/// Holds no per-conversion state, so one converter can serve concurrent
/// callers.
#[derive(Clone)]
pub struct SnapshotConverter {
    resolver: Arc<dyn EntityResolver>,
}

impl SnapshotConverter {
    pub fn new(resolver: Arc<dyn EntityResolver>) -> Self {
        Self { resolver }
    }

    /// Convert any domain entity.
    ///
    /// # Errors
    ///
    /// Fails with the first [`ConversionError`] met anywhere in the graph; no
    /// partial snapshot is returned.
    pub fn to_snapshot(&self, entity: DomainEntity<'_>) -> Result<SnapshotEntity, ConversionError> {
        self.run(entity, |pass| match entity {
            DomainEntity::User(user) => pass.root_user(user).map(SnapshotEntity::User),
            DomainEntity::Album(album) => pass.root_album(album).map(SnapshotEntity::Album),
            DomainEntity::AlbumItem(item) => pass.album_item(item).map(SnapshotEntity::AlbumItem),
            DomainEntity::Event(event) => Ok(SnapshotEntity::Event(event_snapshot(event))),
            DomainEntity::ContactInfo(contact) => {
                Ok(SnapshotEntity::ContactInfo(contact_info_snapshot(contact)))
            }
            DomainEntity::Subscription(subscription) => Ok(SnapshotEntity::Subscription(
                subscription_snapshot(subscription),
            )),
            DomainEntity::ChatRoom(room) => Ok(SnapshotEntity::ChatRoom(chat_room_snapshot(room))),
            DomainEntity::Rating(rating) => Ok(SnapshotEntity::Rating(rating_snapshot(rating))),
            DomainEntity::Bulletin(bulletin) => {
                Ok(SnapshotEntity::Bulletin(bulletin_snapshot(bulletin)))
            }
        })
    }

    /// Convert a user, dispatching on its authority.
    pub fn user_snapshot(&self, user: &User) -> Result<UserSnapshot, ConversionError> {
        self.run(DomainEntity::User(user), |pass| pass.root_user(user))
    }

    pub fn album_snapshot(&self, album: &Album) -> Result<AlbumSnapshot, ConversionError> {
        self.run(DomainEntity::Album(album), |pass| pass.root_album(album))
    }

    pub fn album_item_snapshot(
        &self,
        item: &AlbumItem,
    ) -> Result<AlbumItemSnapshot, ConversionError> {
        self.run(DomainEntity::AlbumItem(item), |pass| pass.album_item(item))
    }

    fn run<T>(
        &self,
        entity: DomainEntity<'_>,
        convert: impl FnOnce(&mut ConversionPass<'_>) -> Result<T, ConversionError>,
    ) -> Result<T, ConversionError> {
        tracing::debug!(
            entity_type = entity.type_name(),
            title = entity.title(),
            "Converting entity to snapshot"
        );

        let mut pass = ConversionPass::new(self.resolver.as_ref());
        let result = convert(&mut pass);

        match &result {
            Ok(_) => tracing::debug!(
                entity_type = entity.type_name(),
                expanded = pass.visited.len(),
                "Snapshot conversion finished"
            ),
            Err(err) => tracing::warn!(
                entity_type = entity.type_name(),
                error = %err,
                "Snapshot conversion aborted"
            ),
        }
        result
    }
}

/// State of a single top-level conversion.
struct ConversionPass<'r> {
    resolver: &'r dyn EntityResolver,
    visited: Visited,
}

impl<'r> ConversionPass<'r> {
    fn new(resolver: &'r dyn EntityResolver) -> Self {
        Self {
            resolver,
            visited: Visited::default(),
        }
    }

    // --- Users ---

    fn root_user(&mut self, user: &User) -> Result<UserSnapshot, ConversionError> {
        if let Some(id) = user.id() {
            self.visited.first_visit(EntityKey::User(id));
        }
        self.user(user)
    }

    /// Resolve a referenced user; emit a reference if it was already expanded.
    fn linked_user(
        &mut self,
        id: UserId,
        owner: &'static str,
        relation: &'static str,
    ) -> Result<Linked<UserSnapshot>, ConversionError> {
        let user = self
            .resolver
            .user(id)
            .ok_or_else(|| ConversionError::missing_reference(owner, relation, Some(id)))?;

        if !self.visited.first_visit(EntityKey::User(id)) {
            tracing::trace!(user_id = %id, "User already expanded, emitting reference");
            return Ok(Linked::Reference(EntityReference {
                id: id.to_uuid(),
                title: user.title().to_string(),
            }));
        }

        self.user(&user).map(Linked::Expanded)
    }

    fn user(&mut self, user: &User) -> Result<UserSnapshot, ConversionError> {
        match user.role() {
            UserRole::Participant(profile) => {
                let base = self.user_profile(user)?;
                let idols = profile
                    .idols
                    .iter()
                    .map(|&idol| self.linked_user(idol, "Participant", "idols"))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(UserSnapshot::Participant(ParticipantSnapshot {
                    profile: base,
                    idols,
                }))
            }
            UserRole::Member | UserRole::Organizer | UserRole::Administrator => {
                Ok(UserSnapshot::Generic(self.user_profile(user)?))
            }
            UserRole::Unknown(_) => Err(ConversionError::unsupported_variant(
                "User",
                user.authority(),
                user.id(),
            )),
        }
    }

    fn user_profile(&mut self, user: &User) -> Result<UserProfileSnapshot, ConversionError> {
        let albums = user
            .albums()
            .iter()
            .map(|&album| self.linked_album(album))
            .collect::<Result<Vec<_>, _>>()?;
        let events = user
            .events()
            .iter()
            .map(|&event| self.resolved_event(event, "User", "events"))
            .collect::<Result<Vec<_>, _>>()?;
        let chat_rooms = user
            .chat_rooms()
            .iter()
            .map(|&room| self.resolved_chat_room(room))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UserProfileSnapshot {
            id: user.id().map(UserId::to_uuid),
            title: user.title().to_string(),
            created_at: user.created_at(),
            username: user.username().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            authority: map_authority(&user.authority())?,
            contact_info: user.contact_info().map(contact_info_snapshot),
            albums,
            ratings: user.ratings().iter().map(rating_snapshot).collect(),
            events,
            chat_rooms,
            subscription: user.subscription().map(subscription_snapshot),
            bulletins: user.bulletins().iter().map(bulletin_snapshot).collect(),
        })
    }

    // --- Albums ---

    fn root_album(&mut self, album: &Album) -> Result<AlbumSnapshot, ConversionError> {
        if let Some(id) = album.id() {
            self.visited.first_visit(EntityKey::Album(id));
        }
        self.album(album)
    }

    fn linked_album(&mut self, id: AlbumId) -> Result<Linked<AlbumSnapshot>, ConversionError> {
        let album = self
            .resolver
            .album(id)
            .ok_or_else(|| ConversionError::missing_reference("User", "albums", Some(id)))?;

        if !self.visited.first_visit(EntityKey::Album(id)) {
            tracing::trace!(album_id = %id, "Album already expanded, emitting reference");
            return Ok(Linked::Reference(EntityReference {
                id: id.to_uuid(),
                title: album.title().to_string(),
            }));
        }

        self.album(&album).map(Linked::Expanded)
    }

    fn album(&mut self, album: &Album) -> Result<AlbumSnapshot, ConversionError> {
        let items = album
            .items()
            .iter()
            .map(|item| self.album_item(item))
            .collect::<Result<Vec<_>, _>>()?;

        let author = album.author().ok_or_else(|| {
            ConversionError::missing_reference("Album", "author", album.id())
        })?;
        let author = self.linked_user(author, "Album", "author")?;

        Ok(AlbumSnapshot {
            id: album.id().map(AlbumId::to_uuid),
            title: album.title().to_string(),
            created_at: album.created_at(),
            items,
            author: Box::new(author),
        })
    }

    fn album_item(&mut self, item: &AlbumItem) -> Result<AlbumItemSnapshot, ConversionError> {
        let kind = map_kind(item.kind())?;
        let tags = item
            .tags()
            .iter()
            .map(|&user| self.linked_user(user, "AlbumItem", "tags"))
            .collect::<Result<Vec<_>, _>>()?;
        let event = item
            .event()
            .map(|event| self.resolved_event(event, "AlbumItem", "event"))
            .transpose()?;

        Ok(AlbumItemSnapshot {
            id: item.id().map(|id| id.to_uuid()),
            title: item.title().to_string(),
            created_at: item.created_at(),
            endpoint: item.endpoint().to_string(),
            kind,
            tags,
            event,
        })
    }

    // --- Leaves reached by reference ---

    fn resolved_event(
        &self,
        id: EventId,
        owner: &'static str,
        relation: &'static str,
    ) -> Result<EventSnapshot, ConversionError> {
        self.resolver
            .event(id)
            .map(|event| event_snapshot(&event))
            .ok_or_else(|| ConversionError::missing_reference(owner, relation, Some(id)))
    }

    fn resolved_chat_room(&self, id: ChatRoomId) -> Result<ChatRoomSnapshot, ConversionError> {
        self.resolver
            .chat_room(id)
            .map(|room| chat_room_snapshot(&room))
            .ok_or_else(|| ConversionError::missing_reference("User", "chat_rooms", Some(id)))
    }
}

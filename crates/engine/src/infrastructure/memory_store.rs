//! In-memory entity store.
//!
//! Keeps the referenced part of the domain graph resident so the converter
//! can resolve IDs without I/O. Entities are shared as `Arc`s; replacing an
//! entity never affects snapshots already taken from the old value.

use std::sync::Arc;

use dashmap::DashMap;
use idolhub_domain::{
    Album, AlbumId, ChatRoom, ChatRoomId, Entity, Event, EventId, User, UserId,
};

use super::ports::EntityResolver;

/// Store for the entities other entities reference by ID.
#[derive(Debug, Default)]
pub struct InMemoryEntityStore {
    users: DashMap<UserId, Arc<User>>,
    albums: DashMap<AlbumId, Arc<Album>>,
    events: DashMap<EventId, Arc<Event>>,
    chat_rooms: DashMap<ChatRoomId, Arc<ChatRoom>>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user, assigning an identity if it has none.
    pub fn insert_user(&self, user: User) -> UserId {
        let (id, user) = with_identity(user, UserId::new);
        tracing::debug!(user_id = %id, username = user.username(), "Stored user");
        self.users.insert(id, Arc::new(user));
        id
    }

    /// Insert or replace an album, assigning an identity if it has none.
    pub fn insert_album(&self, album: Album) -> AlbumId {
        let (id, album) = with_identity(album, AlbumId::new);
        tracing::debug!(album_id = %id, items = album.items().len(), "Stored album");
        self.albums.insert(id, Arc::new(album));
        id
    }

    /// Insert or replace an event, assigning an identity if it has none.
    pub fn insert_event(&self, event: Event) -> EventId {
        let (id, event) = with_identity(event, EventId::new);
        tracing::debug!(event_id = %id, "Stored event");
        self.events.insert(id, Arc::new(event));
        id
    }

    /// Insert or replace a chat room, assigning an identity if it has none.
    pub fn insert_chat_room(&self, room: ChatRoom) -> ChatRoomId {
        let (id, room) = with_identity(room, ChatRoomId::new);
        tracing::debug!(chat_room_id = %id, "Stored chat room");
        self.chat_rooms.insert(id, Arc::new(room));
        id
    }

    /// Apply `update` to a stored user. Returns false if the user is unknown.
    ///
    /// Used to close reference cycles: a user can only follow another user
    /// once both have identities.
    pub fn update_user(&self, id: UserId, update: impl FnOnce(&mut User)) -> bool {
        match self.users.get_mut(&id) {
            Some(mut entry) => {
                update(Arc::make_mut(entry.value_mut()));
                true
            }
            None => false,
        }
    }

    pub fn remove_user(&self, id: UserId) -> Option<Arc<User>> {
        self.users.remove(&id).map(|(_, user)| user)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

fn with_identity<E: Entity>(mut entity: E, generate: impl FnOnce() -> E::Id) -> (E::Id, E) {
    let id = match entity.id() {
        Some(id) => id,
        None => {
            let id = generate();
            entity.assign_id(id);
            id
        }
    };
    (id, entity)
}

impl EntityResolver for InMemoryEntityStore {
    fn user(&self, id: UserId) -> Option<Arc<User>> {
        self.users.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    fn album(&self, id: AlbumId) -> Option<Arc<Album>> {
        self.albums.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    fn event(&self, id: EventId) -> Option<Arc<Event>> {
        self.events.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    fn chat_room(&self, id: ChatRoomId) -> Option<Arc<ChatRoom>> {
        self.chat_rooms.get(&id).map(|entry| Arc::clone(entry.value()))
    }
}

//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Entity lookup (the store that keeps the domain graph resident)

use std::sync::Arc;

use idolhub_domain::{Album, AlbumId, ChatRoom, ChatRoomId, Event, EventId, User, UserId};

// =============================================================================
// Entity Resolution
// =============================================================================

/// Turns a referenced ID into the entity it names.
///
/// Lookups are synchronous: every entity reachable from a conversion root
/// must already be loaded. `None` means the reference is dangling.
#[cfg_attr(test, mockall::automock)]
pub trait EntityResolver: Send + Sync {
    fn user(&self, id: UserId) -> Option<Arc<User>>;
    fn album(&self, id: AlbumId) -> Option<Arc<Album>>;
    fn event(&self, id: EventId) -> Option<Arc<Event>>;
    fn chat_room(&self, id: ChatRoomId) -> Option<Arc<ChatRoom>>;
}

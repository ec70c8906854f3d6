//! User entity - a polymorphic account whose variant is selected by its authority
//!
//! The variant lives in [`UserRole`], a tagged union: the tag is the
//! [`Authority`] and only the `Participant` arm carries a payload (its idols).
//! Owned parts (contact info, subscription, ratings, bulletins) are held
//! inline; albums, events and chat rooms are referenced by ID.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::OrderedCollection;
use crate::entities::{Bulletin, ContactInfo, Rating, Subscription};
use crate::entity::impl_entity;
use crate::error::DomainError;
use crate::types::Authority;
use crate::{AlbumId, ChatRoomId, EventId, UserId};

/// Variant-specific data of a participant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantProfile {
    /// Users this participant follows. Weak references: idols are not owned
    /// and may themselves be participants following back.
    #[serde(default)]
    pub idols: OrderedCollection<UserId>,
}

/// Concrete variant of a user, tagged by authority
///
/// Stored flat next to the other user fields: an `authority` name, plus
/// `idols` for participants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredRole", into = "StoredRole")]
pub enum UserRole {
    Participant(ParticipantProfile),
    Member,
    Organizer,
    Administrator,
    /// Authority name stored by a newer build; cannot be converted
    Unknown(String),
}

impl UserRole {
    pub fn participant() -> Self {
        Self::Participant(ParticipantProfile::default())
    }

    pub fn authority(&self) -> Authority {
        match self {
            Self::Participant(_) => Authority::Participant,
            Self::Member => Authority::Member,
            Self::Organizer => Authority::Organizer,
            Self::Administrator => Authority::Administrator,
            Self::Unknown(name) => Authority::Unknown(name.clone()),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct StoredRole {
    authority: Authority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    idols: Option<OrderedCollection<UserId>>,
}

impl From<StoredRole> for UserRole {
    fn from(stored: StoredRole) -> Self {
        match stored.authority {
            Authority::Participant => Self::Participant(ParticipantProfile {
                idols: stored.idols.unwrap_or_default(),
            }),
            Authority::Member => Self::Member,
            Authority::Organizer => Self::Organizer,
            Authority::Administrator => Self::Administrator,
            Authority::Unknown(name) => Self::Unknown(name),
        }
    }
}

impl From<UserRole> for StoredRole {
    fn from(role: UserRole) -> Self {
        let authority = role.authority();
        let idols = match role {
            UserRole::Participant(profile) => Some(profile.idols),
            _ => None,
        };
        Self { authority, idols }
    }
}

/// An account in the system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: Option<UserId>,
    title: String,
    created_at: DateTime<Utc>,
    username: String,
    first_name: String,
    last_name: String,
    contact_info: Option<ContactInfo>,
    #[serde(default)]
    albums: OrderedCollection<AlbumId>,
    #[serde(default)]
    ratings: OrderedCollection<Rating>,
    #[serde(default)]
    events: OrderedCollection<EventId>,
    #[serde(default)]
    chat_rooms: OrderedCollection<ChatRoomId>,
    subscription: Option<Subscription>,
    #[serde(default)]
    bulletins: OrderedCollection<Bulletin>,
    #[serde(flatten)]
    role: UserRole,
}

impl User {
    /// Create a user; the title starts out as the username
    pub fn new(
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: UserRole,
        now: DateTime<Utc>,
    ) -> Self {
        let username = username.into();
        Self {
            id: None,
            title: username.clone(),
            created_at: now,
            username,
            first_name: first_name.into(),
            last_name: last_name.into(),
            contact_info: None,
            albums: OrderedCollection::new(),
            ratings: OrderedCollection::new(),
            events: OrderedCollection::new(),
            chat_rooms: OrderedCollection::new(),
            subscription: None,
            bulletins: OrderedCollection::new(),
            role,
        }
    }

    // --- Accessors ---

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn contact_info(&self) -> Option<&ContactInfo> {
        self.contact_info.as_ref()
    }

    pub fn albums(&self) -> &OrderedCollection<AlbumId> {
        &self.albums
    }

    pub fn ratings(&self) -> &OrderedCollection<Rating> {
        &self.ratings
    }

    pub fn events(&self) -> &OrderedCollection<EventId> {
        &self.events
    }

    pub fn chat_rooms(&self) -> &OrderedCollection<ChatRoomId> {
        &self.chat_rooms
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    pub fn bulletins(&self) -> &OrderedCollection<Bulletin> {
        &self.bulletins
    }

    pub fn role(&self) -> &UserRole {
        &self.role
    }

    pub fn authority(&self) -> Authority {
        self.role.authority()
    }

    /// Idols of a participant; `None` for every other variant
    pub fn idols(&self) -> Option<&OrderedCollection<UserId>> {
        match &self.role {
            UserRole::Participant(profile) => Some(&profile.idols),
            _ => None,
        }
    }

    // --- Builder methods ---

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_contact_info(mut self, contact_info: ContactInfo) -> Self {
        self.contact_info = Some(contact_info);
        self
    }

    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscription = Some(subscription);
        self
    }

    // --- Mutation methods ---

    pub fn set_contact_info(&mut self, contact_info: Option<ContactInfo>) {
        self.contact_info = contact_info;
    }

    pub fn set_subscription(&mut self, subscription: Option<Subscription>) {
        self.subscription = subscription;
    }

    pub fn add_album(&mut self, album: AlbumId) {
        self.albums.push(album);
    }

    pub fn add_rating(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }

    pub fn attend(&mut self, event: EventId) {
        self.events.push(event);
    }

    pub fn join_chat_room(&mut self, room: ChatRoomId) {
        self.chat_rooms.push(room);
    }

    pub fn post_bulletin(&mut self, bulletin: Bulletin) {
        self.bulletins.push(bulletin);
    }

    /// Follow another user. Only participants have idols.
    pub fn follow(&mut self, idol: UserId) -> Result<(), DomainError> {
        match &mut self.role {
            UserRole::Participant(profile) => {
                if !profile.idols.contains(&idol) {
                    profile.idols.push(idol);
                }
                Ok(())
            }
            other => Err(DomainError::validation(format!(
                "Only participants can follow idols, this user is {}",
                other.authority()
            ))),
        }
    }
}

impl_entity!(User, UserId);

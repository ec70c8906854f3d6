//! User snapshots and the parts a user owns

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AlbumSnapshot, ChatRoomSnapshot, EventSnapshot, Linked};
use crate::types::SnapshotAuthority;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfoSnapshot {
    pub id: Option<Uuid>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionSnapshot {
    pub id: Option<Uuid>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub plan: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renews_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSnapshot {
    pub id: Option<Uuid>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletinSnapshot {
    pub id: Option<Uuid>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub body: String,
}

/// Fields every user snapshot carries, whatever its variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileSnapshot {
    pub id: Option<Uuid>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub authority: SnapshotAuthority,
    /// Absent, not empty, when the user has no contact info
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfoSnapshot>,
    pub albums: Vec<Linked<AlbumSnapshot>>,
    pub ratings: Vec<RatingSnapshot>,
    pub events: Vec<EventSnapshot>,
    pub chat_rooms: Vec<ChatRoomSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<SubscriptionSnapshot>,
    pub bulletins: Vec<BulletinSnapshot>,
}

/// A participant: the generic profile plus the idols they follow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantSnapshot {
    #[serde(flatten)]
    pub profile: UserProfileSnapshot,
    pub idols: Vec<Linked<UserSnapshot>>,
}

/// Snapshot of a user, shaped by its authority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum UserSnapshot {
    Generic(UserProfileSnapshot),
    Participant(ParticipantSnapshot),
}

impl UserSnapshot {
    pub fn profile(&self) -> &UserProfileSnapshot {
        match self {
            Self::Generic(profile) => profile,
            Self::Participant(participant) => &participant.profile,
        }
    }

    pub fn authority(&self) -> SnapshotAuthority {
        self.profile().authority
    }

    /// Idol list; only participants expose one
    pub fn idols(&self) -> Option<&[Linked<UserSnapshot>]> {
        match self {
            Self::Generic(_) => None,
            Self::Participant(participant) => Some(&participant.idols),
        }
    }

    pub fn is_participant(&self) -> bool {
        matches!(self, Self::Participant(_))
    }
}

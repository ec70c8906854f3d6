//! Snapshot entities - the read-only mirror of the domain graph

mod album;
mod event;
mod link;
mod user;

pub use album::{AlbumItemSnapshot, AlbumSnapshot};
pub use event::{ChatRoomSnapshot, EventSnapshot};
pub use link::{EntityReference, Linked};
pub use user::{
    BulletinSnapshot, ContactInfoSnapshot, ParticipantSnapshot, RatingSnapshot,
    SubscriptionSnapshot, UserProfileSnapshot, UserSnapshot,
};

use serde::{Deserialize, Serialize};

/// Any snapshot, as produced by converting a single domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum SnapshotEntity {
    User(UserSnapshot),
    Album(AlbumSnapshot),
    AlbumItem(AlbumItemSnapshot),
    Event(EventSnapshot),
    ContactInfo(ContactInfoSnapshot),
    Subscription(SubscriptionSnapshot),
    ChatRoom(ChatRoomSnapshot),
    Rating(RatingSnapshot),
    Bulletin(BulletinSnapshot),
}

impl SnapshotEntity {
    pub fn as_user(&self) -> Option<&UserSnapshot> {
        match self {
            Self::User(user) => Some(user),
            _ => None,
        }
    }

    pub fn as_album(&self) -> Option<&AlbumSnapshot> {
        match self {
            Self::Album(album) => Some(album),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SnapshotAuthority;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn profile(username: &str, authority: SnapshotAuthority) -> UserProfileSnapshot {
        UserProfileSnapshot {
            id: Some(Uuid::new_v4()),
            title: username.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap(),
            username: username.to_string(),
            first_name: "Hana".to_string(),
            last_name: "Kato".to_string(),
            authority,
            contact_info: None,
            albums: Vec::new(),
            ratings: Vec::new(),
            events: Vec::new(),
            chat_rooms: Vec::new(),
            subscription: None,
            bulletins: Vec::new(),
        }
    }

    #[test]
    fn absent_contact_info_is_omitted_on_the_wire() {
        let user = UserSnapshot::Generic(profile("hana", SnapshotAuthority::Member));
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["variant"], "generic");
        assert!(json.get("contact_info").is_none());
        assert!(json.get("subscription").is_none());
        assert!(json.get("idols").is_none());
    }

    #[test]
    fn participant_flattens_profile_and_adds_idols() {
        let idol_id = Uuid::new_v4();
        let participant = UserSnapshot::Participant(ParticipantSnapshot {
            profile: profile("fan", SnapshotAuthority::Participant),
            idols: vec![Linked::Reference(EntityReference {
                id: idol_id,
                title: "idol".to_string(),
            })],
        });
        let json = serde_json::to_value(&participant).unwrap();

        assert_eq!(json["variant"], "participant");
        assert_eq!(json["username"], "fan");
        assert_eq!(json["authority"], "PARTICIPANT");
        assert_eq!(json["idols"][0]["link"], "reference");
        assert_eq!(json["idols"][0]["id"], idol_id.to_string());
    }

    #[test]
    fn accessors_expose_variant_shape() {
        let generic = UserSnapshot::Generic(profile("a", SnapshotAuthority::Organizer));
        assert!(generic.idols().is_none());
        assert!(!generic.is_participant());
        assert_eq!(generic.authority(), SnapshotAuthority::Organizer);

        let participant = UserSnapshot::Participant(ParticipantSnapshot {
            profile: profile("b", SnapshotAuthority::Participant),
            idols: Vec::new(),
        });
        assert_eq!(participant.idols().map(<[_]>::len), Some(0));
        assert_eq!(participant.profile().username, "b");
    }

    #[test]
    fn entity_tag_names_the_snapshot_type() {
        let event = SnapshotEntity::Event(EventSnapshot {
            id: None,
            title: "Fan meeting".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap(),
            description: None,
            venue: Some("Hall B".to_string()),
            starts_at: None,
        });
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["entity"], "event");
        assert_eq!(json["venue"], "Hall B");
        assert!(json["id"].is_null());
        assert!(event.as_user().is_none());

        let parsed: SnapshotEntity = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, event);
    }
}

//! Conversions for entities that reference nothing further.
//!
//! These cannot fail and need no cycle guard.

use idolhub_domain::{
    Bulletin, ChatRoom, ContactInfo, Entity, Event, Rating, Subscription,
};
use idolhub_shared::{
    BulletinSnapshot, ChatRoomSnapshot, ContactInfoSnapshot, EventSnapshot, RatingSnapshot,
    SubscriptionSnapshot,
};

pub fn event_snapshot(event: &Event) -> EventSnapshot {
    EventSnapshot {
        id: event.id.map(|id| id.to_uuid()),
        title: event.title.clone(),
        created_at: event.created_at,
        description: event.description.clone(),
        venue: event.venue.clone(),
        starts_at: event.starts_at,
    }
}

pub fn chat_room_snapshot(room: &ChatRoom) -> ChatRoomSnapshot {
    ChatRoomSnapshot {
        id: room.id.map(|id| id.to_uuid()),
        title: room.title.clone(),
        created_at: room.created_at,
        topic: room.topic.clone(),
    }
}

pub fn contact_info_snapshot(contact: &ContactInfo) -> ContactInfoSnapshot {
    ContactInfoSnapshot {
        id: contact.id.map(|id| id.to_uuid()),
        title: contact.title.clone(),
        created_at: contact.created_at,
        email: contact.email.clone(),
        phone: contact.phone.clone(),
        address: contact.address.clone(),
    }
}

pub fn subscription_snapshot(subscription: &Subscription) -> SubscriptionSnapshot {
    SubscriptionSnapshot {
        id: subscription.id.map(|id| id.to_uuid()),
        title: subscription.title.clone(),
        created_at: subscription.created_at,
        plan: subscription.plan.clone(),
        active: subscription.active,
        renews_at: subscription.renews_at,
    }
}

pub fn rating_snapshot(rating: &Rating) -> RatingSnapshot {
    RatingSnapshot {
        id: rating.id().map(|id| id.to_uuid()),
        title: rating.title().to_string(),
        created_at: rating.created_at(),
        score: rating.score(),
        comment: rating.comment().map(str::to_string),
    }
}

pub fn bulletin_snapshot(bulletin: &Bulletin) -> BulletinSnapshot {
    BulletinSnapshot {
        id: bulletin.id.map(|id| id.to_uuid()),
        title: bulletin.title.clone(),
        created_at: bulletin.created_at,
        body: bulletin.body.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use idolhub_domain::EventId;

    #[test]
    fn event_snapshot_copies_every_field() {
        let created = Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();
        let starts = Utc.with_ymd_and_hms(2024, 8, 10, 18, 30, 0).unwrap();
        let id = EventId::new();
        let mut event = Event::new("Summer Live", created)
            .with_description("Outdoor stage")
            .with_venue("Makuhari")
            .starting_at(starts);
        event.assign_id(id);

        let snapshot = event_snapshot(&event);
        assert_eq!(snapshot.id, Some(id.to_uuid()));
        assert_eq!(snapshot.title, "Summer Live");
        assert_eq!(snapshot.created_at, created);
        assert_eq!(snapshot.description.as_deref(), Some("Outdoor stage"));
        assert_eq!(snapshot.venue.as_deref(), Some("Makuhari"));
        assert_eq!(snapshot.starts_at, Some(starts));
    }

    #[test]
    fn unpersisted_entities_keep_absent_identity() {
        let created = Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();
        let bulletin = Bulletin::new("Hello", "First post", created);
        let snapshot = bulletin_snapshot(&bulletin);
        assert!(snapshot.id.is_none());
        assert_eq!(snapshot.body, "First post");
    }

    #[test]
    fn rating_snapshot_keeps_score_and_comment() {
        let created = Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap();
        let rating = Rating::new("Encore", 4, created)
            .unwrap()
            .with_comment("Loved it");
        let snapshot = rating_snapshot(&rating);
        assert_eq!(snapshot.score, 4);
        assert_eq!(snapshot.comment.as_deref(), Some("Loved it"));
    }
}

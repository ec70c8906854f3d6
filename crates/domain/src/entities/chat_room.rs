//! ChatRoom entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::impl_entity;
use crate::ChatRoomId;

/// A chat room users can join. Users reference rooms; they do not own them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRoom {
    pub id: Option<ChatRoomId>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub topic: Option<String>,
}

impl ChatRoom {
    pub fn new(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: title.into(),
            created_at: now,
            topic: None,
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }
}

impl_entity!(ChatRoom, ChatRoomId);

//! Album and album item snapshots

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EventSnapshot, Linked, UserSnapshot};
use crate::types::SnapshotKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumItemSnapshot {
    pub id: Option<Uuid>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub endpoint: String,
    pub kind: SnapshotKind,
    pub tags: Vec<Linked<UserSnapshot>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<EventSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumSnapshot {
    pub id: Option<Uuid>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Same order as the album's items
    pub items: Vec<AlbumItemSnapshot>,
    pub author: Box<Linked<UserSnapshot>>,
}

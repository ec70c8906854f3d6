//! Bulletin entity - a post on a user's board

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::impl_entity;
use crate::BulletinId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bulletin {
    pub id: Option<BulletinId>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub body: String,
}

impl Bulletin {
    pub fn new(title: impl Into<String>, body: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: title.into(),
            created_at: now,
            body: body.into(),
        }
    }
}

impl_entity!(Bulletin, BulletinId);

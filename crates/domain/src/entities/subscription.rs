//! Subscription entity - owned 1:1 by a user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::impl_entity;
use crate::SubscriptionId;

/// A paid or free plan attached to a user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Option<SubscriptionId>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Plan name as sold (e.g., "Fan Club Gold")
    pub plan: String,
    pub active: bool,
    /// None for plans that never renew
    pub renews_at: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn new(title: impl Into<String>, plan: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: title.into(),
            created_at: now,
            plan: plan.into(),
            active: true,
            renews_at: None,
        }
    }

    pub fn renewing_at(mut self, renews_at: DateTime<Utc>) -> Self {
        self.renews_at = Some(renews_at);
        self
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.renews_at = None;
    }
}

impl_entity!(Subscription, SubscriptionId);

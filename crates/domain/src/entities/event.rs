//! Event entity - something users attend and album items can be tied to

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::impl_entity;
use crate::EventId;

/// A scheduled happening (concert, fan meeting, release party)
///
/// Simple data struct: every combination of field values is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<EventId>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub description: Option<String>,
    /// Where it takes place, free text
    pub venue: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
}

impl Event {
    pub fn new(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: title.into(),
            created_at: now,
            description: None,
            venue: None,
            starts_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    pub fn starting_at(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }
}

impl_entity!(Event, EventId);

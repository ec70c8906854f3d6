//! Links between snapshots
//!
//! A referenced entity is either expanded in place or, when the converter
//! reached it again while it was still being converted, cut down to an
//! [`EntityReference`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal stand-in for an entity that is already expanded further up the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityReference {
    pub id: Uuid,
    pub title: String,
}

/// A referenced entity inside a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "link", rename_all = "snake_case")]
pub enum Linked<T> {
    Expanded(T),
    Reference(EntityReference),
}

impl<T> Linked<T> {
    pub fn expanded(&self) -> Option<&T> {
        match self {
            Self::Expanded(snapshot) => Some(snapshot),
            Self::Reference(_) => None,
        }
    }

    pub fn reference(&self) -> Option<&EntityReference> {
        match self {
            Self::Expanded(_) => None,
            Self::Reference(reference) => Some(reference),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

//! Snapshot-side vocabulary enums
//!
//! These mirror the domain enums by canonical name only. A value missing
//! here makes conversion fail instead of silently degrading.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A name with no matching snapshot enum value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{enum_name} has no value named {value}")]
pub struct UnknownVariant {
    pub enum_name: &'static str,
    pub value: String,
}

/// Snapshot mirror of an album item kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SnapshotKind {
    Image,
    Music,
}

impl SnapshotKind {
    pub const ALL: [SnapshotKind; 2] = [Self::Image, Self::Music];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "IMAGE",
            Self::Music => "MUSIC",
        }
    }
}

impl std::fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SnapshotKind {
    type Err = UnknownVariant;

    /// Exact, case-sensitive match on the canonical name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                enum_name: "SnapshotKind",
                value: s.to_string(),
            })
    }
}

/// Snapshot mirror of a user authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SnapshotAuthority {
    Participant,
    Member,
    Organizer,
    Administrator,
}

impl SnapshotAuthority {
    pub const ALL: [SnapshotAuthority; 4] = [
        Self::Participant,
        Self::Member,
        Self::Organizer,
        Self::Administrator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Participant => "PARTICIPANT",
            Self::Member => "MEMBER",
            Self::Organizer => "ORGANIZER",
            Self::Administrator => "ADMINISTRATOR",
        }
    }
}

impl std::fmt::Display for SnapshotAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SnapshotAuthority {
    type Err = UnknownVariant;

    /// Exact, case-sensitive match on the canonical name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|authority| authority.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                enum_name: "SnapshotAuthority",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_only_canonical_names() {
        assert_eq!("IMAGE".parse::<SnapshotKind>(), Ok(SnapshotKind::Image));
        assert_eq!("MUSIC".parse::<SnapshotKind>(), Ok(SnapshotKind::Music));

        let err = "image".parse::<SnapshotKind>().unwrap_err();
        assert_eq!(err.to_string(), "SnapshotKind has no value named image");
    }

    #[test]
    fn authority_round_trips_every_value() {
        for authority in SnapshotAuthority::ALL {
            assert_eq!(authority.as_str().parse::<SnapshotAuthority>(), Ok(authority));
        }
        assert!("UNKNOWN".parse::<SnapshotAuthority>().is_err());
    }

    #[test]
    fn serialized_names_match_as_str() {
        for kind in SnapshotKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
        for authority in SnapshotAuthority::ALL {
            let json = serde_json::to_string(&authority).unwrap();
            assert_eq!(json, format!("\"{}\"", authority));
        }
    }
}

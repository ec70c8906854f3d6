//! AlbumItem kind

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// What an album item's endpoint points at
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemKind {
    /// Still image
    Image,
    /// Audio track
    Music,
    /// Kind name stored by a newer build, kept verbatim
    Unknown(String),
}

impl ItemKind {
    /// Every kind this build can create
    pub const KNOWN: [ItemKind; 2] = [Self::Image, Self::Music];

    /// Parse a stored name, keeping unrecognised names as `Unknown`
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| Self::Unknown(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Image => "IMAGE",
            Self::Music => "MUSIC",
            Self::Unknown(name) => name,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IMAGE" => Ok(Self::Image),
            "MUSIC" => Ok(Self::Music),
            _ => Err(DomainError::parse(format!("Unknown item kind: {}", s))),
        }
    }
}

impl From<String> for ItemKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<ItemKind> for String {
    fn from(value: ItemKind) -> Self {
        match value {
            ItemKind::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("image".parse::<ItemKind>().unwrap(), ItemKind::Image);
        assert_eq!("MUSIC".parse::<ItemKind>().unwrap(), ItemKind::Music);
        assert!("video".parse::<ItemKind>().is_err());
    }

    #[test]
    fn unknown_stored_kind_keeps_its_name() {
        let kind: ItemKind = serde_json::from_str("\"VIDEO\"").unwrap();
        assert_eq!(kind, ItemKind::Unknown("VIDEO".to_string()));
        assert_eq!(kind.as_str(), "VIDEO");
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"VIDEO\"");
    }

    #[test]
    fn serializes_with_canonical_name() {
        for kind in ItemKind::KNOWN {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }
}

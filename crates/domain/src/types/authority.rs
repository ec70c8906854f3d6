//! User authority - the tag that selects a user's concrete variant

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Role tag of a [`User`](crate::User)
///
/// Only `Participant` carries extra data (see [`UserRole`](crate::UserRole)).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Authority {
    /// Fan account that follows idols
    Participant,
    /// Regular account
    Member,
    /// Runs events and albums
    Organizer,
    /// Platform staff
    Administrator,
    /// Role name stored by a newer build, kept verbatim
    Unknown(String),
}

impl Authority {
    /// Every authority this build can create
    pub const KNOWN: [Authority; 4] = [
        Self::Participant,
        Self::Member,
        Self::Organizer,
        Self::Administrator,
    ];

    /// Parse a stored name, keeping unrecognised names as `Unknown`
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| Self::Unknown(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Participant => "PARTICIPANT",
            Self::Member => "MEMBER",
            Self::Organizer => "ORGANIZER",
            Self::Administrator => "ADMINISTRATOR",
            Self::Unknown(name) => name,
        }
    }
}

impl std::fmt::Display for Authority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Authority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PARTICIPANT" => Ok(Self::Participant),
            "MEMBER" => Ok(Self::Member),
            "ORGANIZER" => Ok(Self::Organizer),
            "ADMINISTRATOR" => Ok(Self::Administrator),
            _ => Err(DomainError::parse(format!("Unknown authority: {}", s))),
        }
    }
}

impl From<String> for Authority {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Authority> for String {
    fn from(value: Authority) -> Self {
        match value {
            Authority::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_canonical_name() {
        for authority in Authority::KNOWN {
            assert_eq!(authority.as_str().parse::<Authority>().unwrap(), authority);
            assert_eq!(Authority::from_name(authority.as_str()), authority);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "vip".parse::<Authority>().unwrap_err();
        assert_eq!(err, DomainError::parse("Unknown authority: vip"));
    }

    #[test]
    fn unrecognised_stored_name_is_kept() {
        let authority: Authority = serde_json::from_str("\"SUPERSTAR\"").unwrap();
        assert_eq!(authority, Authority::Unknown("SUPERSTAR".to_string()));
        assert_eq!(authority.to_string(), "SUPERSTAR");
        assert_eq!(serde_json::to_string(&authority).unwrap(), "\"SUPERSTAR\"");
    }
}

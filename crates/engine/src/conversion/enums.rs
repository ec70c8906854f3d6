//! Domain enum -> snapshot enum mapping, by canonical name.
//!
//! Matching on names instead of writing a `match` per pair means a value
//! added to one side only fails at conversion time with a `Mapping` error
//! rather than being silently mapped to a neighbour.

use std::str::FromStr;

use idolhub_domain::{Authority, ItemKind};
use idolhub_shared::{SnapshotAuthority, SnapshotKind, UnknownVariant};

use super::error::ConversionError;

pub fn map_kind(kind: &ItemKind) -> Result<SnapshotKind, ConversionError> {
    map_by_name(kind.as_str())
}

pub fn map_authority(authority: &Authority) -> Result<SnapshotAuthority, ConversionError> {
    map_by_name(authority.as_str())
}

fn map_by_name<S>(name: &str) -> Result<S, ConversionError>
where
    S: FromStr<Err = UnknownVariant>,
{
    name.parse::<S>().map_err(ConversionError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_kind_maps_to_same_name() {
        for kind in ItemKind::KNOWN {
            let mapped = map_kind(&kind).unwrap();
            assert_eq!(mapped.as_str(), kind.as_str());
        }
    }

    #[test]
    fn every_known_authority_maps_to_same_name() {
        for authority in Authority::KNOWN {
            let mapped = map_authority(&authority).unwrap();
            assert_eq!(mapped.as_str(), authority.as_str());
        }
    }

    #[test]
    fn unknown_values_fail_closed_with_their_stored_name() {
        assert_eq!(
            map_kind(&ItemKind::Unknown("VIDEO".to_string())),
            Err(ConversionError::Mapping {
                enum_name: "SnapshotKind",
                value: "VIDEO".to_string(),
            })
        );
        assert_eq!(
            map_authority(&Authority::from_name("SUPERSTAR")),
            Err(ConversionError::Mapping {
                enum_name: "SnapshotAuthority",
                value: "SUPERSTAR".to_string(),
            })
        );
    }
}

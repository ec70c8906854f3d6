//! Conversion error types.

use idolhub_shared::UnknownVariant;

/// Why a domain graph could not be turned into a snapshot.
///
/// Any of these aborts the whole top-level conversion; there is no partial
/// snapshot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A domain enum value has no snapshot counterpart of the same name.
    #[error("No snapshot value for {enum_name} named {value}")]
    Mapping {
        enum_name: &'static str,
        value: String,
    },

    /// The entity's runtime variant is not one this build can convert.
    #[error("Unsupported {entity_type} variant {variant}{}", describe_id(.id))]
    UnsupportedVariant {
        entity_type: &'static str,
        variant: String,
        id: Option<String>,
    },

    /// A required relation is absent, or a referenced ID does not resolve.
    #[error("Missing required reference {entity_type}.{relation}{}", describe_id(.id))]
    MissingReference {
        entity_type: &'static str,
        relation: &'static str,
        id: Option<String>,
    },
}

fn describe_id(id: &Option<String>) -> String {
    id.as_deref()
        .map(|id| format!(" (id {})", id))
        .unwrap_or_default()
}

impl ConversionError {
    /// Create a MissingReference error; `id` is the unresolved ID, if any.
    pub fn missing_reference(
        entity_type: &'static str,
        relation: &'static str,
        id: Option<impl ToString>,
    ) -> Self {
        Self::MissingReference {
            entity_type,
            relation,
            id: id.map(|id| id.to_string()),
        }
    }

    /// Create an UnsupportedVariant error for the entity with identity `id`.
    pub fn unsupported_variant(
        entity_type: &'static str,
        variant: impl ToString,
        id: Option<impl ToString>,
    ) -> Self {
        Self::UnsupportedVariant {
            entity_type,
            variant: variant.to_string(),
            id: id.map(|id| id.to_string()),
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping { .. })
    }

    pub fn is_unsupported_variant(&self) -> bool {
        matches!(self, Self::UnsupportedVariant { .. })
    }

    pub fn is_missing_reference(&self) -> bool {
        matches!(self, Self::MissingReference { .. })
    }
}

impl From<UnknownVariant> for ConversionError {
    fn from(err: UnknownVariant) -> Self {
        Self::Mapping {
            enum_name: err.enum_name,
            value: err.value,
        }
    }
}

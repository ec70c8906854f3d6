//! Domain -> snapshot conversion.
//!
//! - `converter` - dispatch engine and per-call traversal
//! - `guard` - in-progress set that cuts reference cycles
//! - `enums` - name-based enum mapping
//! - `leaves` - infallible conversions for entities with no references

mod converter;
mod enums;
mod error;
mod guard;
mod leaves;


pub use converter::SnapshotConverter;
pub use enums::{map_authority, map_kind};
pub use error::ConversionError;
pub use leaves::{
    bulletin_snapshot, chat_room_snapshot, contact_info_snapshot, event_snapshot,
    rating_snapshot, subscription_snapshot,
};

//! Shared vocabulary enums
//!
//! Each enum has a canonical upper-case name (`as_str`). The snapshot side
//! defines its own copies; the two are matched by name, never by position.

mod authority;
mod item_kind;

pub use authority::Authority;
pub use item_kind::ItemKind;

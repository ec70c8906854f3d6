//! IdolHub Engine library.
//!
//! Turns the mutable domain graph into immutable snapshot graphs ready for
//! transport.
//!
//! ## Structure
//!
//! - `conversion/` - the snapshot converter and its error type
//! - `infrastructure/` - resolver port, in-memory store, configuration, tracing

pub mod conversion;
pub mod infrastructure;

pub use conversion::{ConversionError, SnapshotConverter};
pub use infrastructure::config::EngineConfig;
pub use infrastructure::memory_store::InMemoryEntityStore;
pub use infrastructure::ports::EntityResolver;
pub use infrastructure::telemetry::init_tracing;

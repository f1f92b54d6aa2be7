//! Shared types for the Coral floor
//!
//! Wire models exchanged with the restaurant API (tables, catalog,
//! order lines, print payloads) and the push channel message types.

pub mod error;
pub mod message;
pub mod models;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use serde::{Deserialize, Serialize};

// Message bus re-exports (for convenient access)
pub use message::{BusMessage, EventType, FloorEvent};

//! Coral Client - network access for the floor controller
//!
//! - [`HttpClient`]: REST calls against the restaurant API, exposed through
//!   the [`PosApi`] trait so controllers can be driven by a fake in tests.
//! - [`MessageClient`]: push channel carrying "new order" notifications.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod message;

pub use api::{OrderQuery, PosApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Message types and clients
pub use message::{BusMessage, EventType, MessageClient, MessageError};

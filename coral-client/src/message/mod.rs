// coral-client/src/message/mod.rs
// 推送通道模块 - 客户端、传输层和错误类型

pub mod client;
pub mod transport;

pub use client::MessageClient;
pub use shared::message::{BusMessage, EventType, FloorEvent};
pub use transport::{MemoryTransport, TcpTransport, Transport};

use thiserror::Error;

/// Upper bound for a single frame payload
pub const MAX_PAYLOAD_LEN: usize = 1024 * 1024;

/// 推送通道错误
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! 推送通道消息类型定义
//!
//! Shared between the push server and floor clients, for both in-process
//! (memory) and network (TCP) transports.
//!
//! Frame layout on the wire:
//!
//! | field          | size | notes                    |
//! |----------------|------|--------------------------|
//! | event type     | 1    | [`EventType`] as `u8`    |
//! | request id     | 16   | UUID bytes               |
//! | correlation id | 16   | UUID bytes, nil for none |
//! | payload length | 4    | little endian `u32`      |
//! | payload        | n    | JSON                     |

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use uuid::Uuid;

pub mod payload;
pub use payload::*;

/// 协议版本号
pub const PROTOCOL_VERSION: u16 = 1;

/// Size of the fixed frame header in bytes
pub const FRAME_HEADER_LEN: usize = 1 + 16 + 16 + 4;

/// 消息事件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// 握手消息
    Handshake = 0,
    /// 业务通知 (new order, ...)
    Notification = 1,
}

impl TryFrom<u8> for EventType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EventType::Handshake),
            1 => Ok(EventType::Notification),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Handshake => write!(f, "handshake"),
            EventType::Notification => write!(f, "notification"),
        }
    }
}

/// 消息总线消息体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusMessage {
    pub request_id: Uuid,
    pub event_type: EventType,
    pub correlation_id: Option<Uuid>,
    pub payload: Vec<u8>,
}

impl BusMessage {
    pub fn new(event_type: EventType, payload: Vec<u8>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            event_type,
            correlation_id: None,
            payload,
        }
    }

    /// 设置关联 ID
    pub fn with_correlation_id(mut self, id: Uuid) -> Self {
        self.correlation_id = Some(id);
        self
    }

    /// 创建握手消息
    pub fn handshake(payload: &HandshakePayload) -> Result<Self, serde_json::Error> {
        Ok(Self::new(EventType::Handshake, serde_json::to_vec(payload)?))
    }

    /// 创建业务通知消息
    pub fn notification(event: &FloorEvent) -> Result<Self, serde_json::Error> {
        Ok(Self::new(EventType::Notification, serde_json::to_vec(event)?))
    }

    /// 解析载荷为指定类型
    pub fn parse_payload<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }

    /// Encode header and payload into one frame
    pub fn encode_frame(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(FRAME_HEADER_LEN + self.payload.len());
        data.push(self.event_type as u8);
        data.extend_from_slice(self.request_id.as_bytes());
        data.extend_from_slice(self.correlation_id.unwrap_or(Uuid::nil()).as_bytes());
        data.extend_from_slice(&(self.payload.len() as u32).to_le_bytes());
        data.extend_from_slice(&self.payload);
        data
    }
}

/// Decoded fixed-size frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub event_type: EventType,
    pub request_id: Uuid,
    pub correlation_id: Option<Uuid>,
    pub payload_len: usize,
}

impl FrameHeader {
    /// Returns `None` when the event type byte is unknown
    pub fn decode(buf: &[u8; FRAME_HEADER_LEN]) -> Option<Self> {
        let event_type = EventType::try_from(buf[0]).ok()?;

        let mut id = [0u8; 16];
        id.copy_from_slice(&buf[1..17]);
        let request_id = Uuid::from_bytes(id);

        id.copy_from_slice(&buf[17..33]);
        let correlation_raw = Uuid::from_bytes(id);
        let correlation_id = (!correlation_raw.is_nil()).then_some(correlation_raw);

        let mut len = [0u8; 4];
        len.copy_from_slice(&buf[33..37]);

        Some(Self {
            event_type,
            request_id,
            correlation_id,
            payload_len: u32::from_le_bytes(len) as usize,
        })
    }

    pub fn into_message(self, payload: Vec<u8>) -> BusMessage {
        BusMessage {
            request_id: self.request_id,
            event_type: self.event_type,
            correlation_id: self.correlation_id,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TableNumber;

    #[test]
    fn test_handshake_message() {
        let payload = HandshakePayload {
            version: PROTOCOL_VERSION,
            client_name: Some("test-client".to_string()),
            client_version: Some("0.1.0".to_string()),
        };

        let msg = BusMessage::handshake(&payload).unwrap();
        assert_eq!(msg.event_type, EventType::Handshake);
        assert!(!msg.request_id.is_nil());

        let parsed: HandshakePayload = msg.parse_payload().unwrap();
        assert_eq!(parsed.version, PROTOCOL_VERSION);
    }

    #[test]
    fn test_frame_header_decode() {
        let msg = BusMessage::notification(&FloorEvent::NewOrder {
            table_number: TableNumber::from(5),
        })
        .unwrap();
        let frame = msg.encode_frame();

        let mut header = [0u8; FRAME_HEADER_LEN];
        header.copy_from_slice(&frame[..FRAME_HEADER_LEN]);
        let decoded = FrameHeader::decode(&header).unwrap();

        assert_eq!(decoded.event_type, EventType::Notification);
        assert_eq!(decoded.request_id, msg.request_id);
        assert_eq!(decoded.correlation_id, None);
        assert_eq!(decoded.payload_len, frame.len() - FRAME_HEADER_LEN);
    }

    #[test]
    fn test_unknown_event_type_rejected() {
        let mut header = [0u8; FRAME_HEADER_LEN];
        header[0] = 9;
        assert!(FrameHeader::decode(&header).is_none());
    }
}

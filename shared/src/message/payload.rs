use serde::{Deserialize, Serialize};

use crate::models::TableNumber;

// ==================== Payloads ====================

/// 握手载荷 (客户端 -> 推送服务端)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandshakePayload {
    /// 协议版本
    pub version: u16,
    /// 客户端名称/标识
    pub client_name: Option<String>,
    /// 客户端版本
    pub client_version: Option<String>,
}

/// 业务事件 (服务端 -> 客户端)
///
/// Encoded as `{ "event": "new_order", "data": { "table_number": 5 } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum FloorEvent {
    /// A line was added to a table's order
    NewOrder { table_number: TableNumber },
}

impl FloorEvent {
    pub fn table_number(&self) -> &TableNumber {
        match self {
            FloorEvent::NewOrder { table_number } => table_number,
        }
    }
}

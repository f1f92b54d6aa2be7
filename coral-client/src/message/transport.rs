use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::{Mutex, broadcast};

use super::{MAX_PAYLOAD_LEN, MessageError};
use shared::message::{BusMessage, FRAME_HEADER_LEN, FrameHeader};

/// Transport abstraction for the push channel
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn read_message(&self) -> Result<BusMessage, MessageError>;
    async fn write_message(&self, msg: &BusMessage) -> Result<(), MessageError>;
    async fn close(&self) -> Result<(), MessageError>;
}

/// Read one frame: fixed header, then the payload it announces
pub async fn read_frame<R: AsyncRead + Unpin>(reader: &mut R) -> Result<BusMessage, MessageError> {
    let mut header_buf = [0u8; FRAME_HEADER_LEN];
    reader.read_exact(&mut header_buf).await?;

    let header = FrameHeader::decode(&header_buf)
        .ok_or_else(|| MessageError::InvalidMessage("Invalid event type".into()))?;

    if header.payload_len > MAX_PAYLOAD_LEN {
        return Err(MessageError::InvalidMessage(format!(
            "Payload too large: {} bytes",
            header.payload_len
        )));
    }

    let mut payload = vec![0u8; header.payload_len];
    reader.read_exact(&mut payload).await?;

    Ok(header.into_message(payload))
}

/// TCP Transport Implementation
#[derive(Debug, Clone)]
pub struct TcpTransport {
    reader: Arc<Mutex<OwnedReadHalf>>,
    writer: Arc<Mutex<OwnedWriteHalf>>,
}

impl TcpTransport {
    pub async fn connect(addr: &str) -> Result<Self, MessageError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|e| MessageError::Connection(e.to_string()))?;
        let (reader, writer) = stream.into_split();
        Ok(Self {
            reader: Arc::new(Mutex::new(reader)),
            writer: Arc::new(Mutex::new(writer)),
        })
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn read_message(&self) -> Result<BusMessage, MessageError> {
        let mut reader = self.reader.lock().await;
        read_frame(&mut *reader).await
    }

    async fn write_message(&self, msg: &BusMessage) -> Result<(), MessageError> {
        let mut writer = self.writer.lock().await;
        writer.write_all(&msg.encode_frame()).await?;
        Ok(())
    }

    async fn close(&self) -> Result<(), MessageError> {
        let mut writer = self.writer.lock().await;
        writer.shutdown().await?;
        Ok(())
    }
}

/// Memory Transport Implementation (for In-Process communication)
#[derive(Debug, Clone)]
pub struct MemoryTransport {
    /// Receiver for messages FROM server (broadcasts)
    rx: Arc<Mutex<broadcast::Receiver<BusMessage>>>,
    /// Sender for messages TO server
    tx: broadcast::Sender<BusMessage>,
}

impl MemoryTransport {
    /// Create a new memory transport
    ///
    /// # Arguments
    /// * `server_broadcast_tx` - The server's broadcast sender (to subscribe to updates)
    /// * `client_to_server_tx` - The channel to send messages TO the server
    pub fn new(
        server_broadcast_tx: &broadcast::Sender<BusMessage>,
        client_to_server_tx: &broadcast::Sender<BusMessage>,
    ) -> Self {
        Self {
            rx: Arc::new(Mutex::new(server_broadcast_tx.subscribe())),
            tx: client_to_server_tx.clone(),
        }
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn read_message(&self) -> Result<BusMessage, MessageError> {
        let mut rx = self.rx.lock().await;
        rx.recv()
            .await
            .map_err(|e| MessageError::Connection(format!("Memory channel error: {}", e)))
    }

    async fn write_message(&self, msg: &BusMessage) -> Result<(), MessageError> {
        self.tx
            .send(msg.clone())
            .map_err(|e| MessageError::Connection(format!("Failed to send to server: {}", e)))?;
        Ok(())
    }

    async fn close(&self) -> Result<(), MessageError> {
        Ok(())
    }
}

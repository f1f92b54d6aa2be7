use crate::message::MessageError;
use crate::message::transport::{MemoryTransport, TcpTransport, Transport};
use shared::message::{BusMessage, HandshakePayload, PROTOCOL_VERSION};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;

/// Push channel client
///
/// Reads frames from the server in a background task and rebroadcasts
/// them to every subscriber.
#[derive(Debug, Clone)]
pub struct MessageClient {
    transport: ClientTransport,
    event_tx: broadcast::Sender<BusMessage>,
    connected: Arc<AtomicBool>,
}

#[derive(Debug, Clone)]
enum ClientTransport {
    Tcp(TcpTransport),
    Memory(MemoryTransport),
}

impl ClientTransport {
    async fn read_message(&self) -> Result<BusMessage, MessageError> {
        match self {
            ClientTransport::Tcp(t) => t.read_message().await,
            ClientTransport::Memory(t) => t.read_message().await,
        }
    }

    async fn write_message(&self, msg: &BusMessage) -> Result<(), MessageError> {
        match self {
            ClientTransport::Tcp(t) => t.write_message(msg).await,
            ClientTransport::Memory(t) => t.write_message(msg).await,
        }
    }

    async fn close(&self) -> Result<(), MessageError> {
        match self {
            ClientTransport::Tcp(t) => t.close().await,
            ClientTransport::Memory(t) => t.close().await,
        }
    }
}

impl MessageClient {
    fn new(transport: ClientTransport) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        let connected = Arc::new(AtomicBool::new(true));

        let client = Self {
            transport: transport.clone(),
            event_tx: event_tx.clone(),
            connected: connected.clone(),
        };

        // Spawn background task to dispatch messages
        tokio::spawn(async move {
            loop {
                match transport.read_message().await {
                    Ok(msg) => {
                        if let Err(e) = event_tx.send(msg) {
                            tracing::debug!("No subscribers for push message: {}", e);
                        }
                    }
                    Err(e) => {
                        tracing::error!("Push transport read error: {}", e);
                        // 连接断开，客户端需重新 connect
                        break;
                    }
                }
            }
            connected.store(false, Ordering::SeqCst);
        });

        client
    }

    async fn handshake(transport: &ClientTransport, client_name: &str) -> Result<(), MessageError> {
        let payload = HandshakePayload {
            version: PROTOCOL_VERSION,
            client_name: Some(client_name.to_string()),
            client_version: Some(env!("CARGO_PKG_VERSION").to_string()),
        };
        transport
            .write_message(&BusMessage::handshake(&payload)?)
            .await
    }

    /// Connect via TCP
    pub async fn connect(addr: &str, client_name: &str) -> Result<Self, MessageError> {
        let transport = ClientTransport::Tcp(TcpTransport::connect(addr).await?);
        Self::handshake(&transport, client_name).await?;
        tracing::info!(addr = %addr, "Push channel connected");
        Ok(Self::new(transport))
    }

    /// Create in-memory client
    pub fn memory(
        server_broadcast_tx: &broadcast::Sender<BusMessage>,
        client_to_server_tx: &broadcast::Sender<BusMessage>,
    ) -> Self {
        let transport = MemoryTransport::new(server_broadcast_tx, client_to_server_tx);
        Self::new(ClientTransport::Memory(transport))
    }

    /// Subscribe to incoming messages
    ///
    /// Only messages arriving after this call are delivered.
    pub fn subscribe(&self) -> broadcast::Receiver<BusMessage> {
        self.event_tx.subscribe()
    }

    /// Send a message (Fire and Forget)
    pub async fn send(&self, msg: &BusMessage) -> Result<(), MessageError> {
        self.transport.write_message(msg).await
    }

    /// Whether the background reader is still running
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Close the client connection
    pub async fn close(&self) -> Result<(), MessageError> {
        self.transport.close().await
    }
}

// coral-client/tests/push_channel.rs
// 推送通道 TCP 集成测试

use coral_client::message::transport::read_frame;
use coral_client::{ClientConfig, EventType, MessageClient};
use shared::message::{FloorEvent, HandshakePayload, PROTOCOL_VERSION};
use shared::models::TableNumber;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_tcp_handshake_and_notification() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let (ready_tx, ready_rx) = oneshot::channel::<()>();
    let (handshake_tx, handshake_rx) = oneshot::channel::<HandshakePayload>();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let hello = read_frame(&mut stream).await.unwrap();
        assert_eq!(hello.event_type, EventType::Handshake);
        handshake_tx.send(hello.parse_payload().unwrap()).unwrap();

        ready_rx.await.unwrap();
        let note = coral_client::BusMessage::notification(&FloorEvent::NewOrder {
            table_number: TableNumber::from(5),
        })
        .unwrap();
        stream.write_all(&note.encode_frame()).await.unwrap();
        // Keep the socket open until the client is done reading
        tokio::time::sleep(Duration::from_millis(500)).await;
    });

    let config = ClientConfig::default()
        .with_push_addr(&addr)
        .with_client_name("test-floor");
    let client = config.build_message_client().await.unwrap();

    let handshake = handshake_rx.await.unwrap();
    assert_eq!(handshake.version, PROTOCOL_VERSION);
    assert_eq!(handshake.client_name.as_deref(), Some("test-floor"));

    let mut events = client.subscribe();
    ready_tx.send(()).unwrap();

    let msg = tokio::time::timeout(Duration::from_secs(2), events.recv())
        .await
        .unwrap()
        .unwrap();
    let event: FloorEvent = msg.parse_payload().unwrap();
    assert_eq!(event.table_number(), &TableNumber::from(5));
}

#[tokio::test]
async fn test_connect_without_address_fails() {
    let err = ClientConfig::default().build_message_client().await.unwrap_err();
    assert!(err.to_string().contains("push_addr"));
}

#[tokio::test]
async fn test_reader_stops_when_server_closes() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let _ = read_frame(&mut stream).await;
        // Dropping the stream closes the connection
    });

    let client = MessageClient::connect(&addr, "test-floor").await.unwrap();
    let mut waited = 0;
    while client.is_connected() && waited < 40 {
        tokio::time::sleep(Duration::from_millis(50)).await;
        waited += 1;
    }
    assert!(!client.is_connected());
}

//! Push channel listener

use super::*;
use coral_client::{BusMessage, EventType, MessageClient};
use shared::message::FloorEvent;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

impl FloorController {
    /// Spawn a task that highlights tables on "new order" notifications
    /// until `cancel` fires or the channel closes.
    pub fn spawn_push_listener(
        &self,
        client: &MessageClient,
        cancel: CancellationToken,
    ) -> JoinHandle<()> {
        let mut rx = client.subscribe();
        let controller = self.clone();

        tokio::spawn(async move {
            tracing::info!("Push listener started");
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    msg = rx.recv() => match msg {
                        Ok(msg) => controller.handle_push(&msg).await,
                        Err(RecvError::Lagged(n)) => {
                            tracing::warn!(skipped = n, "Push listener lagged");
                        }
                        Err(RecvError::Closed) => {
                            tracing::warn!("Push channel closed");
                            break;
                        }
                    },
                }
            }
            tracing::info!("Push listener stopped");
        })
    }

    /// Apply one push message; anything but a floor notification is ignored
    pub async fn handle_push(&self, msg: &BusMessage) {
        if msg.event_type != EventType::Notification {
            tracing::debug!(event_type = %msg.event_type, "Ignoring push message");
            return;
        }

        match msg.parse_payload::<FloorEvent>() {
            Ok(FloorEvent::NewOrder { table_number }) => {
                self.refresh_highlight(&table_number).await;
            }
            Err(e) => {
                tracing::warn!(request_id = %msg.request_id, error = %e, "Malformed push payload");
            }
        }
    }
}

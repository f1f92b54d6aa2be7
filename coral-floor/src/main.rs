use std::sync::Arc;

use anyhow::Context;
use coral_floor::logger::init_logger_with_file;
use coral_floor::{FloorConfig, FloorController, UiEvent};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境变量与配置
    dotenv::dotenv().ok();
    let config = FloorConfig::from_env()?;

    // 2. 日志
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    tracing::info!(api = %config.api_base_url, "Coral floor starting...");

    // 3. 控制器
    let client_config = config.client_config();
    let http = client_config
        .build_http_client()
        .context("Failed to build HTTP client")?;
    let controller = FloorController::with_location(Arc::new(http), config.default_location);

    if let Err(e) = controller.load_reference_products().await {
        tracing::warn!(error = %e, "Continuing without reference products");
    }
    if controller.dispatch(UiEvent::LoadTables).await.is_ok() {
        let board = controller.snapshot().await.board;
        match &board.empty_message {
            Some(message) => tracing::info!(location = %board.location, "{}", message),
            None => {
                for tile in &board.tiles {
                    tracing::info!(
                        table = %tile.label,
                        open = tile.highlighted,
                        x = tile.layout.x,
                        y = tile.layout.y,
                        "Table"
                    );
                }
            }
        }
    }

    // 4. 推送通道 (可选)
    let cancel = CancellationToken::new();
    let listener = match client_config.push_addr.as_deref() {
        Some(_) => match client_config.build_message_client().await {
            Ok(client) => Some((controller.spawn_push_listener(&client, cancel.clone()), client)),
            Err(e) => {
                tracing::warn!(error = %e, "Push channel unavailable, live highlights disabled");
                None
            }
        },
        None => None,
    };

    // 5. 等待退出信号
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    tracing::info!("Shutting down");
    cancel.cancel();

    if let Some((handle, client)) = listener {
        if let Err(e) = handle.await {
            tracing::warn!(error = %e, "Push listener task failed");
        }
        if let Err(e) = client.close().await {
            tracing::debug!(error = %e, "Push channel close failed");
        }
    }

    Ok(())
}

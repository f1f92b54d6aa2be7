//! Logging Infrastructure
//!
//! Console output (pretty or JSON) plus optional daily rotating files under
//! `{log_dir}/app`, cleaned up after 14 days.

use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Days an application log file is kept
pub const LOG_RETENTION_DAYS: i64 = 14;

/// Clean up old application log files
///
/// Removes `app.YYYY-MM-DD` files (the daily appender's naming) older than
/// [`LOG_RETENTION_DAYS`]. Returns the number of removed files.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    use chrono::{Local, NaiveDate};

    let cutoff = Local::now().date_naive() - chrono::Duration::days(LOG_RETENTION_DAYS);
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if let Some(date_part) = name.strip_prefix("app.")
            && let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && date < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(removed)
}

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug"), overridden by `RUST_LOG`
/// * `json_format` - JSON console output instead of the pretty format
/// * `log_dir` - Optional directory for rotating log files
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// coral_floor::logger::init_logger_with_file("debug", false, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let file_layer = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            let app_log_dir = log_dir.join("app");
            fs::create_dir_all(&app_log_dir)?;

            // Daily rotating appender, subject to cleanup
            let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
            let layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(app_log));

            tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));

            Some(if json_format { layer.json().boxed() } else { layer.boxed() })
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Periodic cleanup task - runs every hour to clean old logs
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
        sleep(Duration::from_secs(3600)).await;
    }
}

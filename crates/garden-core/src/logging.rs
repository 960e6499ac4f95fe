//! Logging configuration using tracing

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Directory name used under the platform data dir.
pub const APP_DIR_NAME: &str = "herbal-garden";

const LOG_FILE_NAME: &str = "herbal-garden.log";

/// Initialize the logging subsystem
///
/// Logs are written to `<data_dir>/herbal-garden/logs/`, never to the
/// terminal, since the TUI owns the screen.
/// Log level is controlled by the `GARDEN_LOG` environment variable.
///
/// # Examples
/// ```bash
/// GARDEN_LOG=debug cargo run
/// GARDEN_LOG=garden_app=trace cargo run
/// ```
pub fn init(data_dir: Option<&Path>) -> Result<()> {
    let log_dir = get_log_directory(data_dir);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info, allow override via GARDEN_LOG
    let env_filter = EnvFilter::try_from_env("GARDEN_LOG")
        .unwrap_or_else(|_| EnvFilter::new("herbal_garden=info,garden_app=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Herbal Garden starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Resolve the application data directory (preferences, logs).
///
/// An explicit override wins; otherwise the platform local data dir is used,
/// falling back to the working directory.
pub fn app_data_dir(override_dir: Option<&Path>) -> PathBuf {
    match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME),
    }
}

/// Get the log directory path
fn get_log_directory(data_dir: Option<&Path>) -> PathBuf {
    app_data_dir(data_dir).join("logs")
}

/// Get the log file path for the current day
pub fn get_current_log_file(data_dir: Option<&Path>) -> PathBuf {
    get_log_directory(data_dir).join(LOG_FILE_NAME)
}

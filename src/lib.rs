//! Herbal Garden Library
//!
//! A terminal garden for browsing medicinal plants. The binary only parses
//! arguments; startup lives here so integration tests can reach it.

use std::path::{Path, PathBuf};

use garden_app::EngineOptions;
use garden_core::prelude::*;

/// Startup options gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Directory for preferences and logs
    pub data_dir: Option<PathBuf>,
    /// Explicit settings file
    pub config_path: Option<PathBuf>,
}

impl LaunchOptions {
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            data_dir: self.data_dir.clone(),
            config_path: self.config_path.clone(),
        }
    }
}

/// Initialize logging and run the TUI until the user quits.
pub async fn run(options: LaunchOptions) -> Result<()> {
    start_logging(options.data_dir.as_deref())?;
    info!(
        "Launching with data dir {:?}, config {:?}",
        options.data_dir, options.config_path
    );
    garden_tui::run(options.engine_options()).await
}

/// Set up file logging. A log directory that cannot be created only costs
/// the log file; fatal errors are returned.
pub fn start_logging(data_dir: Option<&Path>) -> Result<()> {
    match garden_core::logging::init(data_dir) {
        Err(e) if !e.is_fatal() => {
            eprintln!("Warning: logging disabled: {}", e);
            Ok(())
        }
        other => other,
    }
}

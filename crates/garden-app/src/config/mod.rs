//! Configuration and persisted preferences for Herbal Garden
//!
//! Supports:
//! - `<config dir>/herbal-garden/config.toml` - Global settings
//! - `<data dir>/herbal-garden/preferences.toml` - Theme and text size

pub mod preferences;
pub mod settings;
pub mod types;

pub use preferences::{
    host_theme, preferences_file_path, MemoryBackend, PreferenceBackend, PreferenceStore,
    TomlFileBackend, TEXT_SIZE_KEY, THEME_KEY,
};
pub use settings::{config_file_path, init_config_file, load_settings};
pub use types::*;

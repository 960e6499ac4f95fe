//! Settings file loading
//!
//! `config.toml` lives in the per-user configuration directory. A missing or
//! unreadable file never prevents startup; defaults are used instead.

use std::path::{Path, PathBuf};

use garden_core::logging::APP_DIR_NAME;
use garden_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";

/// Resolve the settings file location.
///
/// An explicit `override_path` wins; otherwise
/// `<config dir>/herbal-garden/config.toml`.
pub fn config_file_path(override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(path) => path.to_path_buf(),
        None => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILENAME),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `config_path`
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default `config.toml` if none exists yet.
///
/// Idempotent: an existing file is never touched.
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(())
}

fn generate_default_config() -> String {
    r#"# Herbal Garden Configuration

[search]
delay_ms = 1000         # Simulated lookup latency (max 10000)

[ui]
icons = "unicode"       # "unicode" or "nerd_fonts"
animations = true       # Landing page sway and loading spinner
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::IconMode;
    use tempfile::tempdir;

    #[test]
    fn test_config_file_path_override() {
        let path = config_file_path(Some(Path::new("/tmp/custom.toml")));
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_config_file_path_default() {
        let path = config_file_path(None);
        assert!(path.ends_with("herbal-garden/config.toml"));
    }

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        let config = r#"
[search]
delay_ms = 200

[ui]
icons = "nerd_fonts"
animations = false
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.search.delay_ms, 200);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(!settings.ui.animations);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        init_config_file(&path).unwrap();
        assert!(path.exists());

        // The generated file must parse back to defaults
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[search]\ndelay_ms = 5\n").unwrap();

        init_config_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[search]\ndelay_ms = 5\n");
    }
}

//! Persistent display preferences (theme and text size)
//!
//! The store is loaded once at startup and written through on every change.
//! Storage is abstracted behind [`PreferenceBackend`] so the application can
//! be exercised against an in-memory map.
//!
//! Two string keys are persisted: `textSize` and `theme`. Values that do not
//! parse fall back to defaults: text size to medium, theme to the host's
//! appearance (dark when it cannot be detected).

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use garden_core::logging::app_data_dir;
use garden_core::prelude::*;
use garden_core::{TextSize, Theme};

use super::types::Preferences;

pub const TEXT_SIZE_KEY: &str = "textSize";
pub const THEME_KEY: &str = "theme";

const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Key/value storage for preferences.
pub trait PreferenceBackend: fmt::Debug + Send {
    /// Stored value for `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// TOML file backend
// ─────────────────────────────────────────────────────────────────────────────

/// Location of the preferences file under the data directory.
pub fn preferences_file_path(data_dir: Option<&Path>) -> PathBuf {
    app_data_dir(data_dir).join(PREFERENCES_FILENAME)
}

/// Preferences stored as a flat TOML table.
#[derive(Debug)]
pub struct TomlFileBackend {
    path: PathBuf,
    values: toml::Table,
}

impl TomlFileBackend {
    /// Open `path`, starting empty if the file is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = Self::read_table(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(path: &Path) -> toml::Table {
        if !path.exists() {
            debug!("No preferences file at {:?}", path);
            return toml::Table::new();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match content.parse::<toml::Table>() {
                Ok(table) => {
                    debug!("Loaded preferences from {:?}", path);
                    table
                }
                Err(e) => {
                    warn!("Failed to parse {:?}: {}", path, e);
                    toml::Table::new()
                }
            },
            Err(e) => {
                warn!("Failed to read {:?}: {}", path, e);
                toml::Table::new()
            }
        }
    }

    /// Atomic write: temp file in the same directory, then rename.
    fn flush(&self) -> Result<()> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        std::fs::create_dir_all(&dir).map_err(|e| {
            Error::preferences(&self.path, format!("Failed to create directory: {}", e))
        })?;

        let header = "# Herbal Garden display preferences\n\n";
        let content = toml::to_string(&self.values)?;

        let temp_path = dir.join(".preferences.toml.tmp");
        std::fs::write(&temp_path, format!("{}{}", header, content)).map_err(|e| {
            Error::preferences(&self.path, format!("Failed to write temp file: {}", e))
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            Error::preferences(&self.path, format!("Failed to rename temp file: {}", e))
        })?;

        debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

impl PreferenceBackend for TomlFileBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_string)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .insert(key.to_string(), toml::Value::String(value.to_string()));
        self.flush()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory backend
// ─────────────────────────────────────────────────────────────────────────────

/// Shared in-memory map. Clones share storage, so a second store loaded from
/// a clone observes the first store's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with raw values.
    pub fn with_values<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let backend = Self::new();
        if let Ok(mut values) = backend.values.lock() {
            for (k, v) in pairs {
                values.insert(k.to_string(), v.to_string());
            }
        }
        backend
    }
}

impl PreferenceBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| Error::preferences("<memory>", "preference map poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Store
// ─────────────────────────────────────────────────────────────────────────────

/// The host's light/dark appearance, dark when undetectable.
pub fn host_theme() -> Theme {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => Theme::Light,
        _ => Theme::Dark,
    }
}

/// Loaded preferences plus the backend they are written through to.
#[derive(Debug)]
pub struct PreferenceStore {
    backend: Box<dyn PreferenceBackend>,
    current: Preferences,
}

impl PreferenceStore {
    /// Load from `backend`, using the host appearance as the theme default.
    pub fn load(backend: impl PreferenceBackend + 'static) -> Self {
        Self::load_with_default_theme(backend, host_theme())
    }

    /// Load from `backend` with an explicit theme default.
    pub fn load_with_default_theme(
        backend: impl PreferenceBackend + 'static,
        default_theme: Theme,
    ) -> Self {
        let text_size = match backend.read(TEXT_SIZE_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored text size: {}", e);
                TextSize::default()
            }),
            None => TextSize::default(),
        };

        let theme = match backend.read(THEME_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored theme: {}", e);
                default_theme
            }),
            None => default_theme,
        };

        debug!("Preferences: theme={}, text_size={}", theme, text_size);

        Self {
            backend: Box::new(backend),
            current: Preferences { theme, text_size },
        }
    }

    /// Fresh in-memory store with dark theme and medium text.
    pub fn in_memory() -> Self {
        Self::load_with_default_theme(MemoryBackend::new(), Theme::Dark)
    }

    pub fn get(&self) -> Preferences {
        self.current
    }

    pub fn theme(&self) -> Theme {
        self.current.theme
    }

    pub fn text_size(&self) -> TextSize {
        self.current.text_size
    }

    /// Update the theme. The in-memory value changes even if persisting fails.
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.current.theme = theme;
        self.backend.write(THEME_KEY, theme.as_str())
    }

    /// Update the text size. The in-memory value changes even if persisting fails.
    pub fn set_text_size(&mut self, text_size: TextSize) -> Result<()> {
        self.current.text_size = text_size;
        self.backend.write(TEXT_SIZE_KEY, text_size.as_str())
    }
}

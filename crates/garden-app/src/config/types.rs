//! Configuration types for Herbal Garden
//!
//! Defines:
//! - `Settings` - Application settings from `config.toml`
//! - `Preferences` - Snapshot of the user's display preferences

use std::time::Duration;

use garden_core::{TextSize, Theme};
use serde::{Deserialize, Serialize};

/// Upper bound on the simulated search latency.
pub const MAX_SEARCH_DELAY_MS: u64 = 10_000;

/// Global application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Search behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchSettings {
    /// Simulated lookup latency before results are shown
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl SearchSettings {
    /// Configured delay, clamped to [`MAX_SEARCH_DELAY_MS`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.min(MAX_SEARCH_DELAY_MS))
    }
}

fn default_delay_ms() -> u64 {
    1000
}

/// Controls whether icons use Nerd Font glyphs or plain Unicode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs (requires a Nerd Font)
    NerdFonts,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    /// Animate the landing page and loading spinner
    #[serde(default = "default_true")]
    pub animations: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            animations: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Point-in-time view of the preference store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub text_size: TextSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.search.delay_ms, 1000);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert!(settings.ui.animations);
    }

    #[test]
    fn test_settings_partial_toml() {
        let settings: Settings = toml::from_str("[search]\ndelay_ms = 250\n").unwrap();
        assert_eq!(settings.search.delay_ms, 250);
        assert_eq!(settings.ui, UiSettings::default());
    }

    #[test]
    fn test_settings_icons_field() {
        let settings: Settings = toml::from_str("[ui]\nicons = \"nerd_fonts\"\n").unwrap();
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert!(settings.ui.animations);
    }

    #[test]
    fn test_search_delay_is_clamped() {
        let search = SearchSettings { delay_ms: 60_000 };
        assert_eq!(search.delay(), Duration::from_millis(MAX_SEARCH_DELAY_MS));

        let search = SearchSettings { delay_ms: 0 };
        assert_eq!(search.delay(), Duration::ZERO);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }
}

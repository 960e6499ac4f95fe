//! Centralized theme system for the garden TUI.
//!
//! This module provides:
//! - `palette`: Light and dark color palettes
//! - `styles`: Semantic style builder functions
//! - `icons`: Nerd Font glyph constants with Unicode fallbacks
//!
//! [`Appearance`] bundles everything a widget needs to draw itself for the
//! user's current theme and text size.

pub mod icons;
pub mod palette;
pub mod styles;

use garden_app::config::IconMode;
use garden_app::AppState;
use garden_core::{TextSize, Theme};
use ratatui::style::{Modifier, Style};

use crate::layout::Scale;
use icons::IconSet;
use palette::Palette;

/// Resolved look for one frame
#[derive(Debug, Clone, Copy)]
pub struct Appearance {
    pub palette: &'static Palette,
    pub scale: Scale,
    pub icons: IconSet,
}

impl Appearance {
    pub fn new(theme: Theme, text_size: TextSize, icon_mode: IconMode) -> Self {
        Self {
            palette: palette::for_theme(theme),
            scale: Scale::for_size(text_size),
            icons: IconSet::new(icon_mode),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.theme(), state.text_size(), state.settings.ui.icons)
    }

    /// Apply text-size emphasis to body text.
    pub fn body(&self, style: Style) -> Style {
        if self.scale.bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new(Theme::Dark, TextSize::Medium, IconMode::Unicode)
    }
}

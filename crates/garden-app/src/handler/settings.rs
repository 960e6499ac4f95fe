//! Settings card handlers
//!
//! Preference changes take effect immediately and are written through to the
//! store. A failed write is logged and otherwise ignored.

use garden_core::{TextSize, Theme};
use tracing::{debug, warn};

use crate::state::{AppState, SettingsOverlayState, SettingsRow};

use super::UpdateResult;

pub fn handle_toggle_settings(state: &mut AppState) -> UpdateResult {
    state.settings_overlay = match state.settings_overlay {
        Some(_) => None,
        None => Some(SettingsOverlayState::default()),
    };
    UpdateResult::none()
}

pub fn handle_close_settings(state: &mut AppState) -> UpdateResult {
    state.settings_overlay = None;
    UpdateResult::none()
}

pub fn handle_switch_row(state: &mut AppState) -> UpdateResult {
    if let Some(overlay) = &mut state.settings_overlay {
        overlay.row = overlay.row.toggle();
    }
    UpdateResult::none()
}

/// Cycle the highlighted row's value forward or backward.
pub fn handle_cycle(state: &mut AppState, forward: bool) -> UpdateResult {
    let Some(overlay) = state.settings_overlay else {
        return UpdateResult::none();
    };

    match overlay.row {
        SettingsRow::Theme => {
            let theme = state.theme().toggle();
            handle_set_theme(state, theme)
        }
        SettingsRow::TextSize => {
            let current = state.text_size();
            let size = if forward {
                current.next()
            } else {
                current.prev()
            };
            handle_set_text_size(state, size)
        }
    }
}

pub fn handle_set_theme(state: &mut AppState, theme: Theme) -> UpdateResult {
    if let Err(e) = state.preferences.set_theme(theme) {
        warn!("Failed to persist theme: {}", e);
    }
    debug!("Theme set to {}", theme);
    UpdateResult::none()
}

pub fn handle_set_text_size(state: &mut AppState, text_size: TextSize) -> UpdateResult {
    if let Err(e) = state.preferences.set_text_size(text_size) {
        warn!("Failed to persist text size: {}", e);
    }
    debug!("Text size set to {}", text_size);
    UpdateResult::none()
}

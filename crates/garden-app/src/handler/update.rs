//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{browse, detail, keys::handle_key, navigation, settings, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::EnterGarden => navigation::handle_enter_garden(state),
        Message::GoHome => navigation::handle_go_home(state),
        Message::GoBack => navigation::handle_go_back(state),
        Message::OpenSelected => navigation::handle_open_selected(state),
        Message::SelectPlant(index) => navigation::handle_select_plant(state, index),

        // ─────────────────────────────────────────────────────────
        // Search Form / Results
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => browse::handle_focus_next(state),
        Message::FocusPrev => browse::handle_focus_prev(state),
        Message::InputChar(c) => browse::handle_input_char(state, c),
        Message::InputBackspace => browse::handle_input_backspace(state),
        Message::SubmitSearch => browse::handle_submit_search(state),
        Message::SearchCompleted {
            request_id,
            results,
        } => browse::handle_search_completed(state, request_id, results),
        Message::MoveSelection(direction) => browse::handle_move_selection(state, direction),

        // ─────────────────────────────────────────────────────────
        // Plant Detail
        // ─────────────────────────────────────────────────────────
        Message::FocusNextHotspot => detail::handle_focus_next_hotspot(state),
        Message::FocusPrevHotspot => detail::handle_focus_prev_hotspot(state),
        Message::ExpandFocusedHotspot => detail::handle_expand_focused(state),
        Message::ExpandHotspot(index) => detail::handle_expand_hotspot(state, index),
        Message::CloseHotspot => detail::handle_close_hotspot(state),

        // ─────────────────────────────────────────────────────────
        // Settings
        // ─────────────────────────────────────────────────────────
        Message::ToggleSettings => settings::handle_toggle_settings(state),
        Message::CloseSettings => settings::handle_close_settings(state),
        Message::SettingsSwitchRow => settings::handle_switch_row(state),
        Message::SettingsCycleNext => settings::handle_cycle(state, true),
        Message::SettingsCyclePrev => settings::handle_cycle(state, false),
        Message::ToggleTheme => {
            let theme = state.theme().toggle();
            settings::handle_set_theme(state, theme)
        }
        Message::SetTheme(theme) => settings::handle_set_theme(state, theme),
        Message::SetTextSize(size) => settings::handle_set_text_size(state, size),
    }
}

//! Key event handlers for each view

use garden_core::TextSize;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, BrowseFocus, BrowseState, DetailState, GridMove, ViewState};

/// Convert key events to messages based on the active view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Global keys work everywhere, including over the settings card
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::F(2) => return Some(Message::ToggleSettings),
        _ => {}
    }

    if state.is_settings_open() {
        return handle_key_settings(key);
    }

    match &state.view {
        ViewState::Landing => handle_key_landing(key),
        ViewState::Browse(browse) => handle_key_browse(browse, key),
        ViewState::Detail(detail) => handle_key_detail(detail, key),
    }
}

fn handle_key_landing(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::EnterGarden),
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_browse(browse: &BrowseState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        InputKey::Esc | InputKey::Home => return Some(Message::GoHome),
        _ => {}
    }

    match browse.focus {
        BrowseFocus::NameInput | BrowseFocus::ConditionInput => match key {
            InputKey::Enter => Some(Message::SubmitSearch),
            InputKey::Backspace => Some(Message::InputBackspace),
            InputKey::Char(c) => Some(Message::InputChar(c)),
            _ => None,
        },
        BrowseFocus::Results => match key {
            InputKey::Enter => Some(Message::OpenSelected),
            InputKey::Left | InputKey::Char('h') => Some(Message::MoveSelection(GridMove::Left)),
            InputKey::Right | InputKey::Char('l') => {
                Some(Message::MoveSelection(GridMove::Right))
            }
            InputKey::Up | InputKey::Char('k') => Some(Message::MoveSelection(GridMove::Up)),
            InputKey::Down | InputKey::Char('j') => Some(Message::MoveSelection(GridMove::Down)),
            InputKey::Char('/') => Some(Message::FocusPrev),
            InputKey::Char('q') => Some(Message::Quit),
            _ => None,
        },
    }
}

fn handle_key_detail(detail: &DetailState, key: InputKey) -> Option<Message> {
    if let Some(n) = key.digit() {
        return Some(Message::ExpandHotspot(n - 1));
    }

    match key {
        InputKey::Tab | InputKey::Right | InputKey::Down | InputKey::Char('l' | 'j') => {
            Some(Message::FocusNextHotspot)
        }
        InputKey::BackTab | InputKey::Left | InputKey::Up | InputKey::Char('h' | 'k') => {
            Some(Message::FocusPrevHotspot)
        }
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ExpandFocusedHotspot),

        // Esc closes the hotspot panel first, then leaves the view
        InputKey::Esc | InputKey::Char('x') if detail.expanded_index().is_some() => {
            Some(Message::CloseHotspot)
        }
        InputKey::Esc | InputKey::Char('b') | InputKey::Backspace => Some(Message::GoBack),

        InputKey::Home => Some(Message::GoHome),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_settings(key: InputKey) -> Option<Message> {
    if let Some(n) = key.digit() {
        return TextSize::ALL
            .get(n - 1)
            .copied()
            .map(Message::SetTextSize);
    }

    match key {
        InputKey::Esc | InputKey::Char('q') => Some(Message::CloseSettings),
        InputKey::Up | InputKey::Down | InputKey::Tab | InputKey::BackTab => {
            Some(Message::SettingsSwitchRow)
        }
        InputKey::Char('k' | 'j') => Some(Message::SettingsSwitchRow),
        InputKey::Right | InputKey::Enter | InputKey::Char('l' | ' ') => {
            Some(Message::SettingsCycleNext)
        }
        InputKey::Left | InputKey::Char('h') => Some(Message::SettingsCyclePrev),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        _ => None,
    }
}

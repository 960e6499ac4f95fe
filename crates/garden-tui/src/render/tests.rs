//! Full-screen rendering tests for the view function

use super::*;
use crate::test_utils::{browse_with_results, detail_state, test_state, TestTerminal};
use garden_app::state::SettingsOverlayState;
use garden_app::SettingsRow;
use garden_core::{SearchMode, TextSize, Theme};
use ratatui::style::Modifier;

fn render(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|f| view(f, state));
    term
}

#[test]
fn test_landing_view() {
    let state = test_state();
    let term = render(&state);

    assert!(term.buffer_contains("Welcome to Our"));
    assert!(term.buffer_contains("Enter the Garden"));
    assert!(!term.buffer_contains("Search Plants"));
}

#[test]
fn test_browse_view_before_search() {
    let mut state = test_state();
    state.view = ViewState::Browse(BrowseState::new());
    let term = render(&state);

    assert!(term.buffer_contains("Virtual Herbal Garden"));
    assert!(term.buffer_contains("Search Plants"));
    assert!(term.buffer_contains("Search by Condition"));
    assert!(term.buffer_contains("Welcome to Our Digital Botanical Library"));
}

#[test]
fn test_browse_view_with_results() {
    let mut state = test_state();
    let browse = browse_with_results(&state, "turmeric", SearchMode::ByName);
    state.view = ViewState::Browse(browse);
    let term = render(&state);

    assert!(term.buffer_contains("Found 1 plant matching \"turmeric\""));
    assert!(term.buffer_contains("Curcuma longa"));
}

#[test]
fn test_browse_view_no_results() {
    let mut state = test_state();
    let browse = browse_with_results(&state, "zzz-nonexistent", SearchMode::ByName);
    state.view = ViewState::Browse(browse);
    let term = render(&state);

    assert!(term.buffer_contains("No plants found"));
}

#[test]
fn test_detail_view() {
    let state = detail_state("4");
    let term = render(&state);

    assert!(term.buffer_contains("Echinacea purpurea"));
    assert!(term.buffer_contains("Plant Model"));
    assert!(term.buffer_contains("[Esc] Back"));
    assert!(!term.buffer_contains("Medicinal Properties"));
}

#[test]
fn test_detail_view_with_expanded_hotspot() {
    let mut state = detail_state("4");
    if let ViewState::Detail(detail) = &mut state.view {
        assert!(detail.expand(1));
    }
    let term = render(&state);

    assert!(term.buffer_contains("Part of"));
    assert!(term.buffer_contains("Medicinal Properties"));
    assert!(term.buffer_contains("Key Compounds"));
}

#[test]
fn test_settings_overlay_over_landing() {
    let mut state = test_state();
    state.settings_overlay = Some(SettingsOverlayState {
        row: SettingsRow::TextSize,
    });
    let term = render(&state);

    assert!(term.buffer_contains("Settings"));
    assert!(term.buffer_contains("Current:"));
}

#[test]
fn test_theme_changes_background() {
    let mut state = test_state();
    state.preferences.set_theme(Theme::Light).unwrap();
    let term = render(&state);
    let light = crate::theme::palette::for_theme(Theme::Light);

    assert_eq!(term.cell_at(0, 0).unwrap().bg, light.deepest_bg);
}

#[test]
fn test_extra_large_text_is_bold() {
    let mut state = test_state();
    state.preferences.set_text_size(TextSize::ExtraLarge).unwrap();
    state.view = ViewState::Browse(BrowseState::new());
    let term = render(&state);

    let row = term
        .find_line("Explore our collection")
        .expect("subtitle rendered");
    let content = term.content();
    let col = content
        .lines()
        .nth(row as usize)
        .and_then(|line| {
            line.char_indices()
                .position(|(i, _)| line[i..].starts_with("Explore"))
        })
        .unwrap() as u16;
    assert!(term
        .cell_at(col, row)
        .unwrap()
        .modifier
        .contains(Modifier::BOLD));
}

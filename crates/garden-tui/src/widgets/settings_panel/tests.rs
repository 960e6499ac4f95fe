//! Tests for settings_panel widget module

use super::*;
use crate::test_utils::TestTerminal;
use garden_app::config::IconMode;
use ratatui::{backend::TestBackend, Terminal};

fn overlay(row: SettingsRow) -> SettingsOverlayState {
    SettingsOverlayState { row }
}

fn render(theme: Theme, size: TextSize, row: SettingsRow) -> TestTerminal {
    let appearance = Appearance::new(theme, size, IconMode::Unicode);
    let mut term = TestTerminal::new();
    term.render_widget(
        SettingsPanel::new(overlay(row), theme, size, appearance),
        term.area(),
    );
    term
}

#[test]
fn test_settings_panel_renders() {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| {
            let panel = SettingsPanel::new(
                overlay(SettingsRow::Theme),
                Theme::Dark,
                TextSize::Medium,
                Appearance::default(),
            );
            frame.render_widget(panel, frame.area());
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let content: String = buffer.content().iter().map(|c| c.symbol()).collect();

    assert!(content.contains("Settings"));
    assert!(content.contains("Theme"));
    assert!(content.contains("Light"));
    assert!(content.contains("Dark"));
    assert!(content.contains("Text Size"));
    assert!(content.contains("Extra Large"));
}

#[test]
fn test_current_badges_use_storage_names() {
    let term = render(Theme::Light, TextSize::ExtraLarge, SettingsRow::Theme);

    assert!(term.buffer_contains("Current:"));
    assert!(term.buffer_contains(" light "));
    assert!(term.buffer_contains(" extra large "));
}

#[test]
fn test_active_option_is_filled() {
    let theme = Theme::Dark;
    let term = render(theme, TextSize::Large, SettingsRow::TextSize);
    let palette = crate::theme::palette::for_theme(theme);

    let row = term.find_line(" Large ").expect("text size options");
    let content = term.content();
    let line = content.lines().nth(row as usize).unwrap();
    let col = line
        .chars()
        .collect::<Vec<_>>()
        .windows(7)
        .position(|w| w.iter().collect::<String>() == " Large ")
        .unwrap() as u16;

    assert_eq!(term.cell_at(col + 1, row).unwrap().bg, palette.accent);
}

#[test]
fn test_indicator_follows_row() {
    let term = render(Theme::Dark, TextSize::Medium, SettingsRow::TextSize);
    let indicator = Appearance::default().icons.chevron_right();

    let text_size_row = term.find_line("Text Size").unwrap();
    let theme_row = term.find_line("Theme").unwrap();
    assert!(term.line_contains(text_size_row, indicator));
    assert!(!term.line_contains(theme_row, indicator));
}

#[test]
fn test_card_rect_anchors_top_right() {
    let area = Rect::new(0, 0, 100, 40);
    let card = SettingsPanel::card_rect(area);
    assert_eq!(card.right(), 98);
    assert_eq!(card.y, 1);
    assert_eq!(card.width, CARD_WIDTH);

    let tiny = SettingsPanel::card_rect(Rect::new(0, 0, 20, 6));
    assert!(tiny.right() <= 20);
    assert!(tiny.bottom() <= 6);
}

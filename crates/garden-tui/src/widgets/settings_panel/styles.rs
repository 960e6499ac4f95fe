//! Styling helpers for settings panel rendering

use ratatui::style::{Modifier, Style};

use crate::theme::palette::Palette;
use crate::theme::styles;

/// Layout constants for the settings card
pub const CARD_WIDTH: u16 = 46;
pub const CARD_HEIGHT: u16 = 15;
pub const INDICATOR_WIDTH: u16 = 2;

/// Style for the row labels ("Theme", "Text Size")
pub fn label_style(p: &Palette, is_selected: bool) -> Style {
    if is_selected {
        Style::default()
            .fg(p.text_bright)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(p.text_secondary)
    }
}

/// Style for the row indicator
pub fn indicator_style(p: &Palette, is_selected: bool) -> Style {
    if is_selected {
        Style::default().fg(p.accent)
    } else {
        Style::default()
    }
}

/// Option buttons: the active choice is filled, the rest are outlined text
pub fn option_style(p: &Palette, is_active: bool) -> Style {
    if is_active {
        styles::focused_selected(p)
    } else {
        Style::default().fg(p.text_secondary).bg(p.card_bg)
    }
}

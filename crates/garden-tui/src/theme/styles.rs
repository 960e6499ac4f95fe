//! Semantic style builders for the garden themes.
//!
//! Every builder takes the active [`Palette`] so widgets render correctly in
//! both light and dark mode.

use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---

pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn text_bright_bold(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_bright)
        .add_modifier(Modifier::BOLD)
}

/// Scientific names are set in italics
pub fn scientific(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_secondary)
        .add_modifier(Modifier::ITALIC)
}

// --- Accent styles ---

pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Section titles inside cards ("Medicinal Uses", ...)
pub fn section_title(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_bright)
        .add_modifier(Modifier::BOLD)
}

// --- Badges ---

pub fn badge(p: &Palette) -> Style {
    Style::default().fg(p.badge_fg).bg(p.badge_bg)
}

pub fn condition_badge(p: &Palette) -> Style {
    Style::default().fg(p.condition_fg)
}

// --- Selection styles ---

/// Accent background, used for focused+selected items across widgets
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// Call-to-action button; muted while the action is unavailable
pub fn button(p: &Palette, enabled: bool) -> Style {
    if enabled {
        focused_selected(p)
    } else {
        Style::default().fg(p.text_muted).bg(p.card_bg)
    }
}

// --- Hotspots ---

pub fn hotspot(p: &Palette, focused: bool) -> Style {
    let style = Style::default().fg(p.hotspot).add_modifier(Modifier::BOLD);
    if focused {
        style.bg(p.hotspot_ring).add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

// --- Block builders ---

pub fn border(p: &Palette, focused: bool) -> Style {
    Style::default().fg(if focused {
        p.border_active
    } else {
        p.border_dim
    })
}

pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border(p, focused))
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block<'a>(p: &Palette, title: impl Into<Line<'a>>) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(accent_bold(p))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border(p, true))
        .style(Style::default().bg(p.popup_bg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_text_styles_follow_palette() {
        assert_eq!(text_primary(&DARK).fg, Some(DARK.text_primary));
        assert_eq!(text_primary(&LIGHT).fg, Some(LIGHT.text_primary));
        assert_eq!(text_muted(&DARK).fg, Some(DARK.text_muted));
    }

    #[test]
    fn test_border_focus() {
        assert_eq!(border(&DARK, true).fg, Some(DARK.border_active));
        assert_eq!(border(&DARK, false).fg, Some(DARK.border_dim));
    }

    #[test]
    fn test_button_disabled_is_muted() {
        assert_eq!(button(&DARK, false).fg, Some(DARK.text_muted));
        assert_eq!(button(&DARK, true).bg, Some(DARK.accent));
    }

    #[test]
    fn test_scientific_is_italic() {
        assert!(scientific(&LIGHT).add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_focused_hotspot_is_reversed() {
        assert!(hotspot(&DARK, true)
            .add_modifier
            .contains(Modifier::REVERSED));
        assert!(!hotspot(&DARK, false)
            .add_modifier
            .contains(Modifier::REVERSED));
    }
}

//! Settings overlay - theme and text size card
//!
//! A small card anchored to the top-right corner over a dimmed screen. The
//! row marked with the indicator receives the left/right keys.

mod styles;

#[cfg(test)]
mod tests;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use garden_app::state::SettingsOverlayState;
use garden_app::SettingsRow;
use garden_core::{TextSize, Theme};

use crate::theme::{styles as theme_styles, Appearance};

use super::modal_overlay::{clear_area, dim_background, render_shadow};
use styles::{indicator_style, label_style, option_style, CARD_HEIGHT, CARD_WIDTH, INDICATOR_WIDTH};

/// Settings overlay widget
pub struct SettingsPanel {
    overlay: SettingsOverlayState,
    theme: Theme,
    text_size: TextSize,
    appearance: Appearance,
}

impl SettingsPanel {
    pub fn new(
        overlay: SettingsOverlayState,
        theme: Theme,
        text_size: TextSize,
        appearance: Appearance,
    ) -> Self {
        Self {
            overlay,
            theme,
            text_size,
            appearance,
        }
    }

    /// Card rect in the top-right corner of `area`, one cell in from the edges
    pub fn card_rect(area: Rect) -> Rect {
        let width = CARD_WIDTH.min(area.width.saturating_sub(2));
        let height = CARD_HEIGHT.min(area.height.saturating_sub(1));
        let x = area.right().saturating_sub(width + 2).max(area.x);
        Rect::new(x, area.y + 1u16.min(area.height), width, height)
    }

    fn row_label(&self, row: SettingsRow, icon: &'static str, label: &'static str) -> Line<'static> {
        let p = self.appearance.palette;
        let selected = self.overlay.row == row;
        let indicator = if selected {
            self.appearance.icons.chevron_right()
        } else {
            " "
        };
        Line::from(vec![
            Span::styled(indicator, indicator_style(p, selected)),
            Span::raw(" "),
            Span::styled(icon, theme_styles::accent(p)),
            Span::raw(" "),
            Span::styled(label, label_style(p, selected)),
        ])
    }

    fn options<T: PartialEq + Copy>(
        &self,
        choices: &[T],
        current: T,
        label: impl Fn(T) -> &'static str,
    ) -> Line<'static> {
        let p = self.appearance.palette;
        let mut spans = vec![Span::raw(" ".repeat(INDICATOR_WIDTH as usize + 2))];
        for (i, choice) in choices.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", label(*choice)),
                option_style(p, *choice == current),
            ));
        }
        Line::from(spans)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.appearance.palette;
        let icons = self.appearance.icons;
        let theme_icon = match self.theme {
            Theme::Light => icons.sun(),
            Theme::Dark => icons.moon(),
        };

        vec![
            self.row_label(SettingsRow::Theme, theme_icon, "Theme"),
            self.options(&[Theme::Light, Theme::Dark], self.theme, |t| t.label()),
            Line::from(""),
            self.row_label(SettingsRow::TextSize, icons.text_size(), "Text Size"),
            self.options(&TextSize::ALL, self.text_size, |s| s.label()),
            Line::from(""),
            Line::from(vec![
                Span::styled("Current: ", theme_styles::text_muted(p)),
                Span::styled(format!(" {} ", self.theme.as_str()), theme_styles::badge(p)),
                Span::raw(" "),
                Span::styled(
                    format!(" {} ", self.text_size.as_str().replace('-', " ")),
                    theme_styles::badge(p),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("↑↓", theme_styles::accent(p)),
                Span::styled(" row  ", theme_styles::text_muted(p)),
                Span::styled("←→", theme_styles::accent(p)),
                Span::styled(" change  ", theme_styles::text_muted(p)),
                Span::styled("1-4", theme_styles::accent(p)),
                Span::styled(" size  ", theme_styles::text_muted(p)),
                Span::styled("t", theme_styles::accent(p)),
                Span::styled(" theme", theme_styles::text_muted(p)),
            ]),
        ]
    }
}

impl Widget for SettingsPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        dim_background(buf, area, p);

        let card = Self::card_rect(area);
        if card.width < 4 || card.height < 3 {
            return;
        }
        clear_area(buf, card);
        render_shadow(buf, card, p);

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.appearance.icons.settings(), theme_styles::accent(p)),
            Span::styled(" Settings ", theme_styles::accent_bold(p)),
        ]);
        let close = Line::from(vec![
            Span::styled(" [Esc] ", theme_styles::accent(p)),
            Span::styled("close ", theme_styles::text_muted(p)),
        ])
        .right_aligned();
        let block = theme_styles::modal_block(p, title).title_bottom(close);
        let inner = block.inner(card);
        block.render(card, buf);

        for (i, line) in self.lines().iter().enumerate() {
            let y = inner.y + 1 + i as u16;
            if y >= inner.bottom() {
                break;
            }
            buf.set_line(inner.x + 1, y, line, inner.width.saturating_sub(1));
        }
    }
}

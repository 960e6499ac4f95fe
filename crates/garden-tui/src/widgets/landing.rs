//! Landing page widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{styles, Appearance};

use super::modal_overlay::centered_rect;

const CONTENT_WIDTH: u16 = 64;
const CONTENT_HEIGHT: u16 = 10;

/// Ticks per sway cycle of the two floating leaves (50ms ticks)
const LEFT_LEAF_PERIOD: u64 = 120;
const RIGHT_LEAF_PERIOD: u64 = 160;

/// Welcome screen with the "Enter the Garden" call to action
pub struct LandingPage {
    appearance: Appearance,
    frame: u64,
}

impl LandingPage {
    pub fn new(appearance: Appearance, frame: u64) -> Self {
        Self { appearance, frame }
    }
}

/// Vertical offset of a floating element: rises to `amplitude` and back once
/// per `period` frames.
pub fn sway(frame: u64, period: u64, amplitude: u16) -> u16 {
    let half = (period / 2).max(1);
    let phase = frame % (half * 2);
    let t = if phase < half { phase } else { half * 2 - phase };
    (t * amplitude as u64 / half) as u16
}

/// Alternate the two warm title colors across the characters of `text`
fn gradient_line<'a>(text: &'a str, appearance: &Appearance) -> Line<'a> {
    let p = appearance.palette;
    let len = text.chars().count().max(1);
    let spans: Vec<Span> = text
        .char_indices()
        .enumerate()
        .map(|(i, (byte, ch))| {
            let color = if i * 2 < len { p.title_warm } else { p.title_hot };
            Span::styled(
                &text[byte..byte + ch.len_utf8()],
                styles::text_bright_bold(p).fg(color),
            )
        })
        .collect();
    Line::from(spans)
}

impl Widget for LandingPage {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        buf.set_style(area, Style::default().bg(p.deepest_bg));

        if area.width == 0 || area.height == 0 {
            return;
        }

        let content = centered_rect(CONTENT_WIDTH, CONTENT_HEIGHT, area);
        let lines = vec![
            Line::from(Span::styled("Welcome to Our", styles::text_bright_bold(p))),
            gradient_line("Virtual Garden", &self.appearance),
            Line::from(""),
            Line::from(Span::styled(
                "Discover the healing power of nature through our interactive",
                self.appearance.body(styles::text_secondary(p)),
            )),
            Line::from(Span::styled(
                "botanical sanctuary of medicinal plants and herbs",
                self.appearance.body(styles::text_secondary(p)),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}  Enter the Garden  ", self.appearance.icons.leaf()),
                styles::focused_selected(p),
            )),
            Line::from(""),
            Line::from(Span::styled("Press Enter to begin", styles::text_muted(p))),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(content, buf);

        // Floating leaves either side of the content
        let leaf = self.appearance.icons.leaf();
        let leaf_style = Style::default().fg(p.leaf);
        let floats = [
            (
                content.x.saturating_sub(6),
                content.y + 1,
                sway(self.frame, LEFT_LEAF_PERIOD, 2),
            ),
            (
                content.x + content.width + 4,
                content.y + 4,
                sway(self.frame + RIGHT_LEAF_PERIOD / 4, RIGHT_LEAF_PERIOD, 3),
            ),
        ];
        for (x, y, offset) in floats {
            let y = y.saturating_sub(offset);
            if x >= area.x && x < area.right() && y >= area.y && y < area.bottom() {
                buf.set_string(x, y, leaf, leaf_style);
            }
        }
    }
}

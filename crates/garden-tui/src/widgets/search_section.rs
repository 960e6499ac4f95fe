//! Search section: plant-name and condition search columns

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use garden_app::state::BrowseState;
use garden_core::SearchMode;

use crate::theme::{styles, Appearance};

use super::SPINNER;

/// Rows taken by the section: both column cards plus the loading line
pub const SEARCH_SECTION_HEIGHT: u16 = 11;

const CARD_HEIGHT: u16 = 10;

pub const NAME_PLACEHOLDER: &str = "e.g., Aloe Vera, Turmeric, Lavender...";
pub const CONDITION_PLACEHOLDER: &str = "e.g., Headache, Anxiety, Burns...";
pub const LOADING_TEXT: &str = "Searching our botanical database...";

fn column_copy(mode: SearchMode) -> (&'static str, &'static str) {
    match mode {
        SearchMode::ByName => (
            "Find specific medicinal plants and herbs by their common or scientific names",
            NAME_PLACEHOLDER,
        ),
        SearchMode::ByCondition => (
            "Discover plants that can help with specific health conditions or symptoms",
            CONDITION_PLACEHOLDER,
        ),
    }
}

pub struct SearchSection<'a> {
    browse: &'a BrowseState,
    appearance: Appearance,
    frame: u64,
}

impl<'a> SearchSection<'a> {
    pub fn new(browse: &'a BrowseState, appearance: Appearance, frame: u64) -> Self {
        Self {
            browse,
            appearance,
            frame,
        }
    }

    fn render_column(&self, mode: SearchMode, area: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        let focused = self.browse.focus.search_mode() == Some(mode);
        let block = styles::glass_block(p, focused);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 4 || inner.height == 0 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

        let icon = match mode {
            SearchMode::ByName => self.appearance.icons.search(),
            SearchMode::ByCondition => self.appearance.icons.condition(),
        };
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(icon, styles::accent(p)),
            Span::raw(" "),
            Span::styled(mode.heading(), styles::section_title(p)),
        ]);
        buf.set_line(rows[0].x, rows[0].y, &title, rows[0].width);

        let (description, placeholder) = column_copy(mode);
        Paragraph::new(Span::styled(
            description,
            self.appearance.body(styles::text_secondary(p)),
        ))
        .wrap(Wrap { trim: true })
        .render(rows[1].inner(ratatui::layout::Margin::new(1, 0)), buf);

        let input = self.browse.form.input(mode);
        self.render_input(input, placeholder, focused, rows[2], buf);

        let enabled = !input.trim().is_empty() && !self.browse.is_loading();
        let hint = Line::from(vec![
            Span::raw(" "),
            Span::styled(" Enter ", styles::button(p, enabled && focused)),
            Span::styled(
                if enabled { " to search" } else { " type a query first" },
                styles::text_muted(p),
            ),
        ]);
        buf.set_line(rows[3].x, rows[3].y, &hint, rows[3].width);
    }

    fn render_input(
        &self,
        input: &str,
        placeholder: &str,
        focused: bool,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let p = self.appearance.palette;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border(p, focused));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let line = if input.is_empty() && !focused {
            Line::from(Span::styled(placeholder, styles::text_muted(p)))
        } else {
            // Reserve one cell for the cursor and keep the tail of long input visible
            let room = inner.width.saturating_sub(1) as usize;
            let visible = tail_fitting(input, room);
            let mut spans = vec![Span::styled(
                visible,
                self.appearance.body(styles::text_primary(p)),
            )];
            if focused {
                spans.push(Span::styled("_", styles::accent_bold(p)));
            }
            Line::from(spans)
        };
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer) {
        if !self.browse.is_loading() || area.height == 0 {
            return;
        }
        let p = self.appearance.palette;
        let spinner = SPINNER[(self.frame as usize) % SPINNER.len()];
        let line = Line::from(vec![
            Span::styled(spinner, styles::accent_bold(p)),
            Span::raw(" "),
            Span::styled(LOADING_TEXT, styles::text_secondary(p)),
        ])
        .centered();
        line.render(area, buf);
    }
}

/// Longest suffix of `text` no wider than `width` cells
fn tail_fitting(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut start = text.len();
    let mut used = 0;
    for (i, ch) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    &text[start..]
}

impl Widget for SearchSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [cards, loading] =
            Layout::vertical([Constraint::Length(CARD_HEIGHT), Constraint::Length(1)])
                .areas(area);
        let [name_area, _, condition_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(cards);

        self.render_column(SearchMode::ByName, name_area, buf);
        self.render_column(SearchMode::ByCondition, condition_area, buf);
        self.render_loading(loading, buf);
    }
}

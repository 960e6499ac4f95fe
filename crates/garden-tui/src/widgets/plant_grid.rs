//! Results grid for the browse view
//!
//! Renders one of three states below the search section: the welcome card
//! before any search, the empty-results message, or the results header with a
//! grid of [`PlantCard`]s scrolled so the selected card is visible.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use garden_app::state::{BrowseFocus, BrowseState};

use crate::layout::grid_columns;
use crate::theme::{styles, Appearance};

use super::modal_overlay::centered_rect;
use super::PlantCard;

pub const WELCOME_TITLE: &str = "Welcome to Our Digital Botanical Library";
pub const WELCOME_TEXT: &str = "Start your journey by searching for specific plants or explore remedies for various health conditions";
pub const EMPTY_TITLE: &str = "No plants found";
pub const EMPTY_TEXT: &str = "Try adjusting your search terms or browse our complete collection";

/// `Found N plant(s) matching "q"`
pub fn results_summary(count: usize, query: &str) -> String {
    let noun = if count == 1 { "plant" } else { "plants" };
    format!("Found {} {} matching \"{}\"", count, noun, query)
}

/// First grid row to draw so that `selected_row` is within `visible_rows`
pub fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    selected_row.saturating_sub(visible_rows.max(1) - 1)
}

pub struct PlantGrid<'a> {
    browse: &'a BrowseState,
    appearance: Appearance,
}

impl<'a> PlantGrid<'a> {
    pub fn new(browse: &'a BrowseState, appearance: Appearance) -> Self {
        Self { browse, appearance }
    }

    fn render_message(&self, title: &str, text: &str, area: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        let card = centered_rect(area.width.min(72), 7, area);
        let block = styles::glass_block(p, false);
        let inner = block.inner(card);
        block.render(card, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(title.to_string(), styles::section_title(p))),
            Line::from(""),
            Line::from(Span::styled(
                text.to_string(),
                self.appearance.body(styles::text_secondary(p)),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }

    fn render_results(&self, query: &str, area: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        let scale = self.appearance.scale;
        let [header, grid] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let heading = vec![
            Line::from(Span::styled("Search Results", styles::section_title(p))),
            Line::from(Span::styled(
                results_summary(self.browse.results.len(), query),
                self.appearance.body(styles::text_secondary(p)),
            )),
        ];
        Paragraph::new(heading).render(header, buf);

        let card_height = scale.card_height();
        let row_stride = card_height + scale.gap;
        if grid.height < card_height.min(3) {
            return;
        }
        let visible_rows = ((grid.height + scale.gap) / row_stride).max(1) as usize;
        let columns = scale.columns.max(1);
        let selected = self.browse.selected.min(self.browse.results.len() - 1);
        let first_row = first_visible_row(selected / columns, visible_rows);
        let results_focused = self.browse.focus == BrowseFocus::Results;

        let rows = self.browse.results.chunks(columns).enumerate();
        for (row, plants) in rows.skip(first_row).take(visible_rows) {
            let y = grid.y + (row - first_row) as u16 * row_stride;
            let height = card_height.min(grid.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let cells = grid_columns(Rect::new(grid.x, y, grid.width, height), columns, scale.gap);
            for (col, (plant, cell)) in plants.iter().zip(cells).enumerate() {
                let index = row * columns + col;
                PlantCard::new(plant, self.appearance)
                    .selected(results_focused && index == selected)
                    .render(cell, buf);
            }
        }
    }
}

impl Widget for PlantGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.browse.is_loading() {
            return;
        }

        match &self.browse.search {
            None => self.render_message(WELCOME_TITLE, WELCOME_TEXT, area, buf),
            Some(_) if self.browse.results.is_empty() => {
                self.render_message(EMPTY_TITLE, EMPTY_TEXT, area, buf)
            }
            Some(search) => self.render_results(search.query.as_str(), area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{browse_with_results, test_state, TestTerminal};
    use garden_app::SearchRequestId;
    use garden_core::{SearchMode, SearchQuery, TextSize};
    use garden_app::config::IconMode;
    use garden_core::Theme;

    fn render(browse: &BrowseState, appearance: Appearance) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(PlantGrid::new(browse, appearance), term.area());
        term
    }

    #[test]
    fn test_results_summary_pluralizes() {
        assert_eq!(
            results_summary(1, "turmeric"),
            "Found 1 plant matching \"turmeric\""
        );
        assert_eq!(
            results_summary(2, "headache"),
            "Found 2 plants matching \"headache\""
        );
    }

    #[test]
    fn test_first_visible_row_keeps_selection_on_screen() {
        assert_eq!(first_visible_row(0, 2), 0);
        assert_eq!(first_visible_row(1, 2), 0);
        assert_eq!(first_visible_row(4, 2), 3);
        assert_eq!(first_visible_row(3, 0), 3);
    }

    #[test]
    fn test_welcome_before_first_search() {
        let term = render(&BrowseState::new(), Appearance::default());
        assert!(term.buffer_contains(WELCOME_TITLE));
    }

    #[test]
    fn test_no_plants_found() {
        let state = test_state();
        let browse = browse_with_results(&state, "zzz-nonexistent", SearchMode::ByName);
        let term = render(&browse, Appearance::default());

        assert!(term.buffer_contains(EMPTY_TITLE));
        assert!(term.buffer_contains("Try adjusting your search terms"));
        assert!(!term.buffer_contains("Search Results"));
    }

    #[test]
    fn test_results_header_and_cards() {
        let state = test_state();
        let browse = browse_with_results(&state, "headache", SearchMode::ByCondition);
        let term = render(&browse, Appearance::default());

        assert!(term.buffer_contains("Search Results"));
        assert!(term.buffer_contains("Found 2 plants matching \"headache\""));
        assert!(term.buffer_contains("Lavender"));
        assert!(term.buffer_contains("Willow Bark"));
    }

    #[test]
    fn test_nothing_drawn_while_loading() {
        let mut browse = BrowseState::new();
        browse.begin_search(
            SearchRequestId(3),
            SearchQuery::new("ginger").unwrap(),
            SearchMode::ByName,
        );
        let term = render(&browse, Appearance::default());

        assert!(!term.buffer_contains(WELCOME_TITLE));
        assert!(!term.buffer_contains("Search Results"));
    }

    #[test]
    fn test_grid_scrolls_to_selection() {
        // "a" matches most of the catalog by name
        let state = test_state();
        let mut browse = browse_with_results(&state, "a", SearchMode::ByName);
        browse.focus = BrowseFocus::Results;
        let last = browse.results.len() - 1;
        browse.selected = last;
        let last_name = browse.results[last].name.clone();
        let first_name = browse.results[0].name.clone();

        // One card per row and room for two rows
        let appearance = Appearance::new(Theme::Dark, TextSize::ExtraLarge, IconMode::Unicode);
        let height = 3 + 2 * appearance.scale.card_height() + appearance.scale.gap;
        let mut term = TestTerminal::with_size(80, height);
        term.render_widget(PlantGrid::new(&browse, appearance), term.area());

        assert!(term.buffer_contains(&last_name));
        assert!(!term.buffer_contains(&first_name));
    }
}

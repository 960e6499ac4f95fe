//! Test utilities for widget and render testing

use std::sync::Arc;

use garden_app::state::BrowseState;
use garden_app::{AppState, DetailState, ViewState};
use garden_core::{Catalog, PlantRecord, SearchMode, SearchQuery};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 40;

/// Compact terminal size for narrow layout tests
pub const COMPACT_WIDTH: u16 = 50;
pub const COMPACT_HEIGHT: u16 = 20;

/// Wrapper around a `TestBackend` terminal with buffer assertions
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.backend().buffer().area;
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|f| f.render_widget(widget, area))
            .expect("Failed to draw");
    }

    pub fn draw_with<F: FnOnce(&mut Frame)>(&mut self, f: F) {
        self.terminal.draw(f).expect("Failed to draw");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Full buffer content, rows joined with newlines
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            out.push_str(&self.row(y));
            out.push('\n');
        }
        out
    }

    fn row(&self, y: u16) -> String {
        let buffer = self.buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        let buffer = self.buffer();
        (0..buffer.area.height).any(|y| self.row(y).contains(text))
    }

    /// Whether row `y` contains `text`
    pub fn line_contains(&self, y: u16, text: &str) -> bool {
        y < self.buffer().area.height && self.row(y).contains(text)
    }

    /// First row that contains `text`
    pub fn find_line(&self, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        (0..buffer.area.height).find(|y| self.row(*y).contains(text))
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&ratatui::buffer::Cell> {
        self.buffer().cell((x, y))
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

pub fn test_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::embedded().expect("embedded catalog"))
}

pub fn test_state() -> AppState {
    AppState::new(test_catalog())
}

pub fn plant(id: &str) -> PlantRecord {
    test_catalog()
        .get(id)
        .cloned()
        .unwrap_or_else(|| panic!("no plant {}", id))
}

/// Browse state showing completed results for `query`
pub fn browse_with_results(state: &AppState, query: &str, mode: SearchMode) -> BrowseState {
    let mut browse = BrowseState::new();
    let query = SearchQuery::new(query).expect("non-blank query");
    let results = garden_core::search(&state.catalog, &query, mode);
    let id = garden_app::SearchRequestId(1);
    browse.begin_search(id, query, mode);
    browse.complete_search(id, results);
    browse
}

/// App state in Detail for `id`, returning to an empty Browse
pub fn detail_state(id: &str) -> AppState {
    let mut state = test_state();
    state.view = ViewState::Detail(DetailState::new(plant(id), BrowseState::new()));
    state
}

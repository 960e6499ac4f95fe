//! Header bar widget
//!
//! Shows the garden title with its subtitle and the navigation/settings key
//! hints that apply to the current view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use garden_app::ViewState;

use crate::theme::{styles, Appearance};

pub const TITLE: &str = "Virtual Herbal Garden";
pub const SUBTITLE: &str =
    "Explore our collection of medicinal plants and discover their healing properties";

/// Main header showing app title, subtitle and keybindings
pub struct MainHeader<'a> {
    view: &'a ViewState,
    appearance: Appearance,
}

impl<'a> MainHeader<'a> {
    pub fn new(view: &'a ViewState, appearance: Appearance) -> Self {
        Self { view, appearance }
    }

    /// Key hints for the current view; Back only exists in Detail
    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = Vec::with_capacity(4);
        if !matches!(self.view, ViewState::Landing) {
            hints.push(("Home", "Home"));
        }
        if matches!(self.view, ViewState::Detail(_)) {
            hints.push(("Esc", "Back"));
        }
        hints.push(("F2", "Settings"));
        hints.push(("^C", "Quit"));
        hints
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.appearance.icons.leaf(), styles::accent(p)),
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold(p)),
        ]);
        let title_width = title_line.width() as u16;

        let mut hint_spans = Vec::new();
        for (i, (key, label)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                hint_spans.push(Span::raw("  "));
            }
            hint_spans.push(Span::styled("[", styles::text_muted(p)));
            hint_spans.push(Span::styled(key, styles::accent(p)));
            hint_spans.push(Span::styled(format!("] {}", label), styles::text_muted(p)));
        }
        hint_spans.push(Span::raw(" "));
        let hints_line = Line::from(hint_spans);
        let hints_width = hints_line.width() as u16;

        buf.set_line(inner.x, inner.y, &title_line, inner.width);

        // Right-align the hints when they fit beside the title
        if title_width + hints_width + 2 <= inner.width {
            let hints_x = inner.x + inner.width - hints_width;
            buf.set_line(hints_x, inner.y, &hints_line, hints_width);
        }

        if inner.height >= 2 {
            let subtitle = Line::from(vec![
                Span::raw(" "),
                Span::styled(SUBTITLE, self.appearance.body(styles::text_secondary(p))),
            ]);
            buf.set_line(inner.x, inner.y + 1, &subtitle, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{detail_state, TestTerminal};
    use garden_app::state::BrowseState;

    #[test]
    fn test_header_renders_title() {
        let mut term = TestTerminal::new();
        let view = ViewState::Landing;
        term.render_widget(MainHeader::new(&view, Appearance::default()), term.area());

        assert!(term.buffer_contains(TITLE));
        assert!(term.buffer_contains("Explore our collection"));
    }

    #[test]
    fn test_landing_has_no_navigation_hints() {
        let mut term = TestTerminal::new();
        let view = ViewState::Landing;
        term.render_widget(MainHeader::new(&view, Appearance::default()), term.area());

        assert!(!term.buffer_contains("[Home] Home"));
        assert!(!term.buffer_contains("Back"));
        assert!(term.buffer_contains("[F2] Settings"));
    }

    #[test]
    fn test_browse_shows_home_but_not_back() {
        let mut term = TestTerminal::new();
        let view = ViewState::Browse(BrowseState::new());
        term.render_widget(MainHeader::new(&view, Appearance::default()), term.area());

        assert!(term.buffer_contains("[Home] Home"));
        assert!(!term.buffer_contains("[Esc] Back"));
    }

    #[test]
    fn test_detail_shows_back() {
        let mut term = TestTerminal::new();
        let state = detail_state("4");
        term.render_widget(
            MainHeader::new(&state.view, Appearance::default()),
            term.area(),
        );

        assert!(term.buffer_contains("[Esc] Back"));
        assert!(term.buffer_contains("[Home] Home"));
    }

    #[test]
    fn test_narrow_header_keeps_title() {
        let mut term = TestTerminal::with_size(40, 4);
        let view = ViewState::Browse(BrowseState::new());
        term.render_widget(MainHeader::new(&view, Appearance::default()), term.area());

        assert!(term.buffer_contains(TITLE));
        assert!(!term.buffer_contains("Settings"));
    }
}

//! Plant summary card shown in the results grid

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use garden_core::PlantRecord;

use crate::theme::{styles, Appearance};

/// Medicinal uses shown before collapsing into "+N more"
pub const CARD_USES: usize = 3;
/// Active compounds shown before collapsing into "+N"
pub const CARD_COMPOUNDS: usize = 2;

/// First `limit` items and how many were left out
pub fn preview(items: &[String], limit: usize) -> (&[String], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

pub struct PlantCard<'a> {
    plant: &'a PlantRecord,
    appearance: Appearance,
    selected: bool,
}

impl<'a> PlantCard<'a> {
    pub fn new(plant: &'a PlantRecord, appearance: Appearance) -> Self {
        Self {
            plant,
            appearance,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn chip_line(
        &self,
        icon: &'static str,
        items: &[String],
        limit: usize,
        more_suffix: &str,
    ) -> Line<'static> {
        let p = self.appearance.palette;
        let (shown, hidden) = preview(items, limit);
        let mut spans = vec![Span::styled(icon, styles::accent(p)), Span::raw(" ")];
        for item in shown {
            spans.push(Span::styled(
                format!(" {} ", item),
                self.appearance.body(styles::badge(p)),
            ));
            spans.push(Span::raw(" "));
        }
        if hidden > 0 {
            spans.push(Span::styled(
                format!("+{}{}", hidden, more_suffix),
                styles::text_muted(p),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for PlantCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        let scale = self.appearance.scale;
        let block = styles::glass_block(p, self.selected);
        let inner = block
            .inner(area)
            .inner(Margin::new(1 + scale.padding, scale.padding));
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut y = inner.y;
        let bottom = inner.bottom();
        let put = |line: &Line, buf: &mut Buffer, y: &mut u16| {
            if *y < bottom {
                buf.set_line(inner.x, *y, line, inner.width);
                *y += 1;
            }
        };

        let badge = Line::from(Span::styled(
            format!(" {} ", self.plant.category),
            styles::badge(p),
        ));
        put(&badge, buf, &mut y);

        let name_style = if self.selected {
            styles::accent_bold(p)
        } else {
            styles::text_bright_bold(p)
        };
        put(
            &Line::from(Span::styled(self.plant.name.as_str(), name_style)),
            buf,
            &mut y,
        );
        put(
            &Line::from(Span::styled(
                self.plant.scientific_name.as_str(),
                styles::scientific(p),
            )),
            buf,
            &mut y,
        );

        // Description clipped to the scale's line budget
        let desc_height = scale.description_lines.min(bottom.saturating_sub(y));
        if desc_height > 0 {
            Paragraph::new(Span::styled(
                self.plant.description.as_str(),
                self.appearance.body(styles::text_secondary(p)),
            ))
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x, y, inner.width, desc_height), buf);
            y += desc_height;
        }
        y += 1;

        let uses = self.chip_line(
            self.appearance.icons.heart(),
            &self.plant.medicinal_uses,
            CARD_USES,
            " more",
        );
        put(&uses, buf, &mut y);
        let compounds = self.chip_line(
            self.appearance.icons.flask(),
            &self.plant.active_compounds,
            CARD_COMPOUNDS,
            "",
        );
        put(&compounds, buf, &mut y);

        let hint_style = if self.selected {
            styles::accent(p)
        } else {
            styles::text_muted(p)
        };
        let hint = Line::from(vec![
            Span::styled("View model and details ", hint_style),
            Span::styled(self.appearance.icons.chevron_right(), hint_style),
        ]);
        put(&hint, buf, &mut y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Scale;
    use crate::test_utils::{plant, TestTerminal};
    use garden_core::TextSize;

    fn render_card(id: &str, selected: bool) -> TestTerminal {
        let appearance = Appearance::default();
        let height = Scale::for_size(TextSize::Medium).card_height();
        let mut term = TestTerminal::with_size(90, height);
        let plant = plant(id);
        term.render_widget(
            PlantCard::new(&plant, appearance).selected(selected),
            term.area(),
        );
        term
    }

    #[test]
    fn test_preview_counts_hidden_items() {
        let items: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let (shown, hidden) = preview(&items, 3);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 1);

        let (shown, hidden) = preview(&items[..2], 3);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_card_shows_identity() {
        let term = render_card("1", false);
        assert!(term.buffer_contains(" Spice "));
        assert!(term.buffer_contains("Turmeric"));
        assert!(term.buffer_contains("Curcuma longa"));
    }

    #[test]
    fn test_card_truncates_uses_and_compounds() {
        // Turmeric: four uses, three compounds
        let term = render_card("1", false);
        assert!(term.buffer_contains("Anti-inflammatory"));
        assert!(term.buffer_contains("Pain relief"));
        assert!(!term.buffer_contains("Digestive aid"));
        assert!(term.buffer_contains("+1 more"));

        assert!(term.buffer_contains("Curcumin"));
        assert!(term.buffer_contains("Turmerone"));
        assert!(!term.buffer_contains("Zingiberene"));
        assert!(term.buffer_contains("+1"));
    }

    #[test]
    fn test_card_shows_details_hint() {
        let term = render_card("2", true);
        assert!(term.buffer_contains("View model and details"));
    }

    #[test]
    fn test_tiny_card_does_not_panic() {
        let plant = plant("4");
        let mut term = TestTerminal::with_size(6, 3);
        term.render_widget(PlantCard::new(&plant, Appearance::default()), term.area());
    }
}

//! Side panel describing an expanded hotspot

use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use garden_core::{HighlightedPart, PlantRecord};

use crate::theme::{styles, Appearance};

use super::modal_overlay::{clear_area, dim_background};
use super::plant_details::chip_lines;

const PANEL_WIDTH: u16 = 48;

/// Right-aligned panel over a dimmed backdrop
pub struct HotspotPanel<'a> {
    plant: &'a PlantRecord,
    part: &'a HighlightedPart,
    appearance: Appearance,
}

impl<'a> HotspotPanel<'a> {
    pub fn new(plant: &'a PlantRecord, part: &'a HighlightedPart, appearance: Appearance) -> Self {
        Self {
            plant,
            part,
            appearance,
        }
    }

    /// Panel rect inside `area`, anchored to the right edge
    pub fn panel_rect(area: Rect) -> Rect {
        let width = PANEL_WIDTH.min(area.width);
        Rect::new(area.right() - width, area.y, width, area.height)
    }

    fn lines(&self, width: u16) -> Vec<Line<'a>> {
        let p = self.appearance.palette;
        let icons = self.appearance.icons;
        let body = self.appearance.body(styles::text_primary(p));

        let mut lines = vec![
            Line::from(Span::styled("Part of", styles::text_muted(p))),
            Line::from(Span::styled(self.plant.name.as_str(), styles::text_bright_bold(p))),
            Line::from(Span::styled(
                self.plant.scientific_name.as_str(),
                styles::scientific(p),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(icons.info(), styles::accent(p)),
                Span::raw(" "),
                Span::styled("Medicinal Properties", styles::section_title(p)),
            ]),
            Line::from(Span::styled(self.part.description.as_str(), body)),
            Line::from(""),
            Line::from(vec![
                Span::styled(icons.heart(), styles::accent(p)),
                Span::raw(" "),
                Span::styled("Common Uses", styles::section_title(p)),
            ]),
        ];
        lines.extend(chip_lines(
            &self.plant.medicinal_uses,
            width,
            self.appearance.body(styles::badge(p)),
        ));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(icons.flask(), styles::accent(p)),
            Span::raw(" "),
            Span::styled("Key Compounds", styles::section_title(p)),
        ]));
        for compound in &self.plant.active_compounds {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", icons.bullet()), styles::accent(p)),
                Span::styled(compound.as_str(), body),
            ]));
        }
        lines
    }
}

impl Widget for HotspotPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        dim_background(buf, area, p);

        let panel = Self::panel_rect(area);
        if panel.width < 4 || panel.height < 3 {
            return;
        }
        clear_area(buf, panel);

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.appearance.icons.marker(), styles::hotspot(p, false)),
            Span::raw(" "),
            Span::styled(self.part.part.as_str(), styles::accent_bold(p)),
            Span::raw(" "),
        ]);
        let close = Line::from(vec![
            Span::styled(" [Esc] ", styles::accent(p)),
            Span::styled(format!("{} ", self.appearance.icons.close()), styles::text_muted(p)),
        ])
        .right_aligned();
        let block = styles::modal_block(p, title).title_bottom(close);
        let inner = block.inner(panel).inner(Margin::new(1 + self.appearance.scale.padding, 1));
        block.render(panel, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        Paragraph::new(self.lines(inner.width))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

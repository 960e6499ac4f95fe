//! Detail view for one plant
//!
//! Header row with identity and category, the [`PlantCanvas`] on the left and
//! the information sections on the right. Narrow terminals stack the two.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use garden_app::DetailState;

use crate::theme::{styles, Appearance};

use super::PlantCanvas;

/// Below this width the picture and the information stack vertically
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 90;

/// Lay `items` out as chips, wrapping to new lines at `width` cells
pub fn chip_lines(items: &[String], width: u16, style: Style) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for item in items {
        let chip = format!(" {} ", item);
        let chip_width = chip.width();
        let needed = if current.is_empty() {
            chip_width
        } else {
            chip_width + 1
        };
        if !current.is_empty() && used + needed > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw(" "));
            used += 1;
        }
        current.push(Span::styled(chip, style));
        used += chip_width;
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

pub struct PlantDetails<'a> {
    detail: &'a DetailState,
    appearance: Appearance,
}

impl<'a> PlantDetails<'a> {
    pub fn new(detail: &'a DetailState, appearance: Appearance) -> Self {
        Self { detail, appearance }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        let plant = &self.detail.plant;
        let left = Line::from(vec![
            Span::styled(format!("{} ", self.appearance.icons.back()), styles::text_muted(p)),
            Span::styled(plant.name.as_str(), styles::accent_bold(p)),
        ]);
        buf.set_line(area.x, area.y, &left, area.width);

        let badge = Line::from(Span::styled(format!(" {} ", plant.category), styles::badge(p)));
        let badge_width = badge.width() as u16;
        if left.width() as u16 + badge_width + 2 <= area.width {
            buf.set_line(area.right() - badge_width, area.y, &badge, badge_width);
        }

        if area.height >= 2 {
            let sci = Line::from(vec![
                Span::raw("  "),
                Span::styled(plant.scientific_name.as_str(), styles::scientific(p)),
            ]);
            buf.set_line(area.x, area.y + 1, &sci, area.width);
        }
    }

    fn section_title(&self, icon: &'static str, title: &'static str) -> Line<'static> {
        let p = self.appearance.palette;
        Line::from(vec![
            Span::styled(icon, styles::accent(p)),
            Span::raw(" "),
            Span::styled(title, styles::section_title(p)),
        ])
    }

    fn info_lines(&self, width: u16) -> Vec<Line<'static>> {
        let p = self.appearance.palette;
        let icons = self.appearance.icons;
        let plant = &self.detail.plant;
        let body = self.appearance.body(styles::text_primary(p));
        let mut lines = Vec::new();

        lines.push(self.section_title(icons.info(), "About This Plant"));
        lines.push(Line::from(Span::styled(plant.description.clone(), body)));
        lines.push(Line::from(""));

        lines.push(self.section_title(icons.heart(), "Medicinal Uses"));
        lines.extend(chip_lines(
            &plant.medicinal_uses,
            width,
            self.appearance.body(styles::badge(p)),
        ));
        lines.push(Line::from(""));

        lines.push(self.section_title(icons.flask(), "Active Compounds"));
        for compound in &plant.active_compounds {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", icons.bullet()), styles::accent(p)),
                Span::styled(compound.clone(), body),
            ]));
        }
        lines.push(Line::from(""));

        lines.push(self.section_title(icons.condition(), "Treats These Conditions"));
        lines.extend(chip_lines(
            &plant.diseases,
            width,
            self.appearance.body(styles::condition_badge(p)),
        ));
        lines
    }

    fn render_info(&self, area: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        let block = styles::glass_block(p, false);
        let inner = block
            .inner(area)
            .inner(Margin::new(1 + self.appearance.scale.padding, self.appearance.scale.padding));
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        Paragraph::new(self.info_lines(inner.width))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

impl Widget for PlantDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height < 3 {
            return;
        }
        let [header, _, content] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        self.render_header(header, buf);

        let (picture_area, info_area) = if content.width >= SIDE_BY_SIDE_MIN_WIDTH {
            let [left, _, right] = Layout::horizontal([
                Constraint::Percentage(50),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(content);
            (left, right)
        } else {
            let [top, bottom] =
                Layout::vertical([Constraint::Percentage(50), Constraint::Fill(1)]).areas(content);
            (top, bottom)
        };

        PlantCanvas::new(&self.detail.plant, self.detail.art(), self.appearance)
            .focused(Some(self.detail.focused_index()).filter(|_| self.detail.hotspot_count() > 0))
            .expanded(self.detail.expanded_index())
            .render(picture_area, buf);
        self.render_info(info_area, buf);
    }
}

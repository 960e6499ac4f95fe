//! Plant picture with numbered hotspot markers

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use garden_core::{PlantArt, PlantRecord};
use unicode_width::UnicodeWidthChar;

use crate::theme::palette::Palette;
use crate::theme::{styles, Appearance};

use super::modal_overlay::centered_rect;

/// "Plant Model" panel from the detail view
pub struct PlantCanvas<'a> {
    plant: &'a PlantRecord,
    art: &'a PlantArt,
    appearance: Appearance,
    focused: Option<usize>,
    expanded: Option<usize>,
}

impl<'a> PlantCanvas<'a> {
    pub fn new(plant: &'a PlantRecord, art: &'a PlantArt, appearance: Appearance) -> Self {
        Self {
            plant,
            art,
            appearance,
            focused: None,
            expanded: None,
        }
    }

    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    pub fn expanded(mut self, index: Option<usize>) -> Self {
        self.expanded = index;
        self
    }

    /// Picture box for the artwork, centered in `area`
    pub fn picture_rect(&self, area: Rect) -> Rect {
        let width = (self.art.width() as u16).max(1);
        let height = (self.art.height() as u16).max(1);
        centered_rect(width, height, area)
    }

    /// Screen cell of hotspot `index` within `picture`
    pub fn marker_cell(&self, index: usize, picture: Rect) -> Option<(u16, u16)> {
        let part = self.plant.highlighted_part(index)?;
        let (dx, dy) = part.position.to_cell(picture.width, picture.height);
        Some((picture.x + dx, picture.y + dy))
    }

    fn render_art(&self, picture: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        for (row, line) in self.art.lines.iter().enumerate() {
            let y = picture.y + row as u16;
            if y >= picture.bottom() {
                break;
            }
            let mut x = picture.x;
            for ch in line.chars() {
                let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
                if w == 0 {
                    continue;
                }
                if x + w > picture.right() {
                    break;
                }
                if ch != ' ' {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_char(ch);
                        cell.set_style(art_style(p, ch));
                    }
                }
                x += w;
            }
        }
    }

    fn render_markers(&self, picture: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        for index in 0..self.plant.hotspot_count() {
            let Some((x, y)) = self.marker_cell(index, picture) else {
                continue;
            };
            let label = marker_label(index);
            let style = if self.expanded == Some(index) {
                styles::focused_selected(p)
            } else {
                styles::hotspot(p, self.focused == Some(index))
            };
            buf.set_string(x, y, label, style);
        }
    }

    fn render_legend(&self, area: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        let mut spans = Vec::new();
        for (index, part) in self.plant.highlighted_parts.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            let focused = self.focused == Some(index);
            spans.push(Span::styled(marker_label(index), styles::hotspot(p, focused)));
            spans.push(Span::raw(" "));
            let name_style = if focused {
                styles::accent_bold(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(part.part.as_str(), self.appearance.body(name_style)));
        }
        Line::from(spans).centered().render(area, buf);
    }
}

/// One-cell label for hotspot `index`: 1-9, then letters
fn marker_label(index: usize) -> String {
    match index {
        0..=8 => (index + 1).to_string(),
        _ => char::from(b'a' + ((index - 9) % 26) as u8).to_string(),
    }
}

fn art_style(p: &Palette, ch: char) -> Style {
    match ch {
        '~' | '_' => Style::default().fg(p.ground),
        '|' | '/' | '\\' => Style::default().fg(p.stem),
        _ => Style::default().fg(p.leaf),
    }
}

impl Widget for PlantCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.appearance.palette;
        let mut title = vec![
            Span::raw(" "),
            Span::styled(self.appearance.icons.leaf(), styles::accent(p)),
            Span::styled(" Plant Model ", styles::section_title(p)),
        ];
        if self.art.is_placeholder {
            title.push(Span::styled("(placeholder) ", styles::text_muted(p)));
        }
        let block = styles::glass_block(p, false).title(Line::from(title));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height < 3 {
            return;
        }

        let [picture_area, legend, instructions] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let picture = self.picture_rect(picture_area);
        self.render_art(picture, buf);
        self.render_markers(picture, buf);

        if self.plant.hotspot_count() > 0 {
            self.render_legend(legend, buf);
            let keys = match self.plant.hotspot_count() {
                1 => "1".to_string(),
                n => format!("1-{}", n.min(9)),
            };
            Line::from(vec![
                Span::styled("Press ", styles::text_muted(p)),
                Span::styled(keys, styles::accent(p)),
                Span::styled(" or Tab + Enter to learn about medicinal parts", styles::text_muted(p)),
            ])
            .centered()
            .render(instructions, buf);
        }
    }
}

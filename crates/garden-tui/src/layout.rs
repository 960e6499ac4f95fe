//! Screen layout definitions for the TUI
//!
//! Provides the header/body split and the text-size driven [`Scale`] that the
//! browse grid and detail view size themselves from.

use garden_core::TextSize;
use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + subtitle row + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navigation header (title, subtitle, key hints)
    pub header: Rect,

    /// Active view content
    pub body: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
    }
}

/// Density settings derived from the user's text size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    /// Plant cards per grid row
    pub columns: usize,
    /// Description lines shown on each card
    pub description_lines: u16,
    /// Horizontal and vertical gap between cards
    pub gap: u16,
    /// Inner padding of cards and panels
    pub padding: u16,
    /// Body text is emboldened
    pub bold: bool,
}

impl Scale {
    pub fn for_size(size: TextSize) -> Self {
        match size {
            TextSize::Small => Self {
                columns: size.grid_columns(),
                description_lines: 1,
                gap: 0,
                padding: 0,
                bold: false,
            },
            TextSize::Medium => Self {
                columns: size.grid_columns(),
                description_lines: 1,
                gap: 1,
                padding: 0,
                bold: false,
            },
            TextSize::Large => Self {
                columns: size.grid_columns(),
                description_lines: 2,
                gap: 1,
                padding: 1,
                bold: false,
            },
            TextSize::ExtraLarge => Self {
                columns: size.grid_columns(),
                description_lines: 3,
                gap: 1,
                padding: 1,
                bold: true,
            },
        }
    }

    /// Height of one plant card including its borders.
    ///
    /// Badge, name, scientific name, description, spacer, uses, compounds and
    /// the details hint.
    pub fn card_height(&self) -> u16 {
        2 + 2 * self.padding + 7 + self.description_lines
    }
}

/// Split a grid area into `columns` equal cells separated by `gap`.
pub fn grid_columns(area: Rect, columns: usize, gap: u16) -> Vec<Rect> {
    let columns = columns.max(1);
    let mut constraints = Vec::with_capacity(columns * 2);
    for i in 0..columns {
        if i > 0 && gap > 0 {
            constraints.push(Constraint::Length(gap));
        }
        constraints.push(Constraint::Ratio(1, columns as u32));
    }
    let chunks = Layout::horizontal(constraints).split(area);
    if gap > 0 {
        chunks.iter().step_by(2).copied().collect()
    } else {
        chunks.to_vec()
    }
}

//! Shared modal overlay utilities.
//!
//! Provides reusable functions for centering rects, dimming backgrounds,
//! and rendering shadows for modal dialogs.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette::Palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// # Arguments
/// * `width` - Desired width of the centered rect
/// * `height` - Desired height of the centered rect
/// * `area` - Area within which to center the rect
///
/// # Returns
/// A `Rect` centered within the area, clamped if necessary
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use garden_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area by overriding their styles.
///
/// Simulates a semi-transparent backdrop behind a modal panel.
/// Iterates all cells and applies the palette's muted fg + deepest bg.
///
/// # Arguments
/// * `buf` - Buffer to modify
/// * `area` - Area to dim
/// * `palette` - Active theme palette
///
/// # Examples
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use garden_tui::theme::palette::DARK;
/// use garden_tui::widgets::modal_overlay::dim_background;
///
/// let area = Rect::new(0, 0, 10, 5);
/// let mut buf = Buffer::empty(area);
/// dim_background(&mut buf, area, &DARK);
/// // All cells now have dimmed styling
/// ```
pub fn dim_background(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let dim_style = Style::default()
        .fg(palette.text_muted)
        .bg(palette.deepest_bg);

    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
///
/// Creates the illusion of elevation by drawing darker cells along the
/// right edge and bottom edge, offset by 1 cell.
///
/// # Arguments
/// * `buf` - Buffer to modify
/// * `modal_rect` - The modal rect to add shadow to
/// * `palette` - Active theme palette
///
/// # Examples
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use garden_tui::theme::palette::DARK;
/// use garden_tui::widgets::modal_overlay::render_shadow;
///
/// let area = Rect::new(0, 0, 20, 10);
/// let modal = Rect::new(5, 2, 10, 6);
/// let mut buf = Buffer::empty(area);
/// render_shadow(&mut buf, modal, &DARK);
/// // Shadow cells rendered at right and bottom edges
/// ```
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect, palette: &Palette) {
    let shadow_style = Style::default().fg(palette.shadow).bg(palette.shadow);

    // Right edge shadow (1 cell wide, full height)
    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    for y in modal_rect.y.saturating_add(1)
        ..modal_rect
            .y
            .saturating_add(modal_rect.height)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    // Bottom edge shadow (full width, 1 cell tall)
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);
    for x in modal_rect.x.saturating_add(1)
        ..modal_rect
            .x
            .saturating_add(modal_rect.width)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Clear a rect and prepare it for modal content.
///
/// Renders the `Clear` widget to reset cells in the given area.
///
/// # Arguments
/// * `buf` - Buffer to modify
/// * `area` - Area to clear
///
/// # Examples
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use garden_tui::widgets::modal_overlay::clear_area;
///
/// let area = Rect::new(0, 0, 10, 5);
/// let mut buf = Buffer::empty(area);
/// clear_area(&mut buf, area);
/// // Area is now cleared and ready for content
/// ```
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

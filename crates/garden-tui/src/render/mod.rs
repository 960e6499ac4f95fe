//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use garden_app::state::{AppState, BrowseState, DetailState, ViewState};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::Appearance;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: everything drawn is derived from it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let appearance = Appearance::from_state(state);

    // Fill entire terminal with the theme background
    let bg_block = Block::default().style(Style::default().bg(appearance.palette.deepest_bg));
    frame.render_widget(bg_block, area);

    match &state.view {
        ViewState::Landing => {
            frame.render_widget(
                widgets::LandingPage::new(appearance, state.animation_frame),
                area,
            );
        }
        ViewState::Browse(browse) => {
            let areas = layout::create(area);
            frame.render_widget(widgets::MainHeader::new(&state.view, appearance), areas.header);
            render_browse(frame, browse, appearance, state.animation_frame, areas.body);
        }
        ViewState::Detail(detail) => {
            let areas = layout::create(area);
            frame.render_widget(widgets::MainHeader::new(&state.view, appearance), areas.header);
            render_detail(frame, detail, appearance, areas.body);
        }
    }

    // Settings card sits above every view
    if let Some(overlay) = state.settings_overlay {
        frame.render_widget(
            widgets::SettingsPanel::new(overlay, state.theme(), state.text_size(), appearance),
            area,
        );
    }
}

fn render_browse(
    frame: &mut Frame,
    browse: &BrowseState,
    appearance: Appearance,
    animation_frame: u64,
    area: Rect,
) {
    let [search, _, results] = Layout::vertical([
        Constraint::Length(widgets::SEARCH_SECTION_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area.inner(ratatui::layout::Margin::new(1, 0)));

    frame.render_widget(
        widgets::SearchSection::new(browse, appearance, animation_frame),
        search,
    );
    frame.render_widget(widgets::PlantGrid::new(browse, appearance), results);
}

fn render_detail(frame: &mut Frame, detail: &DetailState, appearance: Appearance, area: Rect) {
    let content = area.inner(ratatui::layout::Margin::new(1, 0));
    frame.render_widget(widgets::PlantDetails::new(detail, appearance), content);

    if let Some(part) = detail.expanded_part() {
        frame.render_widget(
            widgets::HotspotPanel::new(&detail.plant, part, appearance),
            area,
        );
    }
}

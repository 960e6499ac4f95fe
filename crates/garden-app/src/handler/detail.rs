//! Plant detail handlers: hotspot focus and expansion

use crate::state::{AppState, DetailState, ViewState};

use super::UpdateResult;

fn with_detail(state: &mut AppState, f: impl FnOnce(&mut DetailState)) -> UpdateResult {
    if let ViewState::Detail(detail) = &mut state.view {
        f(detail);
    }
    UpdateResult::none()
}

pub fn handle_focus_next_hotspot(state: &mut AppState) -> UpdateResult {
    with_detail(state, DetailState::focus_next)
}

pub fn handle_focus_prev_hotspot(state: &mut AppState) -> UpdateResult {
    with_detail(state, DetailState::focus_prev)
}

pub fn handle_expand_focused(state: &mut AppState) -> UpdateResult {
    with_detail(state, |detail| {
        detail.expand_focused();
    })
}

/// Out-of-range indices (e.g. pressing `5` on a plant with one hotspot) are ignored.
pub fn handle_expand_hotspot(state: &mut AppState, index: usize) -> UpdateResult {
    with_detail(state, |detail| {
        detail.expand(index);
    })
}

pub fn handle_close_hotspot(state: &mut AppState) -> UpdateResult {
    with_detail(state, |detail| {
        detail.collapse();
    })
}

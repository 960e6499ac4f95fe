//! View transitions: landing, browse and plant detail

use tracing::debug;

use crate::state::{AppState, BrowseState, DetailState, ViewState};

use super::{UpdateAction, UpdateResult};

/// Landing -> Browse. Each entry starts from an empty browse state.
pub fn handle_enter_garden(state: &mut AppState) -> UpdateResult {
    if matches!(state.view, ViewState::Landing) {
        state.view = ViewState::Browse(BrowseState::new());
        debug!("Entered the garden");
    }
    UpdateResult::none()
}

/// Any view -> Landing.
///
/// A search still in flight is cancelled; its task is aborted and its result
/// would be discarded anyway since no browse state survives.
pub fn handle_go_home(state: &mut AppState) -> UpdateResult {
    let cancelled = state.view.browse_mut().and_then(|b| b.cancel_search());
    state.view = ViewState::Landing;

    match cancelled {
        Some(id) => {
            debug!("Cancelled search {:?} on return home", id);
            UpdateResult::action(UpdateAction::CancelSearch)
        }
        None => UpdateResult::none(),
    }
}

/// Detail -> Browse, restoring the query, mode, results and selection.
pub fn handle_go_back(state: &mut AppState) -> UpdateResult {
    let view = std::mem::take(&mut state.view);
    state.view = match view {
        ViewState::Detail(detail) => ViewState::Browse(detail.into_browse()),
        other => other,
    };
    UpdateResult::none()
}

pub fn handle_open_selected(state: &mut AppState) -> UpdateResult {
    let selected = match &state.view {
        ViewState::Browse(browse) => browse.selected,
        _ => return UpdateResult::none(),
    };
    handle_select_plant(state, selected)
}

/// Browse -> Detail for the card at `index`.
pub fn handle_select_plant(state: &mut AppState, index: usize) -> UpdateResult {
    let view = std::mem::take(&mut state.view);
    state.view = match view {
        ViewState::Browse(mut browse) => match browse.results.get(index).cloned() {
            Some(plant) => {
                debug!("Opening {}", plant.name);
                browse.selected = index;
                ViewState::Detail(DetailState::new(plant, browse))
            }
            None => ViewState::Browse(browse),
        },
        other => other,
    };
    UpdateResult::none()
}

//! Browse view handlers: search form, search lifecycle, results grid

use garden_core::{PlantRecord, SearchMode, SearchQuery};
use tracing::debug;

use crate::state::{AppState, GridMove, SearchRequestId, ViewState};

use super::{UpdateAction, UpdateResult};

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    if let ViewState::Browse(browse) = &mut state.view {
        browse.focus = browse.focus.next();
    }
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    if let ViewState::Browse(browse) = &mut state.view {
        browse.focus = browse.focus.prev();
    }
    UpdateResult::none()
}

pub fn handle_input_char(state: &mut AppState, c: char) -> UpdateResult {
    if let ViewState::Browse(browse) = &mut state.view {
        if let Some(mode) = browse.focus.search_mode() {
            browse.form.input_mut(mode).push(c);
        }
    }
    UpdateResult::none()
}

pub fn handle_input_backspace(state: &mut AppState) -> UpdateResult {
    if let ViewState::Browse(browse) = &mut state.view {
        if let Some(mode) = browse.focus.search_mode() {
            browse.form.input_mut(mode).pop();
        }
    }
    UpdateResult::none()
}

/// The focused input's query, if the browse view has one to submit.
fn submittable(state: &AppState) -> Option<(SearchQuery, SearchMode)> {
    let ViewState::Browse(browse) = &state.view else {
        return None;
    };
    let mode = browse.focus.search_mode()?;
    browse.form.query(mode).map(|query| (query, mode))
}

/// Issue a search for the focused input.
///
/// Blank input is ignored. Submitting while a search is in flight supersedes
/// it: the new request id becomes the only one whose results are applied.
pub fn handle_submit_search(state: &mut AppState) -> UpdateResult {
    let Some((query, mode)) = submittable(state) else {
        debug!("Ignoring submit: nothing to search for");
        return UpdateResult::none();
    };

    let request_id = state.next_search_id();
    let delay = state.settings.search.delay();

    if let ViewState::Browse(browse) = &mut state.view {
        browse.begin_search(request_id, query.clone(), mode);
    }

    debug!("Search {:?}: '{}' ({})", request_id, query, mode);
    UpdateResult::action(UpdateAction::RunSearch {
        request_id,
        query,
        mode,
        delay,
    })
}

/// Apply search results to the live browse state.
///
/// In detail view the retained browse state is updated, so "back" shows the
/// fresh results. Completions for superseded or cancelled requests, or ones
/// arriving on the landing page, are dropped.
pub fn handle_search_completed(
    state: &mut AppState,
    request_id: SearchRequestId,
    results: Vec<PlantRecord>,
) -> UpdateResult {
    let count = results.len();
    let applied = match state.view.browse_mut() {
        Some(browse) => browse.complete_search(request_id, results),
        None => false,
    };
    if applied {
        debug!("Search {:?} completed with {} result(s)", request_id, count);
    } else {
        debug!("Discarding stale search result {:?}", request_id);
    }
    UpdateResult::none()
}

pub fn handle_move_selection(state: &mut AppState, direction: GridMove) -> UpdateResult {
    let columns = state.text_size().grid_columns();
    if let ViewState::Browse(browse) = &mut state.view {
        browse.move_selection(direction, columns);
    }
    UpdateResult::none()
}

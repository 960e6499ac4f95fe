//! Application state (Model in TEA pattern)
//!
//! The active view is a tagged union: each variant owns exactly the data that
//! view needs, so a detail view without a plant or a browse view carrying a
//! stale plant cannot be represented.

use std::sync::Arc;

use garden_core::{
    art, Catalog, HighlightedPart, PlantArt, PlantRecord, SearchMode, SearchQuery, TextSize, Theme,
};

use crate::config::{PreferenceStore, Settings};

/// Identifies one issued search. Strictly increasing per [`AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchRequestId(pub u64);

/// Application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Browse State
// ─────────────────────────────────────────────────────────────────────────────

/// Which part of the browse view receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseFocus {
    /// "Search Plants" input
    #[default]
    NameInput,
    /// "Search by Condition" input
    ConditionInput,
    /// Results grid
    Results,
}

impl BrowseFocus {
    pub fn next(self) -> Self {
        match self {
            BrowseFocus::NameInput => BrowseFocus::ConditionInput,
            BrowseFocus::ConditionInput => BrowseFocus::Results,
            BrowseFocus::Results => BrowseFocus::NameInput,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            BrowseFocus::NameInput => BrowseFocus::Results,
            BrowseFocus::ConditionInput => BrowseFocus::NameInput,
            BrowseFocus::Results => BrowseFocus::ConditionInput,
        }
    }

    /// Search mode of the focused input, `None` when the grid has focus.
    pub fn search_mode(self) -> Option<SearchMode> {
        match self {
            BrowseFocus::NameInput => Some(SearchMode::ByName),
            BrowseFocus::ConditionInput => Some(SearchMode::ByCondition),
            BrowseFocus::Results => None,
        }
    }
}

/// Raw contents of the two search inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub name_input: String,
    pub condition_input: String,
}

impl SearchForm {
    pub fn input(&self, mode: SearchMode) -> &str {
        match mode {
            SearchMode::ByName => &self.name_input,
            SearchMode::ByCondition => &self.condition_input,
        }
    }

    pub fn input_mut(&mut self, mode: SearchMode) -> &mut String {
        match mode {
            SearchMode::ByName => &mut self.name_input,
            SearchMode::ByCondition => &mut self.condition_input,
        }
    }

    /// Submittable query for `mode`; `None` while the input is blank.
    pub fn query(&self, mode: SearchMode) -> Option<SearchQuery> {
        SearchQuery::new(self.input(mode))
    }
}

/// The most recently issued search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedSearch {
    pub query: SearchQuery,
    pub mode: SearchMode,
}

/// Keyboard movement within the results grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Left,
    Right,
    Up,
    Down,
}

/// State of the browse view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseState {
    pub form: SearchForm,
    pub focus: BrowseFocus,

    /// Last issued search, `None` until the first submission
    pub search: Option<SubmittedSearch>,

    /// Results of the last completed search, in catalog order
    pub results: Vec<PlantRecord>,

    /// Outstanding search, if any
    pub pending: Option<SearchRequestId>,

    /// Selected card in `results`
    pub selected: usize,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a newly issued search. Any earlier pending request is superseded.
    pub fn begin_search(&mut self, id: SearchRequestId, query: SearchQuery, mode: SearchMode) {
        self.search = Some(SubmittedSearch { query, mode });
        self.pending = Some(id);
    }

    /// Apply results for `id`. Returns `false` (and changes nothing) when `id`
    /// is not the outstanding request.
    pub fn complete_search(&mut self, id: SearchRequestId, results: Vec<PlantRecord>) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;
        self.results = results;
        self.selected = 0;
        true
    }

    /// Drop the outstanding request, returning its id.
    pub fn cancel_search(&mut self) -> Option<SearchRequestId> {
        self.pending.take()
    }

    pub fn selected_plant(&self) -> Option<&PlantRecord> {
        self.results.get(self.selected)
    }

    /// Move the selection in a grid with `columns` cards per row.
    ///
    /// Moves that would leave the grid or wrap across rows are ignored.
    pub fn move_selection(&mut self, direction: GridMove, columns: usize) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        let columns = columns.max(1);
        let current = self.selected.min(len - 1);

        self.selected = match direction {
            GridMove::Left if current % columns > 0 => current - 1,
            GridMove::Right if (current + 1) % columns != 0 && current + 1 < len => current + 1,
            GridMove::Up if current >= columns => current - columns,
            GridMove::Down if current + columns < len => current + columns,
            _ => current,
        };
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail State
// ─────────────────────────────────────────────────────────────────────────────

/// State of the plant detail view
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub plant: PlantRecord,

    /// Picture resolved from `plant.image` when the view opened
    art: PlantArt,

    /// Index into `plant.highlighted_parts` of the open hotspot panel
    expanded: Option<usize>,

    /// Keyboard-focused hotspot marker
    focused: usize,

    /// Browse state restored on "back"
    return_to: Box<BrowseState>,
}

impl DetailState {
    pub fn new(plant: PlantRecord, return_to: BrowseState) -> Self {
        Self {
            art: art::resolve(&plant.image),
            plant,
            expanded: None,
            focused: 0,
            return_to: Box::new(return_to),
        }
    }

    pub fn art(&self) -> &PlantArt {
        &self.art
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.expanded
    }

    pub fn expanded_part(&self) -> Option<&HighlightedPart> {
        self.expanded.and_then(|i| self.plant.highlighted_part(i))
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn hotspot_count(&self) -> usize {
        self.plant.hotspot_count()
    }

    /// Open the panel for hotspot `index`, replacing any open panel.
    ///
    /// Returns `false` for an index the plant does not have.
    pub fn expand(&mut self, index: usize) -> bool {
        if index >= self.hotspot_count() {
            return false;
        }
        self.expanded = Some(index);
        self.focused = index;
        true
    }

    pub fn expand_focused(&mut self) -> bool {
        self.expand(self.focused)
    }

    /// Close the open panel. Returns `false` if none was open.
    pub fn collapse(&mut self) -> bool {
        self.expanded.take().is_some()
    }

    pub fn focus_next(&mut self) {
        let count = self.hotspot_count();
        if count > 0 {
            self.focused = (self.focused + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.hotspot_count();
        if count > 0 {
            self.focused = (self.focused + count - 1) % count;
        }
    }

    pub fn return_to(&self) -> &BrowseState {
        &self.return_to
    }

    pub fn return_to_mut(&mut self) -> &mut BrowseState {
        &mut self.return_to
    }

    /// Leave the detail view, yielding the browse state to restore.
    pub fn into_browse(self) -> BrowseState {
        *self.return_to
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// View
// ─────────────────────────────────────────────────────────────────────────────

/// The active screen
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    /// Welcome screen
    #[default]
    Landing,

    /// Search and results
    Browse(BrowseState),

    /// One plant, with the browse state to return to
    Detail(DetailState),
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Landing => "landing",
            ViewState::Browse(_) => "browse",
            ViewState::Detail(_) => "detail",
        }
    }

    /// The live browse state: the active one in browse, the retained one in detail.
    pub fn browse(&self) -> Option<&BrowseState> {
        match self {
            ViewState::Landing => None,
            ViewState::Browse(browse) => Some(browse),
            ViewState::Detail(detail) => Some(detail.return_to()),
        }
    }

    pub fn browse_mut(&mut self) -> Option<&mut BrowseState> {
        match self {
            ViewState::Landing => None,
            ViewState::Browse(browse) => Some(browse),
            ViewState::Detail(detail) => Some(detail.return_to_mut()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Overlay
// ─────────────────────────────────────────────────────────────────────────────

/// Rows of the settings card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsRow {
    #[default]
    Theme,
    TextSize,
}

impl SettingsRow {
    pub fn toggle(self) -> Self {
        match self {
            SettingsRow::Theme => SettingsRow::TextSize,
            SettingsRow::TextSize => SettingsRow::Theme,
        }
    }
}

/// Open settings card, layered over whatever view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsOverlayState {
    pub row: SettingsRow,
}

// ─────────────────────────────────────────────────────────────────────────────
// App State
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state (the Model)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub view: ViewState,

    /// Settings card, when open
    pub settings_overlay: Option<SettingsOverlayState>,

    /// Persisted theme and text size
    pub preferences: PreferenceStore,

    /// Settings from config.toml
    pub settings: Settings,

    pub catalog: Arc<Catalog>,

    /// Tick counter driving landing and spinner animation
    pub animation_frame: u64,

    next_search_id: u64,
}

impl AppState {
    /// State with default settings and an in-memory preference store.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_settings(catalog, Settings::default(), PreferenceStore::in_memory())
    }

    pub fn with_settings(
        catalog: Arc<Catalog>,
        settings: Settings,
        preferences: PreferenceStore,
    ) -> Self {
        Self {
            phase: AppPhase::Running,
            view: ViewState::Landing,
            settings_overlay: None,
            preferences,
            settings,
            catalog,
            animation_frame: 0,
            next_search_id: 0,
        }
    }

    pub fn theme(&self) -> Theme {
        self.preferences.theme()
    }

    pub fn text_size(&self) -> TextSize {
        self.preferences.text_size()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn is_settings_open(&self) -> bool {
        self.settings_overlay.is_some()
    }

    /// Allocate the next search id.
    pub fn next_search_id(&mut self) -> SearchRequestId {
        self.next_search_id += 1;
        SearchRequestId(self.next_search_id)
    }

    /// Advance animation, if enabled.
    pub fn tick(&mut self) {
        if self.settings.ui.animations {
            self.animation_frame = self.animation_frame.wrapping_add(1);
        }
    }
}

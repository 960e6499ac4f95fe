//! Message types for the application (TEA pattern)

use garden_core::{PlantRecord, TextSize, Theme};

use crate::input_key::InputKey;
use crate::state::{GridMove, SearchRequestId};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Landing -> Browse with a fresh, empty browse state
    EnterGarden,

    /// Any view -> Landing, cancelling a pending search
    GoHome,

    /// Detail -> Browse, restoring the retained browse state
    GoBack,

    // ─────────────────────────────────────────────────────────
    // Search Form
    // ─────────────────────────────────────────────────────────
    /// Cycle focus forward: name input, condition input, results
    FocusNext,
    FocusPrev,

    /// Type a character into the focused input
    InputChar(char),

    /// Delete the last character of the focused input
    InputBackspace,

    /// Submit the focused input (ignored while it is blank)
    SubmitSearch,

    /// A search task finished
    SearchCompleted {
        request_id: SearchRequestId,
        results: Vec<PlantRecord>,
    },

    // ─────────────────────────────────────────────────────────
    // Results Grid
    // ─────────────────────────────────────────────────────────
    MoveSelection(GridMove),

    /// Open the selected card
    OpenSelected,

    /// Open the card at an index of the current results
    SelectPlant(usize),

    // ─────────────────────────────────────────────────────────
    // Plant Detail
    // ─────────────────────────────────────────────────────────
    FocusNextHotspot,
    FocusPrevHotspot,

    /// Expand the keyboard-focused hotspot
    ExpandFocusedHotspot,

    /// Expand a hotspot by index (replaces any open panel)
    ExpandHotspot(usize),

    /// Close the open hotspot panel
    CloseHotspot,

    // ─────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────
    /// Open or close the settings card
    ToggleSettings,
    CloseSettings,

    /// Move between the Theme and Text Size rows
    SettingsSwitchRow,

    /// Cycle the value of the highlighted row
    SettingsCycleNext,
    SettingsCyclePrev,

    ToggleTheme,
    SetTheme(Theme),
    SetTextSize(TextSize),
}

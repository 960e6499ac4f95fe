//! garden-app - Application state and orchestration for Herbal Garden
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! the view state machine, the search lifecycle with its background tasks, the
//! settings file and the persistent preference store. It has no terminal
//! dependency; the TUI crate renders [`AppState`] and feeds [`Message`]s in.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::{Engine, EngineOptions};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{
    AppState, BrowseFocus, BrowseState, DetailState, GridMove, SearchRequestId, SettingsRow,
    ViewState,
};

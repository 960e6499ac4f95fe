//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per view
//! - `navigation`: Landing / browse / detail transitions
//! - `browse`: Search form, search lifecycle and results grid
//! - `detail`: Hotspot focus and expansion
//! - `settings`: Settings card and preference changes

pub(crate) mod browse;
pub(crate) mod detail;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod settings;
pub(crate) mod update;


use std::time::Duration;

use garden_core::{SearchMode, SearchQuery};

use crate::message::Message;
use crate::state::SearchRequestId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Run a catalog search after `delay`, replacing any search still running.
    ///
    /// Completion is reported as `Message::SearchCompleted` carrying the same
    /// `request_id`.
    RunSearch {
        request_id: SearchRequestId,
        query: SearchQuery,
        mode: SearchMode,
        delay: Duration,
    },

    /// Abort the running search task, if any
    CancelSearch,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

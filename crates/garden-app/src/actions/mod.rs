//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use garden_core::Catalog;
use tokio::sync::mpsc;
use tracing::debug;

use crate::message::Message;
use crate::UpdateAction;

pub mod search;

pub use search::{spawn_search, SearchTaskSlot};

/// Execute an action by spawning or cancelling background tasks
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    catalog: Arc<Catalog>,
    search_task: &SearchTaskSlot,
) {
    match action {
        UpdateAction::RunSearch {
            request_id,
            query,
            mode,
            delay,
        } => {
            let handle = spawn_search(request_id, query, mode, delay, catalog, msg_tx);
            if search_task.replace(handle) {
                debug!("Superseded running search with {:?}", request_id);
            }
        }

        UpdateAction::CancelSearch => {
            search_task.abort();
        }
    }
}

//! Simulated-latency catalog search
//!
//! Each search runs as its own tokio task: sleep for the configured delay,
//! filter the catalog, report back on the message channel. At most one task
//! is kept alive; starting a new one aborts the previous.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use garden_core::{Catalog, SearchMode, SearchQuery};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::message::Message;
use crate::state::SearchRequestId;

/// Handle of the search task currently running, if any.
#[derive(Debug, Clone, Default)]
pub struct SearchTaskSlot {
    inner: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SearchTaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handle`, aborting the previous task. Returns `true` if a
    /// still-running task was aborted.
    pub fn replace(&self, handle: JoinHandle<()>) -> bool {
        match self.inner.lock() {
            Ok(mut slot) => {
                let previous = slot.replace(handle);
                abort_running(previous)
            }
            Err(e) => {
                warn!("Search task slot poisoned: {}", e);
                false
            }
        }
    }

    /// Abort the stored task. Returns `true` if one was still running.
    pub fn abort(&self) -> bool {
        match self.inner.lock() {
            Ok(mut slot) => abort_running(slot.take()),
            Err(e) => {
                warn!("Search task slot poisoned: {}", e);
                false
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner
            .lock()
            .map(|slot| slot.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }
}

fn abort_running(handle: Option<JoinHandle<()>>) -> bool {
    match handle {
        Some(h) if !h.is_finished() => {
            h.abort();
            true
        }
        _ => false,
    }
}

/// Spawn a search that reports `Message::SearchCompleted` after `delay`.
pub fn spawn_search(
    request_id: SearchRequestId,
    query: SearchQuery,
    mode: SearchMode,
    delay: Duration,
    catalog: Arc<Catalog>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let results = garden_core::search(&catalog, &query, mode);

        if msg_tx
            .send(Message::SearchCompleted {
                request_id,
                results,
            })
            .await
            .is_err()
        {
            debug!("Search {:?} finished after channel closed", request_id);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::embedded().unwrap())
    }

    #[tokio::test]
    async fn test_spawn_search_reports_results() {
        let (tx, mut rx) = mpsc::channel(4);
        let query = SearchQuery::new("turmeric").unwrap();

        spawn_search(
            SearchRequestId(7),
            query,
            SearchMode::ByName,
            Duration::ZERO,
            catalog(),
            tx,
        )
        .await
        .unwrap();

        match rx.recv().await {
            Some(Message::SearchCompleted {
                request_id,
                results,
            }) => {
                assert_eq!(request_id, SearchRequestId(7));
                assert_eq!(results.len(), 1);
                assert_eq!(results[0].name, "Turmeric");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_replace_aborts_previous_search() {
        let (tx, mut rx) = mpsc::channel(4);
        let slot = SearchTaskSlot::new();

        let slow = spawn_search(
            SearchRequestId(1),
            SearchQuery::new("aloe").unwrap(),
            SearchMode::ByName,
            Duration::from_secs(60),
            catalog(),
            tx.clone(),
        );
        assert!(!slot.replace(slow));
        assert!(slot.is_running());

        let fast = spawn_search(
            SearchRequestId(2),
            SearchQuery::new("ginger").unwrap(),
            SearchMode::ByName,
            Duration::ZERO,
            catalog(),
            tx,
        );
        assert!(slot.replace(fast), "slow search should have been aborted");

        match rx.recv().await {
            Some(Message::SearchCompleted { request_id, .. }) => {
                assert_eq!(request_id, SearchRequestId(2));
            }
            other => panic!("unexpected message: {:?}", other),
        }

        // The aborted task dropped its sender, and the fast one finished
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_abort_cancels_running_search() {
        let (tx, mut rx) = mpsc::channel(4);
        let slot = SearchTaskSlot::new();

        slot.replace(spawn_search(
            SearchRequestId(1),
            SearchQuery::new("aloe").unwrap(),
            SearchMode::ByName,
            Duration::from_secs(60),
            catalog(),
            tx,
        ));

        assert!(slot.abort());
        assert!(!slot.is_running());
        assert!(rx.recv().await.is_none());
    }

    #[test]
    fn test_abort_empty_slot() {
        let slot = SearchTaskSlot::new();
        assert!(!slot.abort());
        assert!(!slot.is_running());
    }
}

//! Engine - owns the application state, message channel and background tasks
//!
//! The TUI runner drives the engine: it forwards terminal input as messages,
//! drains the channel each frame and renders `engine.state`.

use std::path::PathBuf;
use std::sync::Arc;

use garden_core::prelude::*;
use garden_core::Catalog;
use tokio::sync::mpsc;

use crate::actions::SearchTaskSlot;
use crate::config::{self, PreferenceStore, TomlFileBackend};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Where the engine looks for its files
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Overrides the data directory (preferences, logs)
    pub data_dir: Option<PathBuf>,
    /// Overrides the settings file location
    pub config_path: Option<PathBuf>,
}

/// Orchestration engine for Herbal Garden.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, search tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// The search task currently in flight
    search_task: SearchTaskSlot,
}

impl Engine {
    /// Create an engine from files on disk.
    ///
    /// Performs all startup work:
    /// - Writes a default config.toml if missing (non-fatal)
    /// - Loads settings
    /// - Loads and validates the bundled catalog (fatal on error)
    /// - Opens the preference store
    /// - Spawns the signal handler
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(options: &EngineOptions) -> Result<Self> {
        let config_path = config::config_file_path(options.config_path.as_deref());
        if let Err(e) = config::init_config_file(&config_path) {
            warn!("Failed to initialize config file: {}", e);
        }
        let settings = config::load_settings(&config_path);

        let catalog = Arc::new(
            Catalog::embedded().context("Failed to load bundled catalog")?,
        );
        info!("Loaded catalog with {} plants", catalog.len());

        let preferences_path = config::preferences_file_path(options.data_dir.as_deref());
        let preferences = PreferenceStore::load(TomlFileBackend::open(preferences_path));

        let engine = Self::from_state(AppState::with_settings(catalog, settings, preferences));
        signals::spawn_signal_handler(engine.msg_tx.clone());
        Ok(engine)
    }

    /// Wrap an already-built state. Spawns nothing.
    pub fn from_state(state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        Self {
            state,
            msg_tx,
            msg_rx,
            search_task: SearchTaskSlot::new(),
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.search_task);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn is_search_running(&self) -> bool {
        self.search_task.is_running()
    }

    /// Stop background work before exit.
    pub fn shutdown(&mut self) {
        if self.search_task.abort() {
            debug!("Aborted in-flight search on shutdown");
        }
        info!("Engine shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::state::ViewState;
    use std::time::Duration;
    use tempfile::tempdir;

    fn test_engine(delay_ms: u64) -> Engine {
        let catalog = Arc::new(Catalog::embedded().unwrap());
        let mut state = AppState::new(catalog);
        state.settings.search.delay_ms = delay_ms;
        Engine::from_state(state)
    }

    fn type_text(engine: &mut Engine, text: &str) {
        for c in text.chars() {
            engine.process_message(Message::Key(InputKey::Char(c)));
        }
    }

    async fn wait_for_search(engine: &mut Engine) {
        let msg = tokio::time::timeout(Duration::from_secs(5), engine.msg_rx.recv())
            .await
            .expect("search timed out")
            .expect("channel closed");
        engine.process_message(msg);
    }

    #[tokio::test]
    async fn test_search_round_trip_through_engine() {
        let mut engine = test_engine(0);
        engine.process_message(Message::EnterGarden);
        type_text(&mut engine, "ginseng");
        engine.process_message(Message::Key(InputKey::Enter));

        let ViewState::Browse(browse) = &engine.state.view else {
            panic!("expected browse view");
        };
        assert!(browse.is_loading());

        wait_for_search(&mut engine).await;

        let ViewState::Browse(browse) = &engine.state.view else {
            panic!("expected browse view");
        };
        assert!(!browse.is_loading());
        assert_eq!(browse.results.len(), 1);
        assert_eq!(browse.results[0].name, "Ginseng");
    }

    #[tokio::test]
    async fn test_resubmit_supersedes_running_search() {
        let mut engine = test_engine(200);
        engine.process_message(Message::EnterGarden);
        type_text(&mut engine, "aloe");
        engine.process_message(Message::SubmitSearch);

        // Replace the query and submit again before the first completes
        for _ in 0..4 {
            engine.process_message(Message::InputBackspace);
        }
        type_text(&mut engine, "ginger");
        engine.process_message(Message::SubmitSearch);

        wait_for_search(&mut engine).await;

        let ViewState::Browse(browse) = &engine.state.view else {
            panic!("expected browse view");
        };
        assert!(!browse.is_loading());
        assert_eq!(browse.results.len(), 1);
        assert_eq!(browse.results[0].name, "Ginger");
        assert_eq!(browse.search.as_ref().unwrap().query.as_str(), "ginger");
    }

    #[tokio::test]
    async fn test_go_home_cancels_search() {
        let mut engine = test_engine(10_000);
        engine.process_message(Message::EnterGarden);
        type_text(&mut engine, "aloe");
        engine.process_message(Message::SubmitSearch);
        assert!(engine.is_search_running());

        engine.process_message(Message::GoHome);
        assert!(!engine.is_search_running());
        assert_eq!(engine.state.view, ViewState::Landing);
    }

    #[tokio::test]
    async fn test_engine_new_with_temp_dirs() {
        let temp = tempdir().unwrap();
        let options = EngineOptions {
            data_dir: Some(temp.path().join("data")),
            config_path: Some(temp.path().join("config.toml")),
        };

        let mut engine = Engine::new(&options).unwrap();
        assert!(temp.path().join("config.toml").exists());
        assert_eq!(engine.state.catalog.len(), 10);
        assert!(!engine.should_quit());

        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
        engine.shutdown();
    }

    #[tokio::test]
    async fn test_drain_pending_messages() {
        let mut engine = test_engine(0);
        let tx = engine.msg_sender();
        tx.send(Message::EnterGarden).await.unwrap();
        tx.send(Message::Tick).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 2);
        assert!(matches!(engine.state.view, ViewState::Browse(_)));
        assert_eq!(engine.drain_pending_messages(), 0);
    }
}

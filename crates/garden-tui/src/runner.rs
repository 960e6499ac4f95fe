//! Main TUI runner: terminal lifecycle and the event loop
//!
//! The [`Engine`] owns all state; this module only draws it, turns terminal
//! input into messages and tears the terminal down again on every exit path.

use garden_app::{Engine, EngineOptions};
use garden_core::prelude::*;
use ratatui::DefaultTerminal;

use crate::{event, render, terminal};

/// Run the garden TUI until the user quits.
pub async fn run(options: EngineOptions) -> Result<()> {
    // Engine first: a bad catalog or config dir should fail before the
    // terminal switches to the alternate screen
    let mut engine = Engine::new(&options)?;

    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    info!("Terminal initialized, entering event loop");

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("Event loop ended with error: {}", e);
    }
    result
}

/// Draw, poll, update until the state asks to quit
fn run_loop(term: &mut DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Search completions and signals arrive through the channel
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        term.draw(|frame| render::view(frame, &engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }
    Ok(())
}

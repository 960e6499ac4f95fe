//! End-to-end flows through the engine: keys in, state and screen out

use std::time::Duration;

use garden_app::{Engine, EngineOptions, InputKey, Message, ViewState};
use garden_core::{TextSize, Theme};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tempfile::TempDir;

fn options(temp: &TempDir) -> EngineOptions {
    EngineOptions {
        data_dir: Some(temp.path().join("data")),
        config_path: Some(temp.path().join("config.toml")),
    }
}

/// Engine backed by files in `temp`, with no artificial search latency
fn fast_engine(temp: &TempDir) -> Engine {
    std::fs::write(temp.path().join("config.toml"), "[search]\ndelay_ms = 0\n").unwrap();
    Engine::new(&options(temp)).unwrap()
}

fn press(engine: &mut Engine, key: InputKey) {
    engine.process_message(Message::Key(key));
}

fn type_text(engine: &mut Engine, text: &str) {
    for c in text.chars() {
        press(engine, InputKey::Char(c));
    }
}

async fn wait_for_search(engine: &mut Engine) {
    let msg = tokio::time::timeout(Duration::from_secs(5), engine.msg_rx.recv())
        .await
        .expect("search timed out")
        .expect("channel closed");
    engine.process_message(msg);
}

fn screen(engine: &Engine) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal
        .draw(|frame| garden_tui::render::view(frame, &engine.state))
        .unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test]
async fn test_search_by_condition_and_open_detail() {
    let temp = TempDir::new().unwrap();
    let mut engine = fast_engine(&temp);

    press(&mut engine, InputKey::Enter);
    assert!(matches!(engine.state.view, ViewState::Browse(_)));

    // Name input -> condition input
    press(&mut engine, InputKey::Tab);
    type_text(&mut engine, "flu");
    press(&mut engine, InputKey::Enter);
    assert!(screen(&engine).contains("Searching our botanical database"));

    wait_for_search(&mut engine).await;
    let text = screen(&engine);
    assert!(text.contains("Echinacea"));
    assert!(text.contains("matching \"flu\""));

    // Condition input -> results, then open the first card
    press(&mut engine, InputKey::Tab);
    press(&mut engine, InputKey::Enter);
    let ViewState::Detail(detail) = &engine.state.view else {
        panic!("expected detail view");
    };
    assert_eq!(detail.plant.name, "Echinacea");

    press(&mut engine, InputKey::Char('2'));
    assert!(screen(&engine).contains("Medicinal Properties"));

    // First Esc closes the panel, second returns to the kept results
    press(&mut engine, InputKey::Esc);
    press(&mut engine, InputKey::Esc);
    let ViewState::Browse(browse) = &engine.state.view else {
        panic!("expected browse view");
    };
    assert_eq!(browse.results.len(), 1);
    assert_eq!(browse.form.input(garden_core::SearchMode::ByCondition), "flu");
}

#[tokio::test]
async fn test_blank_query_does_not_search() {
    let temp = TempDir::new().unwrap();
    let mut engine = fast_engine(&temp);

    press(&mut engine, InputKey::Enter);
    type_text(&mut engine, "   ");
    press(&mut engine, InputKey::Enter);

    assert!(!engine.is_search_running());
    let ViewState::Browse(browse) = &engine.state.view else {
        panic!("expected browse view");
    };
    assert!(browse.search.is_none());
}

#[tokio::test]
async fn test_preferences_survive_restart() {
    let temp = TempDir::new().unwrap();
    {
        let mut engine = fast_engine(&temp);
        engine.process_message(Message::SetTheme(Theme::Light));

        press(&mut engine, InputKey::F(2));
        assert!(engine.state.is_settings_open());
        press(&mut engine, InputKey::Char('4'));
        press(&mut engine, InputKey::Esc);
        assert!(!engine.state.is_settings_open());
        engine.shutdown();
    }

    let engine = Engine::new(&options(&temp)).unwrap();
    assert_eq!(engine.state.theme(), Theme::Light);
    assert_eq!(engine.state.text_size(), TextSize::ExtraLarge);
}

#[tokio::test]
async fn test_ctrl_c_quits_from_any_view() {
    let temp = TempDir::new().unwrap();
    let mut engine = fast_engine(&temp);

    press(&mut engine, InputKey::Enter);
    press(&mut engine, InputKey::F(2));
    press(&mut engine, InputKey::CharCtrl('c'));
    assert!(engine.should_quit());
}

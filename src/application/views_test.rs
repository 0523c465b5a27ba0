use anyhow::Result;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use super::render;
use super::CHAT_HINT;
use super::RECOMMENDATIONS_PLACEHOLDER;
use super::SELECTION_PLACEHOLDER;
use crate::domain::models::Action;
use crate::domain::models::ChatMessage;
use crate::domain::models::Event;
use crate::domain::models::Platforms;
use crate::domain::services::AppState;
use crate::domain::services::SessionStore;

fn draw(app_state: &mut AppState) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(160, 40))?;
    terminal.draw(|frame| render(frame, app_state))?;

    let buffer = terminal.backend().buffer();
    let mut lines = vec![];
    for y in 0..buffer.area.height {
        let mut line = String::new();
        for x in 0..buffer.area.width {
            line.push_str(&buffer.get(x, y).symbol);
        }
        lines.push(line);
    }

    return Ok(lines.join("\n"));
}

fn logged_in() -> AppState<'static> {
    let session = SessionStore::default();
    session.set("abc123");
    return AppState::new(session, 5, "");
}

#[test]
fn it_renders_the_login_screen() -> Result<()> {
    let mut app_state = AppState::new(SessionStore::default(), 5, "gordon");
    let screen = draw(&mut app_state)?;

    assert!(screen.contains("Log in"));
    assert!(screen.contains("gordon"));
    assert!(screen.contains("Don't have an account? Press Ctrl+N to register now."));

    return Ok(());
}

#[test]
fn it_masks_the_password() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = AppState::new(SessionStore::default(), 5, "gordon");
    for c in "crowbar".chars() {
        app_state.handle_event(
            Event::KeyboardCharInput(tui_textarea::Input {
                key: tui_textarea::Key::Char(c),
                ctrl: false,
                alt: false,
                shift: false,
            }),
            &tx,
        )?;
    }

    let screen = draw(&mut app_state)?;
    assert!(!screen.contains("crowbar"));
    assert!(screen.contains("•••••••"));

    return Ok(());
}

#[test]
fn it_renders_the_recommendations_placeholder() -> Result<()> {
    let mut app_state = logged_in();
    let screen = draw(&mut app_state)?;

    assert!(screen.contains(RECOMMENDATIONS_PLACEHOLDER));
    assert!(screen.contains("Your games (0/5)"));
    assert!(screen.contains("Ask AI"));

    return Ok(());
}

#[test]
fn it_renders_the_empty_selection_placeholder() -> Result<()> {
    let mut app_state = logged_in();
    let screen = draw(&mut app_state)?;
    assert!(screen.contains(SELECTION_PLACEHOLDER));

    app_state.selection.add("Halo 3");
    let screen = draw(&mut app_state)?;
    assert!(!screen.contains(SELECTION_PLACEHOLDER));
    assert!(screen.contains("Your games (1/5)"));

    return Ok(());
}

#[test]
fn it_renders_selected_games_with_platforms() -> Result<()> {
    let mut app_state = logged_in();
    app_state.selection.add("Halo 3");
    app_state.selection.merge_platforms(
        "Halo 3",
        Platforms {
            xbox: true,
            ..Platforms::default()
        },
    );

    let screen = draw(&mut app_state)?;
    assert!(screen.contains("Halo 3  5/10"));
    assert!(screen.contains("Xbox"));

    return Ok(());
}

#[test]
fn it_renders_the_chat_panel() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = logged_in();
    app_state.handle_event(Event::KeyboardCTRLA(), &tx)?;
    app_state.handle_event(
        Event::ChatResponse(ChatMessage::bot("Try Hollow Knight.")),
        &tx,
    )?;

    let screen = draw(&mut app_state)?;
    assert!(screen.contains(CHAT_HINT));
    assert!(screen.contains("Try Hollow Knight."));
    assert!(screen.contains("Close"));

    app_state.waiting_for_chat = true;
    let screen = draw(&mut app_state)?;
    assert!(screen.contains("Thinking..."));

    return Ok(());
}

use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use super::chat;
use super::game_details;
use super::login;
use super::recommend;
use super::register;
use super::ActionsService;
use super::LOGIN_FAILURE_MESSAGE;
use super::RECOMMEND_FAILURE_MESSAGE;
use super::REGISTER_FAILURE_MESSAGE;
use crate::domain::models::Action;
use crate::domain::models::ChatMessage;
use crate::domain::models::Credentials;
use crate::domain::models::Event;
use crate::domain::models::GameApiBox;
use crate::domain::models::RecommendRequest;
use crate::domain::models::Sender;
use crate::domain::models::CHAT_FAILURE_MESSAGE;
use crate::domain::services::SessionStore;
use crate::infrastructure::api::fake::FakeGameApi;

fn to_api(api: &FakeGameApi) -> GameApiBox {
    return Arc::new(api.clone());
}

fn to_chat_response(event: Option<Event>) -> Result<ChatMessage> {
    match event {
        Some(Event::ChatResponse(msg)) => return Ok(msg),
        _ => bail!("Wrong type from recv"),
    }
}

#[tokio::test]
async fn it_answers_chat_questions() -> Result<()> {
    let api = FakeGameApi::default();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    chat(to_api(&api), "Is Celeste hard?".to_string(), tx).await?;

    let msg = to_chat_response(rx.recv().await)?;
    assert_eq!(msg.sender, Sender::Bot);
    assert_eq!(msg.text, "You asked about Is Celeste hard?");
    assert_eq!(api.calls(), vec!["chat:Is Celeste hard?".to_string()]);

    return Ok(());
}

#[tokio::test]
async fn it_apologizes_when_chat_fails() -> Result<()> {
    let api = FakeGameApi::failing();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    chat(to_api(&api), "Is Celeste hard?".to_string(), tx).await?;

    let msg = to_chat_response(rx.recv().await)?;
    assert_eq!(msg.sender, Sender::Bot);
    assert_eq!(msg.text, CHAT_FAILURE_MESSAGE);

    return Ok(());
}

#[tokio::test]
async fn it_stores_the_token_on_login() -> Result<()> {
    let api = FakeGameApi::default();
    let session = SessionStore::default();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    login(
        to_api(&api),
        session.clone(),
        Credentials::new("gordon", "crowbar"),
        tx,
    )
    .await?;

    assert_eq!(rx.recv().await, Some(Event::LoginSucceeded()));
    assert_eq!(session.token(), Some("token-gordon".to_string()));

    return Ok(());
}

#[tokio::test]
async fn it_reports_failed_logins() -> Result<()> {
    let api = FakeGameApi::failing();
    let session = SessionStore::default();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    login(
        to_api(&api),
        session.clone(),
        Credentials::new("gordon", "wrong"),
        tx,
    )
    .await?;

    assert_eq!(
        rx.recv().await,
        Some(Event::LoginFailed(LOGIN_FAILURE_MESSAGE.to_string()))
    );
    assert!(!session.is_authenticated());

    return Ok(());
}

#[tokio::test]
async fn it_registers_users() -> Result<()> {
    let api = FakeGameApi::default();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    register(to_api(&api), Credentials::new("alyx", "gravitygun"), tx).await?;

    assert_eq!(
        rx.recv().await,
        Some(Event::RegisterSucceeded("alyx".to_string()))
    );
    assert_eq!(api.calls(), vec!["register:alyx".to_string()]);

    return Ok(());
}

#[tokio::test]
async fn it_reports_failed_registrations() -> Result<()> {
    let api = FakeGameApi::failing();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    register(to_api(&api), Credentials::new("alyx", "gravitygun"), tx).await?;

    assert_eq!(
        rx.recv().await,
        Some(Event::RegisterFailed(REGISTER_FAILURE_MESSAGE.to_string()))
    );

    return Ok(());
}

#[tokio::test]
async fn it_returns_recommendations() -> Result<()> {
    let api = FakeGameApi::default();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let request = RecommendRequest {
        game_titles: vec!["Halo 3".to_string(), "Portal".to_string()],
        ratings: vec![8, 10],
    };

    recommend(to_api(&api), request, tx).await?;

    assert_eq!(
        rx.recv().await,
        Some(Event::RecommendResponse(vec![
            "Portal 2".to_string(),
            "Celeste".to_string()
        ]))
    );
    assert_eq!(api.calls(), vec!["recommend:Halo 3,Portal".to_string()]);

    return Ok(());
}

#[tokio::test]
async fn it_reports_failed_recommendations() -> Result<()> {
    let api = FakeGameApi::failing();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    recommend(to_api(&api), RecommendRequest::default(), tx).await?;

    assert_eq!(
        rx.recv().await,
        Some(Event::RecommendFailed(RECOMMEND_FAILURE_MESSAGE.to_string()))
    );

    return Ok(());
}

#[tokio::test]
async fn it_keeps_quiet_when_game_details_fail() -> Result<()> {
    let api = FakeGameApi::failing();
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();

    game_details(to_api(&api), "Halo 3".to_string(), tx).await?;

    assert_eq!(api.calls(), vec!["game-details:Halo 3".to_string()]);
    assert!(rx.try_recv().is_err());

    return Ok(());
}

#[tokio::test]
async fn it_dispatches_actions_until_the_channel_closes() -> Result<()> {
    let api = FakeGameApi::default();
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let worker_api = to_api(&api);
    let worker = tokio::spawn(async move {
        return ActionsService::start(
            worker_api,
            SessionStore::default(),
            Duration::from_millis(10),
            event_tx,
            &mut action_rx,
        )
        .await;
    });

    action_tx.send(Action::GameDetailsRequest("Halo 3".to_string()))?;
    match event_rx.recv().await {
        Some(Event::GameDetailsResponse(name, platforms)) => {
            assert_eq!(name, "Halo 3");
            assert!(platforms.windows);
        }
        _ => bail!("Wrong type from recv"),
    }

    drop(action_tx);
    worker.await??;

    return Ok(());
}

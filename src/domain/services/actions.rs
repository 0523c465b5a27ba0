#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use super::SearchPipeline;
use super::SessionStore;
use crate::domain::models::Action;
use crate::domain::models::ChatMessage;
use crate::domain::models::Credentials;
use crate::domain::models::Event;
use crate::domain::models::GameApiBox;
use crate::domain::models::RecommendRequest;
use crate::domain::models::CHAT_FAILURE_MESSAGE;

pub const LOGIN_FAILURE_MESSAGE: &str = "Login failed. Please check your username and password.";
pub const REGISTER_FAILURE_MESSAGE: &str = "Registration failed. Please try a different username.";
pub const RECOMMEND_FAILURE_MESSAGE: &str = "Couldn't get recommendations. Please try again.";

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Tab - Move focus between the search box, results, your selected games, and the chat.
- Up/Down arrow - Move through search results or selected games. Scrolls the chat when it has focus.
- Enter - Add the highlighted search result. Sends your message when the chat has focus.
- Left/Right arrow - Lower or raise the rating of the highlighted selected game.
- Delete - Remove the highlighted selected game.
- CTRL+G - Get recommendations for your selected games.
- CTRL+A - Open or close the game assistant chat.
- CTRL+L - Log out.
- CTRL+N - Switch between the login and registration screens.
- CTRL+C - Exit.

CHAT:
Put a specific game name in [brackets] for a direct lookup, for example "What is the game [Ready or Not] about?".
        "#;

    return text.trim().to_string();
}

async fn game_details(
    api: GameApiBox,
    name: String,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    match api.game_details(&name).await {
        Ok(platforms) => {
            tx.send(Event::GameDetailsResponse(name, platforms))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, name = %name, "failed to fetch game details");
        }
    }

    return Ok(());
}

async fn recommend(
    api: GameApiBox,
    request: RecommendRequest,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    match api.recommend(&request).await {
        Ok(recommendations) => {
            tx.send(Event::RecommendResponse(recommendations))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, "failed to fetch recommendations");
            tx.send(Event::RecommendFailed(RECOMMEND_FAILURE_MESSAGE.to_string()))?;
        }
    }

    return Ok(());
}

async fn chat(api: GameApiBox, query: String, tx: mpsc::UnboundedSender<Event>) -> Result<()> {
    let msg = match api.chat(&query).await {
        Ok(answer) => ChatMessage::bot(&answer),
        Err(err) => {
            tracing::error!(error = ?err, "failed to fetch chat response");
            ChatMessage::bot(CHAT_FAILURE_MESSAGE)
        }
    };

    tx.send(Event::ChatResponse(msg))?;
    return Ok(());
}

async fn login(
    api: GameApiBox,
    session: SessionStore,
    credentials: Credentials,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    match api.login(&credentials).await {
        Ok(token) => {
            session.set(&token);
            tx.send(Event::LoginSucceeded())?;
        }
        Err(err) => {
            tracing::error!(error = ?err, username = %credentials.username, "login failed");
            tx.send(Event::LoginFailed(LOGIN_FAILURE_MESSAGE.to_string()))?;
        }
    }

    return Ok(());
}

async fn register(
    api: GameApiBox,
    credentials: Credentials,
    tx: mpsc::UnboundedSender<Event>,
) -> Result<()> {
    match api.register(&credentials).await {
        Ok(()) => {
            tx.send(Event::RegisterSucceeded(credentials.username))?;
        }
        Err(err) => {
            tracing::error!(error = ?err, username = %credentials.username, "registration failed");
            tx.send(Event::RegisterFailed(REGISTER_FAILURE_MESSAGE.to_string()))?;
        }
    }

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Performs every network request for the UI. Each request runs as its
    /// own task and reports back through `tx`; searches go through the
    /// debounced pipeline.
    pub async fn start(
        api: GameApiBox,
        session: SessionStore,
        search_debounce: Duration,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let mut search = SearchPipeline::new(api.clone(), search_debounce, tx.clone());

        while let Some(action) = rx.recv().await {
            let worker_tx = tx.clone();
            let worker_api = api.clone();

            match action {
                Action::SearchQuery(query) => {
                    search.query(query);
                }
                Action::GameDetailsRequest(name) => {
                    tokio::spawn(game_details(worker_api, name, worker_tx));
                }
                Action::RecommendRequest(request) => {
                    tokio::spawn(recommend(worker_api, request, worker_tx));
                }
                Action::ChatRequest(query) => {
                    tokio::spawn(chat(worker_api, query, worker_tx));
                }
                Action::LoginRequest(credentials) => {
                    tokio::spawn(login(worker_api, session.clone(), credentials, worker_tx));
                }
                Action::RegisterRequest(credentials) => {
                    tokio::spawn(register(worker_api, credentials, worker_tx));
                }
            }
        }

        return Ok(());
    }
}

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Platforms;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDetailsResponse {
    pub platforms: Platforms,
}

/// Names and ratings travel as parallel sequences: `ratings[i]` rates
/// `game_titles[i]`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub game_titles: Vec<String>,
    pub ratings: Vec<u8>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Credentials {
        return Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
    }
}

pub type GameApiBox = Arc<dyn GameApi + Send + Sync>;

#[async_trait]
pub trait GameApi {
    /// Looks up game names matching a partial query.
    async fn search(&self, query: &str) -> Result<Vec<String>>;

    /// Fetches per-platform availability for a single game.
    async fn game_details(&self, name: &str) -> Result<Platforms>;

    async fn recommend(&self, request: &RecommendRequest) -> Result<Vec<String>>;

    /// Sends a single question to the assistant. No prior turns are included,
    /// every question is answered on its own.
    async fn chat(&self, query: &str) -> Result<String>;

    /// Exchanges credentials for a bearer token. Never authenticated.
    async fn login(&self, credentials: &Credentials) -> Result<String>;

    /// Creates a new account. Never authenticated.
    async fn register(&self, credentials: &Credentials) -> Result<()>;
}

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::time;

use crate::domain::models::Credentials;
use crate::domain::models::GameApi;
use crate::domain::models::Platforms;
use crate::domain::models::RecommendRequest;

/// In-memory API that records every call as `endpoint:argument`.
#[derive(Clone, Default)]
pub struct FakeGameApi {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
    pub latency: Duration,
}

impl FakeGameApi {
    pub fn failing() -> FakeGameApi {
        return FakeGameApi {
            fail: true,
            ..FakeGameApi::default()
        };
    }

    pub fn calls(&self) -> Vec<String> {
        return self.calls.lock().unwrap().clone();
    }

    async fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if !self.latency.is_zero() {
            time::sleep(self.latency).await;
        }
        if self.fail {
            bail!("Request failed");
        }

        return Ok(());
    }
}

#[async_trait]
impl GameApi for FakeGameApi {
    #[allow(clippy::implicit_return)]
    async fn search(&self, query: &str) -> Result<Vec<String>> {
        self.record(format!("search:{query}")).await?;
        return Ok(vec![format!("{query} 1"), format!("{query} 2")]);
    }

    #[allow(clippy::implicit_return)]
    async fn game_details(&self, name: &str) -> Result<Platforms> {
        self.record(format!("game-details:{name}")).await?;
        return Ok(Platforms {
            windows: true,
            ..Platforms::default()
        });
    }

    #[allow(clippy::implicit_return)]
    async fn recommend(&self, request: &RecommendRequest) -> Result<Vec<String>> {
        self.record(format!("recommend:{}", request.game_titles.join(","))).await?;
        return Ok(vec!["Portal 2".to_string(), "Celeste".to_string()]);
    }

    #[allow(clippy::implicit_return)]
    async fn chat(&self, query: &str) -> Result<String> {
        self.record(format!("chat:{query}")).await?;
        return Ok(format!("You asked about {query}"));
    }

    #[allow(clippy::implicit_return)]
    async fn login(&self, credentials: &Credentials) -> Result<String> {
        self.record(format!("login:{}", credentials.username)).await?;
        return Ok(format!("token-{}", credentials.username));
    }

    #[allow(clippy::implicit_return)]
    async fn register(&self, credentials: &Credentials) -> Result<()> {
        self.record(format!("register:{}", credentials.username)).await?;
        return Ok(());
    }
}

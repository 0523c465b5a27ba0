#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::RequestBuilder;
use reqwest::Response;
use reqwest::Url;
use serde::de::DeserializeOwned;

use super::ApiError;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChatRequest;
use crate::domain::models::ChatResponse;
use crate::domain::models::Credentials;
use crate::domain::models::GameApi;
use crate::domain::models::GameDetailsResponse;
use crate::domain::models::LoginResponse;
use crate::domain::models::Platforms;
use crate::domain::models::RecommendRequest;
use crate::domain::models::RecommendResponse;
use crate::domain::models::SearchResponse;
use crate::domain::services::SessionStore;

async fn send(endpoint: &'static str, req: RequestBuilder) -> Result<Response, ApiError> {
    let res = req.send().await.map_err(|source| {
        tracing::error!(endpoint, error = ?source, "API is not reachable");
        return ApiError::Transport { endpoint, source };
    })?;

    let status = res.status();
    if !status.is_success() {
        tracing::error!(endpoint, status = status.as_u16(), "API request failed");
        return Err(ApiError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }

    return Ok(res);
}

async fn send_json<T: DeserializeOwned>(
    endpoint: &'static str,
    req: RequestBuilder,
) -> Result<T, ApiError> {
    return send(endpoint, req)
        .await?
        .json::<T>()
        .await
        .map_err(|source| return ApiError::Decode { endpoint, source });
}

/// HTTP client for the game API. The session token is read on every
/// authenticated request rather than once at construction.
pub struct HttpGameApi {
    url: String,
    session: SessionStore,
    client: reqwest::Client,
}

impl Default for HttpGameApi {
    fn default() -> HttpGameApi {
        return HttpGameApi::new(&Config::get(ConfigKey::ApiURL), SessionStore::global());
    }
}

impl HttpGameApi {
    pub fn new(url: &str, session: SessionStore) -> HttpGameApi {
        return HttpGameApi {
            url: url.to_string(),
            session,
            client: reqwest::Client::new(),
        };
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.url).map_err(|_| return ApiError::InvalidURL(self.url.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| return ApiError::InvalidURL(self.url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        return Ok(url);
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.session.token() {
            return req.bearer_auth(token);
        }

        return req;
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    #[allow(clippy::implicit_return)]
    async fn search(&self, query: &str) -> Result<Vec<String>> {
        let req = self
            .client
            .get(self.endpoint(&["search"])?)
            .query(&[("q", query)]);

        let res: SearchResponse = send_json("search", self.authorize(req)).await?;
        tracing::debug!(query, results = res.results.len(), "search response");

        return Ok(res.results);
    }

    #[allow(clippy::implicit_return)]
    async fn game_details(&self, name: &str) -> Result<Platforms> {
        let req = self.client.get(self.endpoint(&["game-details", name])?);
        let res: GameDetailsResponse = send_json("game-details", self.authorize(req)).await?;

        return Ok(res.platforms);
    }

    #[allow(clippy::implicit_return)]
    async fn recommend(&self, request: &RecommendRequest) -> Result<Vec<String>> {
        let req = self.client.post(self.endpoint(&["recommend"])?).json(request);
        let res: RecommendResponse = send_json("recommend", self.authorize(req)).await?;

        return Ok(res.recommendations);
    }

    #[allow(clippy::implicit_return)]
    async fn chat(&self, query: &str) -> Result<String> {
        let req = self
            .client
            .post(self.endpoint(&["chat"])?)
            .json(&ChatRequest {
                query: query.to_string(),
            });
        let res: ChatResponse = send_json("chat", self.authorize(req)).await?;

        return Ok(res.answer);
    }

    #[allow(clippy::implicit_return)]
    async fn login(&self, credentials: &Credentials) -> Result<String> {
        let req = self.client.post(self.endpoint(&["login"])?).form(&[
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ]);
        let res: LoginResponse = send_json("login", req).await?;

        return Ok(res.access_token);
    }

    #[allow(clippy::implicit_return)]
    async fn register(&self, credentials: &Credentials) -> Result<()> {
        let req = self
            .client
            .post(self.endpoint(&["register"])?)
            .json(credentials);
        send("register", req).await?;

        return Ok(());
    }
}

use super::Credentials;
use super::RecommendRequest;

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    ChatRequest(String),
    GameDetailsRequest(String),
    LoginRequest(Credentials),
    RecommendRequest(RecommendRequest),
    RegisterRequest(Credentials),
    SearchQuery(String),
}

use tui_textarea::Input;

use super::ChatMessage;
use super::Platforms;

#[derive(Debug, PartialEq)]
pub enum Event {
    ChatResponse(ChatMessage),
    GameDetailsResponse(String, Platforms),
    KeyboardCharInput(Input),
    KeyboardCTRLA(),
    KeyboardCTRLC(),
    KeyboardCTRLG(),
    KeyboardCTRLL(),
    KeyboardCTRLN(),
    KeyboardEnter(),
    KeyboardEsc(),
    KeyboardTab(),
    LoginFailed(String),
    LoginSucceeded(),
    RecommendFailed(String),
    RecommendResponse(Vec<String>),
    RegisterFailed(String),
    RegisterSucceeded(String),
    RequestFailed(String),
    SearchResponse(String, Vec<String>),
    SessionChanged(),
    UIScrollDown(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UIScrollUp(),
    UITick(),
}

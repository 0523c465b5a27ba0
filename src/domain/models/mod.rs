mod action;
mod api;
mod chat;
mod event;
mod game;
mod loading;
mod screen;
mod textarea;

pub use action::*;
pub use api::*;
pub use chat::*;
pub use event::*;
pub use game::*;
pub use loading::*;
pub use screen::*;
pub use textarea::*;

pub mod actions;
mod app_state;
pub mod events;
mod scroll;
mod search;
mod selection;
mod session;

pub use app_state::*;
pub use scroll::*;
pub use search::*;
pub use selection::*;
pub use session::*;

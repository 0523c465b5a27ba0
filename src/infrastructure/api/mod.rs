mod error;
#[cfg(test)]
pub mod fake;
mod http;

pub use error::*;
pub use http::*;

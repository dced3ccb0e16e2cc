#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; used by tests/
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod markdown;
pub mod page;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, DEFAULT_ADDR, ServerConfig, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;

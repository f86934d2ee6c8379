//! ClickUp Core - Hierarchy types, error taxonomy, and creation response normalization

pub mod config;
pub mod error;
pub mod normalize;
pub mod protocol;
pub mod types;

pub use config::ServiceConfig;
pub use error::{Error, Result, UpstreamError};
pub use normalize::{normalize_creation_response, Shape};
pub use protocol::*;
pub use types::*;

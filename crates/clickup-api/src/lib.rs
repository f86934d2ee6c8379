//! ClickUp API - Request execution, wire types, and id-keyed services

pub mod executor;
pub mod http;
pub mod lists;
pub mod mock;
pub mod template;
pub mod types;
pub mod workspace;

pub use executor::{ApiRequest, Method, RequestExecutor};
pub use http::HttpExecutor;
pub use lists::ListService;
pub use mock::MockExecutor;
pub use template::TemplateOptions;
pub use types::*;
pub use workspace::WorkspaceService;

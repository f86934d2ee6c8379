//! Error types for the ClickUp service core

use crate::types::{NodeKind, NodeRef};
use thiserror::Error;

/// Classified failure surfaced by a request executor.
///
/// These pass through the core verbatim; nothing here reinterprets them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limited: retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    #[error("upstream resource not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("upstream error ({status}): {message}")]
    Unknown { status: u16, message: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{kind} \"{name}\" not found")]
    NotFound { kind: NodeKind, name: String },

    #[error("scope {kind} {reference} not found")]
    ScopeNotFound { kind: NodeKind, reference: NodeRef },

    #[error("malformed creation response: shape={shape}, fields={fields:?}")]
    MalformedResponse { shape: String, fields: Vec<String> },

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("{phase} failed: {source}")]
    Fetch {
        phase: String,
        #[source]
        source: UpstreamError,
    },

    #[error("{phase} failed: unexpected response: {source}")]
    Decode {
        phase: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn not_found(kind: NodeKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn scope_not_found(kind: NodeKind, reference: NodeRef) -> Self {
        Self::ScopeNotFound { kind, reference }
    }

    pub fn malformed(shape: impl Into<String>, fields: Vec<String>) -> Self {
        Self::MalformedResponse {
            shape: shape.into(),
            fields,
        }
    }

    /// Attach the tree-build phase (or service operation) that failed.
    pub fn fetch(phase: impl Into<String>, source: UpstreamError) -> Self {
        Self::Fetch {
            phase: phase.into(),
            source,
        }
    }

    /// Name the operation an upstream or decode failure happened in. Other
    /// errors are returned unchanged so their class survives.
    pub fn context(self, operation: impl Into<String>) -> Self {
        match self {
            Self::Upstream(source) => Self::fetch(operation, source),
            Self::Json(source) => Self::Decode {
                phase: operation.into(),
                source,
            },
            other => other,
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Name or scope could not be resolved in the current tree.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::ScopeNotFound { .. })
    }

    /// Failure originated in the request executor.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_) | Self::Fetch { .. })
    }

    /// The executor's classified failure, if this error carries one.
    pub fn upstream(&self) -> Option<&UpstreamError> {
        match self {
            Self::Upstream(e) | Self::Fetch { source: e, .. } => Some(e),
            _ => None,
        }
    }
}

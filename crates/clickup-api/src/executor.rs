//! Request executor trait

use clickup_core::UpstreamError;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One upstream call, relative to the API base url.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Put, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// `GET /space/1/folder`, used in log lines and mock route keys.
    pub fn description(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Performs upstream calls and returns parsed JSON or a classified failure.
///
/// Retry, auth headers and rate-limit handling belong to implementations;
/// callers treat this as a black box.
#[async_trait::async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<Value, UpstreamError>;
}

#[async_trait::async_trait]
impl<T: RequestExecutor + ?Sized> RequestExecutor for Arc<T> {
    async fn execute(&self, request: ApiRequest) -> Result<Value, UpstreamError> {
        (**self).execute(request).await
    }
}

//! In-memory executor that serves canned responses by method and path.
//!
//! Records every request it sees so callers can assert call order, bodies,
//! and that child fetches were issued one at a time.

use crate::executor::{ApiRequest, Method, RequestExecutor};
use clickup_core::UpstreamError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockExecutor {
    routes: Mutex<HashMap<(Method, String), Result<Value, UpstreamError>>>,
    calls: Mutex<Vec<ApiRequest>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with `response`. Replaces any earlier route.
    pub fn on(self, method: Method, path: impl Into<String>, response: Value) -> Self {
        self.route(method, path, Ok(response));
        self
    }

    /// Fail `method path` with `error`.
    pub fn fail(self, method: Method, path: impl Into<String>, error: UpstreamError) -> Self {
        self.route(method, path, Err(error));
        self
    }

    pub fn route(&self, method: Method, path: impl Into<String>, response: Result<Value, UpstreamError>) {
        if let Ok(mut routes) = self.routes.lock() {
            routes.insert((method, path.into()), response);
        }
    }

    /// Every request executed so far, in order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// `METHOD /path` of every request executed so far, in order.
    pub fn call_log(&self) -> Vec<String> {
        self.calls().iter().map(ApiRequest::description).collect()
    }

    /// Highest number of requests that were executing at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RequestExecutor for MockExecutor {
    async fn execute(&self, request: ApiRequest) -> Result<Value, UpstreamError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        // Give concurrently issued requests a chance to overlap.
        tokio::task::yield_now().await;

        let key = (request.method, request.path.clone());
        let description = request.description();
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request);
        }
        let response = self
            .routes
            .lock()
            .ok()
            .and_then(|routes| routes.get(&key).cloned())
            .unwrap_or_else(|| Err(UpstreamError::NotFound(format!("no route for {}", description))));

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        response
    }
}

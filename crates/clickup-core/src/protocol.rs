//! stdio protocol: line-delimited JSON-RPC 2.0
//!
//! Wire format, one JSON object per line:
//!
//! Client → Server (request):
//!   { "jsonrpc": "2.0", "id": 1, "method": "tools/call", "params": { "name": "get_list", "arguments": { "listName": "Backlog" } } }
//!
//! Server → Client (response):
//!   { "jsonrpc": "2.0", "id": 1, "result": { "content": [...], "isError": false } }
//!   { "jsonrpc": "2.0", "id": 1, "error": { "code": -32601, "message": "Method not found: foo" } }
//!
//! Requests without an id are notifications and get no response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_PARAMS: i32 = -32602;
pub const METHOD_NOT_FOUND: i32 = -32601;

/// RPC request from client. The id may be a number or a string.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl RpcRequest {
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// RPC response to client.
#[derive(Debug, Clone, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl RpcResponse {
    /// Successful response with a result value.
    pub fn ok(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Error response.
    pub fn err(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }

    pub fn method_not_found(id: Value, method: &str) -> Self {
        Self::err(id, METHOD_NOT_FOUND, format!("Method not found: {}", method))
    }

    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::err(Value::Null, PARSE_ERROR, message)
    }
}

/// RPC error detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

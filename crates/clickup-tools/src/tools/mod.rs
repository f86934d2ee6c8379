//! Individual tool implementations.
//!
//! Each tool is a self-contained module holding the shared `ServiceContext`.
//! Register new ones in create_default_registry() in ../lib.rs.

pub mod create_list;
pub mod create_list_from_template;
pub mod create_list_in_folder;
pub mod delete_list;
pub mod get_list;
pub mod resolve_id;
pub mod update_list;

use crate::registry::ToolResult;
use clickup_core::Result;
use serde_json::Value;

/// Turn a handler outcome into a tool result naming the failed operation.
pub(crate) fn respond(operation: &str, outcome: Result<Value>) -> ToolResult {
    match outcome {
        Ok(value) => ToolResult::Json(value),
        Err(e) => {
            tracing::warn!(operation, error = %e, "tool failed");
            ToolResult::error(format!("Failed to {}: {}", operation, e))
        }
    }
}

//! Tool registry and trait definitions
//!
//! Each tool is a self-contained module implementing the Tool trait.
//! Tools can be added/removed by editing the tools/ directory and
//! the create_default_registry() function in lib.rs.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub enum ToolResult {
    Json(Value),
    Error(String),
}

impl ToolResult {
    pub fn error(s: impl Into<String>) -> Self { Self::Error(s.into()) }

    pub fn to_content_string(&self) -> String {
        match self {
            Self::Json(v) => serde_json::to_string_pretty(v).unwrap_or_default(),
            Self::Error(e) => format!("Error: {}", e),
        }
    }

    pub fn is_error(&self) -> bool { matches!(self, Self::Error(_)) }

    /// The JSON payload of a successful structured result.
    pub fn json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }
}

/// Tool definition as advertised to clients.
#[derive(Clone, Debug, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
    pub annotations: ToolAnnotations,
}

/// Behaviour hints advertised alongside a tool definition.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ToolAnnotations {
    #[serde(rename = "readOnlyHint")]
    pub read_only: bool,
}

/// The Tool trait: implement this to add a new capability.
///
/// Each tool is a standalone unit that can be registered with a ToolRegistry.
/// To add a new tool: create a file in tools/, implement this trait, register
/// it in create_default_registry().
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name (e.g. "get_list", "create_list_from_template").
    fn name(&self) -> &str;

    /// Human-readable description sent to the client.
    fn description(&self) -> &str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> Value;

    /// Whether this tool only reads state (no side effects).
    fn is_read_only(&self) -> bool { false }

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: Value) -> ToolResult;

    fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
            annotations: ToolAnnotations {
                read_only: self.is_read_only(),
            },
        }
    }
}

pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self { Self::new() }
}

impl ToolRegistry {
    pub fn new() -> Self { Self { tools: HashMap::new() } }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    pub async fn execute(&self, name: &str, args: Value) -> ToolResult {
        match self.tools.get(name) {
            Some(tool) => {
                tracing::info!(tool = name, "executing tool");
                tool.execute(args).await
            }
            None => ToolResult::Error(format!("Tool not found: {}", name)),
        }
    }

    /// Definitions for all tools, sorted by name.
    pub fn get_definitions(&self) -> Vec<ToolDefinition> {
        let mut defs: Vec<ToolDefinition> = self.tools.values()
            .map(|t| t.to_definition())
            .collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

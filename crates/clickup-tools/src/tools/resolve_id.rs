//! resolve_id: look up the id of a named workspace, space, folder or list

use crate::context::{arg_str, require_str, ServiceContext};
use crate::registry::{Tool, ToolResult};
use crate::tools::respond;
use clickup_core::{Error, NodeKind, Result, ScopeRef};
use serde_json::{json, Value};
use std::sync::Arc;

pub struct ResolveIdTool {
    ctx: Arc<ServiceContext>,
}

impl ResolveIdTool {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    async fn run(&self, args: &Value) -> Result<Value> {
        let kind = parse_kind(require_str(args, "kind", "Kind")?)?;
        let name = require_str(args, "name", "Name")?;
        let scope = scope_from_args(args)?;

        let found = self.ctx.resolver.resolve_id(kind, name, scope).await?;
        Ok(json!({
            "kind": kind,
            "id": found.id,
            "name": found.name,
        }))
    }
}

fn parse_kind(raw: &str) -> Result<NodeKind> {
    NodeKind::parse(raw).ok_or_else(|| {
        Error::invalid_input(format!(
            "unknown kind \"{}\"; expected workspace, space, folder or list",
            raw
        ))
    })
}

/// Optional scope from `scopeKind` plus `scopeId` or `scopeName`; an id wins over a name.
fn scope_from_args(args: &Value) -> Result<Option<ScopeRef>> {
    let Some(kind) = arg_str(args, "scopeKind") else {
        if arg_str(args, "scopeId").is_some() || arg_str(args, "scopeName").is_some() {
            return Err(Error::invalid_input("scopeKind is required when scopeId or scopeName is given"));
        }
        return Ok(None);
    };
    let kind = parse_kind(kind)?;

    if let Some(id) = arg_str(args, "scopeId") {
        return Ok(Some(ScopeRef::id(kind, id)));
    }
    if let Some(name) = arg_str(args, "scopeName") {
        return Ok(Some(ScopeRef::name(kind, name)));
    }
    Err(Error::invalid_input("Either scopeId or scopeName must be provided with scopeKind"))
}

#[async_trait::async_trait]
impl Tool for ResolveIdTool {
    fn name(&self) -> &str {
        "resolve_id"
    }

    fn description(&self) -> &str {
        "Finds the ID of a workspace, space, folder or list by its name (case-insensitive, exact). Optionally restrict the search to a containing entity with scopeKind plus scopeId or scopeName. When several entities share the name, the first in hierarchy order is returned."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "kind": { "type": "string", "enum": ["workspace", "space", "folder", "list"], "description": "Kind of entity to find" },
                "name": { "type": "string", "description": "Name of the entity" },
                "scopeKind": { "type": "string", "enum": ["workspace", "space", "folder"], "description": "Kind of the containing entity to search within" },
                "scopeId": { "type": "string", "description": "ID of the containing entity" },
                "scopeName": { "type": "string", "description": "Name of the containing entity" }
            },
            "required": ["kind", "name"]
        })
    }

    fn is_read_only(&self) -> bool {
        true
    }

    async fn execute(&self, args: Value) -> ToolResult {
        respond("resolve id", self.run(&args).await)
    }
}

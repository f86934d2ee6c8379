//! create_list: create a list directly in a space

use crate::context::{arg_string, require_str, ServiceContext};
use crate::registry::{Tool, ToolResult};
use crate::tools::respond;
use clickup_api::CreateListData;
use clickup_core::{Error, Result};
use serde_json::{json, Value};
use std::sync::Arc;

pub struct CreateListTool {
    ctx: Arc<ServiceContext>,
}

impl CreateListTool {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    async fn run(&self, args: &Value) -> Result<Value> {
        let name = require_str(args, "name", "List name")?;
        let data = CreateListData {
            name: name.to_string(),
            content: arg_string(args, "content"),
            due_date: due_date(args)?,
            priority: priority(args)?,
            assignee: integer(args, "assignee", "a user ID")?,
            status: arg_string(args, "status"),
        };
        let space = self.ctx.space_ref(args).await?;

        let list = self.ctx.lists.create_list(&space.id, &data).await?;
        let space = list.space.clone().unwrap_or(space);

        Ok(json!({
            "id": list.id,
            "name": list.name,
            "content": list.content,
            "space": space,
            "url": self.ctx.config.list_url(&list.id),
            "message": format!("List \"{}\" created successfully", name),
        }))
    }
}

/// `dueDate` as Unix milliseconds, given either as a number or a numeric string.
fn due_date(args: &Value) -> Result<Option<i64>> {
    integer(args, "dueDate", "a Unix timestamp in milliseconds")
}

/// `priority` from 1 (urgent) to 4 (low).
fn priority(args: &Value) -> Result<Option<u8>> {
    match integer(args, "priority", "an integer from 1 to 4")? {
        None => Ok(None),
        Some(p @ 1..=4) => Ok(Some(p as u8)),
        Some(p) => Err(Error::invalid_input(format!("priority must be an integer from 1 to 4, got {}", p))),
    }
}

/// Optional integer argument, given either as a number or a numeric string.
/// Anything else present under `key` is rejected rather than dropped.
fn integer(args: &Value, key: &str, expected: &str) -> Result<Option<i64>> {
    let invalid = |got: String| Error::invalid_input(format!("{} must be {}, got {}", key, expected, got));
    match &args[key] {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_i64().map(Some).ok_or_else(|| invalid(n.to_string())),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| invalid(format!("\"{}\"", s))),
        other => Err(invalid(other.to_string())),
    }
}

#[async_trait::async_trait]
impl Tool for CreateListTool {
    fn name(&self) -> &str {
        "create_list"
    }

    fn description(&self) -> &str {
        "Creates a list in a ClickUp space. Use spaceId (preferred) or spaceName + list name. Name is required. For lists in folders, use create_list_in_folder. Optional: content, dueDate, priority, assignee, status."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "Name of the list" },
                "spaceId": { "type": "string", "description": "ID of the space to create the list in. Use this instead of spaceName if you have the ID." },
                "spaceName": { "type": "string", "description": "Name of the space to create the list in. Alternative to spaceId - one of them MUST be provided." },
                "content": { "type": "string", "description": "Description or content of the list" },
                "dueDate": { "type": "string", "description": "Due date for the list (Unix timestamp in milliseconds)" },
                "priority": { "type": "number", "description": "Priority level: 1 (urgent), 2 (high), 3 (normal), 4 (low)" },
                "assignee": { "type": "number", "description": "User ID to assign the list to" },
                "status": { "type": "string", "description": "Status of the list" }
            },
            "required": ["name"]
        })
    }

    async fn execute(&self, args: Value) -> ToolResult {
        respond("create list", self.run(&args).await)
    }
}

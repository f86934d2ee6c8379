//! delete_list: permanently remove a list

use crate::context::ServiceContext;
use crate::registry::{Tool, ToolResult};
use crate::tools::respond;
use clickup_core::Result;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct DeleteListTool {
    ctx: Arc<ServiceContext>,
}

impl DeleteListTool {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    async fn run(&self, args: &Value) -> Result<Value> {
        let list_id = self.ctx.list_id(args).await?;
        // Fetched first so the confirmation can name what was removed.
        let list = self.ctx.lists.get_list(&list_id).await?;
        self.ctx.lists.delete_list(&list_id).await?;

        Ok(json!({
            "success": true,
            "message": format!("List \"{}\" deleted successfully", list.name),
        }))
    }
}

#[async_trait::async_trait]
impl Tool for DeleteListTool {
    fn name(&self) -> &str {
        "delete_list"
    }

    fn description(&self) -> &str {
        "Permanently deletes a ClickUp list and all its tasks. Use listId (preferred/safest) or listName. WARNING: Cannot be undone, all tasks will be lost, and listName may match multiple lists."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "listId": { "type": "string", "description": "ID of the list to delete. Use this instead of listName if you have the ID." },
                "listName": { "type": "string", "description": "Name of the list to delete. May be ambiguous if multiple lists have the same name." }
            },
            "required": []
        })
    }

    async fn execute(&self, args: Value) -> ToolResult {
        respond("delete list", self.run(&args).await)
    }
}

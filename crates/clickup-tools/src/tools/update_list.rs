//! update_list: change a list's name, content or status

use crate::context::{arg_string, ServiceContext};
use crate::registry::{Tool, ToolResult};
use crate::tools::respond;
use clickup_api::UpdateListData;
use clickup_core::{Error, Result};
use serde_json::{json, Value};
use std::sync::Arc;

pub struct UpdateListTool {
    ctx: Arc<ServiceContext>,
}

impl UpdateListTool {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    async fn run(&self, args: &Value) -> Result<Value> {
        let data = UpdateListData {
            name: arg_string(args, "name"),
            content: arg_string(args, "content"),
            status: arg_string(args, "status"),
        };
        // Checked before resolution so a no-op call costs no upstream requests.
        if data.is_empty() {
            return Err(Error::invalid_input(
                "At least one of name, content, or status must be provided for update",
            ));
        }

        let list_id = self.ctx.list_id(args).await?;
        let list = self.ctx.lists.update_list(&list_id, &data).await?;

        Ok(json!({
            "id": list.id,
            "name": list.name,
            "content": list.content,
            "space": list.space,
            "folder": list.folder,
            "status": list.status,
            "url": self.ctx.config.list_url(&list.id),
            "message": format!("List \"{}\" updated successfully", list.name),
        }))
    }
}

#[async_trait::async_trait]
impl Tool for UpdateListTool {
    fn name(&self) -> &str {
        "update_list"
    }

    fn description(&self) -> &str {
        "Updates a ClickUp list. Use listId (preferred) or listName. At least one of name, content or status must be provided. Only specified fields are updated."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "listId": { "type": "string", "description": "ID of the list to update. Use this instead of listName if you have the ID." },
                "listName": { "type": "string", "description": "Name of the list to update. May be ambiguous if multiple lists have the same name." },
                "name": { "type": "string", "description": "New name for the list" },
                "content": { "type": "string", "description": "New description or content for the list" },
                "status": { "type": "string", "description": "New status for the list" }
            },
            "required": []
        })
    }

    async fn execute(&self, args: Value) -> ToolResult {
        respond("update list", self.run(&args).await)
    }
}

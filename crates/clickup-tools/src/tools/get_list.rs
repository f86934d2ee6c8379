//! get_list: fetch a list's details

use crate::context::ServiceContext;
use crate::registry::{Tool, ToolResult};
use crate::tools::respond;
use clickup_core::Result;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct GetListTool {
    ctx: Arc<ServiceContext>,
}

impl GetListTool {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    async fn run(&self, args: &Value) -> Result<Value> {
        let list_id = self.ctx.list_id(args).await?;
        let list = self.ctx.lists.get_list(&list_id).await?;

        Ok(json!({
            "id": list.id,
            "name": list.name,
            "content": list.content,
            "space": list.space,
            "folder": list.folder,
            "status": list.status,
            "url": self.ctx.config.list_url(&list.id),
        }))
    }
}

#[async_trait::async_trait]
impl Tool for GetListTool {
    fn name(&self) -> &str {
        "get_list"
    }

    fn description(&self) -> &str {
        "Gets details of a ClickUp list. Use listId (preferred) or listName. Returns list details including name, content, space, folder and status."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "listId": { "type": "string", "description": "ID of the list to retrieve. Use this instead of listName if you have the ID." },
                "listName": { "type": "string", "description": "Name of the list to retrieve. May be ambiguous if multiple lists have the same name." }
            },
            "required": []
        })
    }

    fn is_read_only(&self) -> bool {
        true
    }

    async fn execute(&self, args: Value) -> ToolResult {
        respond("retrieve list", self.run(&args).await)
    }
}

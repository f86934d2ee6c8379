//! create_list_in_folder: create a list inside a folder

use crate::context::{arg_string, require_str, ServiceContext};
use crate::registry::{Tool, ToolResult};
use crate::tools::respond;
use clickup_api::CreateListData;
use clickup_core::Result;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct CreateListInFolderTool {
    ctx: Arc<ServiceContext>,
}

impl CreateListInFolderTool {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    async fn run(&self, args: &Value) -> Result<Value> {
        let name = require_str(args, "name", "List name")?;
        let (folder, space) = self.ctx.folder_ref(args).await?;

        let data = CreateListData {
            content: arg_string(args, "content"),
            status: arg_string(args, "status"),
            ..CreateListData::new(name)
        };

        let list = self.ctx.lists.create_list_in_folder(&folder.id, &data).await?;
        let folder = list.folder.clone().unwrap_or(folder);
        let space = list.space.clone().or(space);
        let folder_label = folder.name.clone().unwrap_or_else(|| folder.id.clone());

        Ok(json!({
            "id": list.id,
            "name": list.name,
            "content": list.content,
            "folder": folder,
            "space": space,
            "url": self.ctx.config.list_url(&list.id),
            "message": format!("List \"{}\" created successfully in folder \"{}\"", name, folder_label),
        }))
    }
}

#[async_trait::async_trait]
impl Tool for CreateListInFolderTool {
    fn name(&self) -> &str {
        "create_list_in_folder"
    }

    fn description(&self) -> &str {
        "Creates a list in a ClickUp folder. Use folderId (preferred) or folderName + space info + list name. Name is required. When using folderName, spaceId/spaceName required as folder names may not be unique. Optional: content, status."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "Name of the list" },
                "folderId": { "type": "string", "description": "ID of the folder to create the list in. If you have this, you don't need folderName or space information." },
                "folderName": { "type": "string", "description": "Name of the folder to create the list in. When using this, you MUST also provide either spaceName or spaceId." },
                "spaceId": { "type": "string", "description": "ID of the space containing the folder. Required when using folderName instead of folderId." },
                "spaceName": { "type": "string", "description": "Name of the space containing the folder. Required when using folderName instead of folderId." },
                "content": { "type": "string", "description": "Description or content of the list" },
                "status": { "type": "string", "description": "Status of the list (uses folder default if not specified)" }
            },
            "required": ["name"]
        })
    }

    async fn execute(&self, args: Value) -> ToolResult {
        respond("create list in folder", self.run(&args).await)
    }
}

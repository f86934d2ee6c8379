//! create_list_from_template: instantiate a list template inside a folder
//!
//! Template creation answers with several shapes depending on whether the
//! list is ready yet. The service normalizes them; this handler only fills in
//! parent references the upstream left out.

use crate::context::{require_str, ServiceContext};
use crate::registry::{Tool, ToolResult};
use crate::tools::respond;
use clickup_api::{CreateListFromTemplateData, TemplateOptions};
use clickup_core::Result;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct CreateListFromTemplateTool {
    ctx: Arc<ServiceContext>,
}

impl CreateListFromTemplateTool {
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    async fn run(&self, args: &Value) -> Result<Value> {
        let name = require_str(args, "name", "List name")?;
        let template_id = require_str(args, "templateId", "Template ID")?;
        let (folder, space) = self.ctx.folder_ref(args).await?;

        let data = CreateListFromTemplateData {
            name: name.to_string(),
            options: TemplateOptions::from_args(args),
        };

        let entity = self
            .ctx
            .lists
            .create_list_from_template(&folder.id, template_id, &data)
            .await?;

        let url = self.ctx.config.list_url(entity.id());
        let entity = entity
            .with_default("folder", folder.to_value())
            .with_default("space", space.map(|s| s.to_value()).unwrap_or(Value::Null))
            .with_default("url", Value::String(url));

        let folder_label = entity
            .folder()
            .and_then(|f| f.name)
            .map(|n| format!(" \"{}\"", n))
            .unwrap_or_default();

        let mut value = entity.into_value();
        if let Some(obj) = value.as_object_mut() {
            obj.insert("templateId".into(), json!(template_id));
            obj.insert(
                "message".into(),
                json!(format!("List \"{}\" created successfully from template in folder{}", name, folder_label)),
            );
        }
        Ok(value)
    }
}

#[async_trait::async_trait]
impl Tool for CreateListFromTemplateTool {
    fn name(&self) -> &str {
        "create_list_from_template"
    }

    fn description(&self) -> &str {
        "Creates a list from a template in a ClickUp folder. Use folderId (preferred) or folderName + space info, plus templateId and list name. When using folderName, spaceId/spaceName required. Template options are forwarded exactly as given; omitted options keep the template's defaults."
    }

    fn input_schema(&self) -> Value {
        let mut properties = TemplateOptions::schema_properties();
        properties.insert("name".into(), json!({ "type": "string", "description": "Name of the list" }));
        properties.insert("templateId".into(), json!({ "type": "string", "description": "ID of the template to use" }));
        properties.insert("folderId".into(), json!({ "type": "string", "description": "ID of the folder to create the list in. If you have this, you don't need folderName or space information." }));
        properties.insert("folderName".into(), json!({ "type": "string", "description": "Name of the folder to create the list in. When using this, you MUST also provide either spaceName or spaceId." }));
        properties.insert("spaceId".into(), json!({ "type": "string", "description": "ID of the space containing the folder. Required when using folderName instead of folderId." }));
        properties.insert("spaceName".into(), json!({ "type": "string", "description": "Name of the space containing the folder. Required when using folderName instead of folderId." }));

        json!({
            "type": "object",
            "properties": properties,
            "required": ["name", "templateId"]
        })
    }

    async fn execute(&self, args: Value) -> ToolResult {
        respond("create list from template", self.run(&args).await)
    }
}

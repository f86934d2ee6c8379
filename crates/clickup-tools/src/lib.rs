//! ClickUp Tools - list operations exposed as callable tools
//!
//! Each tool is a self-contained file in src/tools/.
//! To add a tool: create the file, implement Tool trait, register below.

pub mod context;
pub mod registry;
pub mod tools;

pub use context::ServiceContext;
pub use registry::{Tool, ToolAnnotations, ToolDefinition, ToolRegistry, ToolResult};

use std::sync::Arc;

/// Create the registry with every list tool.
pub fn create_default_registry(ctx: Arc<ServiceContext>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // --- Lookups (read-only) ---
    registry.register(tools::get_list::GetListTool::new(ctx.clone()));
    registry.register(tools::resolve_id::ResolveIdTool::new(ctx.clone()));

    // --- Mutations ---
    registry.register(tools::create_list::CreateListTool::new(ctx.clone()));
    registry.register(tools::create_list_in_folder::CreateListInFolderTool::new(ctx.clone()));
    registry.register(tools::create_list_from_template::CreateListFromTemplateTool::new(ctx.clone()));
    registry.register(tools::update_list::UpdateListTool::new(ctx.clone()));
    registry.register(tools::delete_list::DeleteListTool::new(ctx));

    registry
}

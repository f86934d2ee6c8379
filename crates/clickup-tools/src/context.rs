//! Shared service handles and name-or-id target lookup for tool handlers
//!
//! An explicit id always wins and skips resolution entirely. A name triggers
//! one tree build for the whole lookup, including its scope.

use clickup_api::{ListService, RequestExecutor};
use clickup_core::{
    EntityRef, Error, NodeKind, ResolutionQuery, Result, ScopeRef, ServiceConfig,
};
use clickup_hierarchy::{locate, resolve, Resolver};
use serde_json::Value;
use std::sync::Arc;

pub struct ServiceContext {
    pub config: ServiceConfig,
    pub lists: ListService,
    pub resolver: Resolver,
}

impl ServiceContext {
    pub fn new(config: ServiceConfig, executor: Arc<dyn RequestExecutor>) -> Self {
        let resolver = Resolver::new(executor.clone(), config.team_id.clone());
        Self {
            config,
            lists: ListService::new(executor),
            resolver,
        }
    }

    /// `spaceId`, or the id of the space named `spaceName`.
    pub async fn space_ref(&self, args: &Value) -> Result<EntityRef> {
        if let Some(id) = arg_str(args, "spaceId") {
            return Ok(EntityRef { id: id.to_string(), name: None });
        }
        if let Some(name) = arg_str(args, "spaceName") {
            let found = self.resolver.resolve_id(NodeKind::Space, name, None).await?;
            return Ok(EntityRef::new(found.id, found.name));
        }
        Err(Error::invalid_input("Either spaceId or spaceName must be provided"))
    }

    /// `folderId`, or the folder named `folderName` inside the space given by
    /// `spaceId`/`spaceName`. Also returns the space when it is known.
    pub async fn folder_ref(&self, args: &Value) -> Result<(EntityRef, Option<EntityRef>)> {
        let space_id = arg_str(args, "spaceId");
        let space_name = arg_str(args, "spaceName");

        if let Some(id) = arg_str(args, "folderId") {
            let space = space_id.map(|id| EntityRef { id: id.to_string(), name: None });
            return Ok((EntityRef { id: id.to_string(), name: None }, space));
        }

        let Some(folder_name) = arg_str(args, "folderName") else {
            return Err(Error::invalid_input("Either folderId or folderName must be provided"));
        };

        let scope = match (space_id, space_name) {
            (Some(id), _) => ScopeRef::id(NodeKind::Space, id),
            (None, Some(name)) => ScopeRef::name(NodeKind::Space, name),
            (None, None) => {
                return Err(Error::invalid_input(
                    "When using folderName to identify a folder, you must also provide either spaceId or spaceName; folder names might not be unique across spaces",
                ))
            }
        };

        let tree = self.resolver.tree().await?;
        let folder = resolve(&tree, &ResolutionQuery::new(NodeKind::Folder, folder_name).within(scope.clone()))?;
        let space = locate(&tree, &scope).map(|node| EntityRef::new(node.id(), node.name()));

        Ok((EntityRef::new(folder.id, folder.name), space))
    }

    /// `listId`, or the id of the list named `listName` anywhere in the workspace.
    pub async fn list_id(&self, args: &Value) -> Result<String> {
        if let Some(id) = arg_str(args, "listId") {
            return Ok(id.to_string());
        }
        if let Some(name) = arg_str(args, "listName") {
            return Ok(self.resolver.resolve_id(NodeKind::List, name, None).await?.id);
        }
        Err(Error::invalid_input("Either listId or listName must be provided"))
    }
}

/// Non-empty string argument.
pub fn arg_str<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Non-empty string argument, or `InvalidInput` naming the field.
pub fn require_str<'a>(args: &'a Value, key: &str, label: &str) -> Result<&'a str> {
    arg_str(args, key).ok_or_else(|| Error::invalid_input(format!("{} is required", label)))
}

pub fn arg_string(args: &Value, key: &str) -> Option<String> {
    arg_str(args, key).map(String::from)
}

//! Name resolver
//!
//! Pre-order depth-first search over a built tree, matching nodes of the
//! requested kind by case-insensitive exact name. When several nodes share a
//! name in scope the first one in pre-order wins; callers that need a
//! different one narrow the scope or pass an id.

use crate::tree::build_tree;
use clickup_api::{RequestExecutor, WorkspaceService};
use clickup_core::{
    Error, HierarchyNode, NodeKind, NodeRef, ResolutionQuery, ResolutionResult, Result, ScopeRef,
};
use std::sync::Arc;
use tracing::{debug, info};

/// First node of `kind` under `root` (inclusive) whose name equals `name` ignoring case.
pub fn find_by_name<'a>(root: &'a HierarchyNode, kind: NodeKind, name: &str) -> Option<&'a HierarchyNode> {
    let wanted = name.to_lowercase();
    root.pre_order()
        .find(|node| node.kind() == kind && node.name().to_lowercase() == wanted)
}

/// The node a scope refers to: exact id match, or first case-insensitive name match.
pub fn locate<'a>(tree: &'a HierarchyNode, scope: &ScopeRef) -> Option<&'a HierarchyNode> {
    match &scope.reference {
        NodeRef::Id(id) => tree
            .pre_order()
            .find(|node| node.kind() == scope.kind && node.id() == id),
        NodeRef::Name(name) => find_by_name(tree, scope.kind, name),
    }
}

/// Resolve `query` against `tree`.
///
/// A scoped search covers the scope's descendants only, never the scope node
/// itself. An unresolvable scope fails with `ScopeNotFound` naming the scope,
/// so it can be told apart from a missing target.
pub fn resolve(tree: &HierarchyNode, query: &ResolutionQuery) -> Result<ResolutionResult> {
    let found = match &query.scope {
        Some(scope) => {
            let root = locate(tree, scope)
                .ok_or_else(|| Error::scope_not_found(scope.kind, scope.reference.clone()))?;
            root.children()
                .iter()
                .find_map(|child| find_by_name(child, query.target_kind, &query.target_name))
        }
        None => find_by_name(tree, query.target_kind, &query.target_name),
    };

    found
        .map(ResolutionResult::from)
        .ok_or_else(|| Error::not_found(query.target_kind, query.target_name.clone()))
}

/// Resolves names against a freshly fetched tree on every call.
pub struct Resolver {
    workspace: WorkspaceService,
    team_id: String,
}

impl Resolver {
    pub fn new(executor: Arc<dyn RequestExecutor>, team_id: impl Into<String>) -> Self {
        Self {
            workspace: WorkspaceService::new(executor),
            team_id: team_id.into(),
        }
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    /// Build the current tree. Owned by the caller and dropped after use.
    pub async fn tree(&self) -> Result<HierarchyNode> {
        build_tree(&self.workspace, &self.team_id).await
    }

    pub async fn resolve_query(&self, query: &ResolutionQuery) -> Result<ResolutionResult> {
        let tree = self.tree().await?;
        let result = resolve(&tree, query);
        match &result {
            Ok(found) => debug!(
                operation = "resolveId",
                kind = %query.target_kind,
                target = %query.target_name,
                id = %found.id,
                "resolved"
            ),
            Err(e) => info!(operation = "resolveId", kind = %query.target_kind, "{}", e),
        }
        result
    }

    /// `resolveId(kind, name, scope?)`.
    pub async fn resolve_id(
        &self,
        kind: NodeKind,
        name: &str,
        scope: Option<ScopeRef>,
    ) -> Result<ResolutionResult> {
        let mut query = ResolutionQuery::new(kind, name);
        if let Some(scope) = scope {
            query = query.within(scope);
        }
        self.resolve_query(&query).await
    }
}

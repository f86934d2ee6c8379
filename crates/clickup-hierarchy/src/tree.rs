//! Tree builder: assembles workspace → spaces → folders → lists

use clickup_api::{ClickUpList, WorkspaceService};
use clickup_core::{Error, HierarchyNode, NodeKind, NodeRef, Result};
use tracing::{debug, info};

fn list_node(list: ClickUpList) -> HierarchyNode {
    HierarchyNode::new(NodeKind::List, list.id, list.name)
}

/// Fetch the hierarchy under `team_id` and assemble it into a tree.
///
/// Phases run in dependency order: workspaces, spaces, then per space its
/// folders (and per folder its lists) followed by the space's folderless
/// lists. Child fetches are issued one at a time in discovery order. Any
/// failing phase aborts the build with that phase named in the error; a
/// partial tree is never returned.
pub async fn build_tree(service: &WorkspaceService, team_id: &str) -> Result<HierarchyNode> {
    let teams = service
        .get_workspaces()
        .await
        .map_err(|e| e.context("fetch workspaces"))?;
    let team = teams
        .into_iter()
        .find(|t| t.id == team_id)
        .ok_or_else(|| Error::scope_not_found(NodeKind::Workspace, NodeRef::Id(team_id.to_string())))?;

    let spaces = service
        .get_spaces(team_id)
        .await
        .map_err(|e| e.context(format!("fetch spaces for workspace {}", team_id)))?;

    let mut space_nodes = Vec::with_capacity(spaces.len());
    for space in spaces {
        let folders = service
            .get_folders(&space.id)
            .await
            .map_err(|e| e.context(format!("fetch folders for space {}", space.id)))?;

        let mut children = Vec::with_capacity(folders.len());
        for folder in folders {
            let lists = service
                .get_lists_in_folder(&folder.id)
                .await
                .map_err(|e| e.context(format!("fetch lists for folder {}", folder.id)))?;
            debug!(folder_id = %folder.id, lists = lists.len(), "folder fetched");
            children.push(
                HierarchyNode::new(NodeKind::Folder, folder.id, folder.name)
                    .with_children(lists.into_iter().map(list_node).collect()),
            );
        }

        let folderless = service
            .get_folderless_lists(&space.id)
            .await
            .map_err(|e| e.context(format!("fetch folderless lists for space {}", space.id)))?;
        children.extend(folderless.into_iter().map(list_node));

        space_nodes.push(HierarchyNode::new(NodeKind::Space, space.id, space.name).with_children(children));
    }

    let tree = HierarchyNode::new(NodeKind::Workspace, team.id, team.name).with_children(space_nodes);
    info!(operation = "buildTree", team_id, nodes = tree.node_count(), "hierarchy built");
    Ok(tree)
}

//! Workspace listing calls used to assemble the hierarchy tree

use crate::executor::{ApiRequest, RequestExecutor};
use crate::types::{
    ClickUpList, Folder, FoldersResponse, ListsResponse, Space, SpacesResponse, Team, TeamsResponse,
};
use clickup_core::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

pub struct WorkspaceService {
    executor: Arc<dyn RequestExecutor>,
}

impl WorkspaceService {
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let value = self.executor.execute(request).await?;
        decode(value)
    }

    pub async fn get_workspaces(&self) -> Result<Vec<Team>> {
        debug!(operation = "getWorkspaces");
        let resp: TeamsResponse = self.fetch(ApiRequest::get("/team")).await?;
        Ok(resp.teams)
    }

    pub async fn get_spaces(&self, team_id: &str) -> Result<Vec<Space>> {
        debug!(operation = "getSpaces", team_id);
        let request = ApiRequest::get(format!("/team/{}/space", team_id)).with_query("archived", "false");
        let resp: SpacesResponse = self.fetch(request).await?;
        Ok(resp.spaces)
    }

    pub async fn get_folders(&self, space_id: &str) -> Result<Vec<Folder>> {
        debug!(operation = "getFolders", space_id);
        let request = ApiRequest::get(format!("/space/{}/folder", space_id)).with_query("archived", "false");
        let resp: FoldersResponse = self.fetch(request).await?;
        Ok(resp.folders)
    }

    pub async fn get_lists_in_folder(&self, folder_id: &str) -> Result<Vec<ClickUpList>> {
        debug!(operation = "getListsInFolder", folder_id);
        let request = ApiRequest::get(format!("/folder/{}/list", folder_id)).with_query("archived", "false");
        let resp: ListsResponse = self.fetch(request).await?;
        Ok(resp.lists)
    }

    /// Lists attached directly to a space, with no folder in between.
    pub async fn get_folderless_lists(&self, space_id: &str) -> Result<Vec<ClickUpList>> {
        debug!(operation = "getFolderlessLists", space_id);
        let request = ApiRequest::get(format!("/space/{}/list", space_id)).with_query("archived", "false");
        let resp: ListsResponse = self.fetch(request).await?;
        Ok(resp.lists)
    }
}

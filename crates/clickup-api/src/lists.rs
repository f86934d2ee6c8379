//! List operations: create (plain, in folder, from template), get, update, delete, find

use crate::executor::{ApiRequest, RequestExecutor};
use crate::types::{
    ClickUpList, CreateListData, CreateListFromTemplateData, ListsResponse, UpdateListData,
};
use crate::workspace::decode;
use clickup_core::{normalize_creation_response, Error, NormalizedEntity, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Name used for a template-created list when the request carried none.
const UNKNOWN_NAME: &str = "Unknown";

pub struct ListService {
    executor: Arc<dyn RequestExecutor>,
}

impl ListService {
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    async fn call(&self, request: ApiRequest, operation: String) -> Result<Value> {
        self.executor
            .execute(request)
            .await
            .map_err(|e| Error::from(e).context(operation))
    }

    /// `call`, then decode the body; a body of the wrong shape names the operation too.
    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest, operation: String) -> Result<T> {
        let value = self.call(request, operation.clone()).await?;
        decode(value).map_err(|e| e.context(operation))
    }

    pub async fn create_list(&self, space_id: &str, data: &CreateListData) -> Result<ClickUpList> {
        info!(operation = "createList", space_id, list_name = %data.name);
        let request = ApiRequest::post(format!("/space/{}/list", space_id), serde_json::to_value(data)?);
        self.fetch(request, format!("create list in space {}", space_id)).await
    }

    pub async fn create_list_in_folder(&self, folder_id: &str, data: &CreateListData) -> Result<ClickUpList> {
        info!(operation = "createListInFolder", folder_id, list_name = %data.name);
        let request = ApiRequest::post(format!("/folder/{}/list", folder_id), serde_json::to_value(data)?);
        self.fetch(request, format!("create list in folder {}", folder_id)).await
    }

    /// Create a list from a template and reconcile whatever shape upstream answers with.
    ///
    /// Not retried on failure: a repeated creation could duplicate the list.
    pub async fn create_list_from_template(
        &self,
        folder_id: &str,
        template_id: &str,
        data: &CreateListFromTemplateData,
    ) -> Result<NormalizedEntity> {
        info!(operation = "createListFromTemplate", folder_id, template_id, list_name = %data.name);
        let request = ApiRequest::post(
            format!("/folder/{}/list_template/{}", folder_id, template_id),
            serde_json::to_value(data)?,
        );
        let raw = self
            .call(
                request,
                format!("create list from template {} in folder {}", template_id, folder_id),
            )
            .await?;

        debug!(
            operation = "createListFromTemplate_response",
            keys = ?raw.as_object().map(|o| o.keys().cloned().collect::<Vec<_>>())
        );

        let fallback_name = if data.name.is_empty() {
            UNKNOWN_NAME
        } else {
            data.name.as_str()
        };
        normalize_creation_response(raw, fallback_name)
    }

    pub async fn get_list(&self, list_id: &str) -> Result<ClickUpList> {
        debug!(operation = "getList", list_id);
        self.fetch(ApiRequest::get(format!("/list/{}", list_id)), format!("get list {}", list_id)).await
    }

    pub async fn update_list(&self, list_id: &str, data: &UpdateListData) -> Result<ClickUpList> {
        info!(operation = "updateList", list_id);
        let request = ApiRequest::put(format!("/list/{}", list_id), serde_json::to_value(data)?);
        self.fetch(request, format!("update list {}", list_id)).await
    }

    pub async fn delete_list(&self, list_id: &str) -> Result<()> {
        info!(operation = "deleteList", list_id);
        self.call(ApiRequest::delete(format!("/list/{}", list_id)), format!("delete list {}", list_id))
            .await?;
        Ok(())
    }

    pub async fn get_lists_in_space(&self, space_id: &str) -> Result<Vec<ClickUpList>> {
        debug!(operation = "getListsInSpace", space_id);
        Ok(self.fetch::<ListsResponse>(
                ApiRequest::get(format!("/space/{}/list", space_id)),
                format!("get lists in space {}", space_id),
            ).await?.lists)
    }

    pub async fn get_lists_in_folder(&self, folder_id: &str) -> Result<Vec<ClickUpList>> {
        debug!(operation = "getListsInFolder", folder_id);
        Ok(self.fetch::<ListsResponse>(
                ApiRequest::get(format!("/folder/{}/list", folder_id)),
                format!("get lists in folder {}", folder_id),
            ).await?.lists)
    }

    /// First list in the space whose name equals `name` ignoring case.
    pub async fn find_list_by_name_in_space(&self, space_id: &str, name: &str) -> Result<Option<ClickUpList>> {
        debug!(operation = "findListByNameInSpace", space_id, list_name = name);
        let lists = self.get_lists_in_space(space_id).await?;
        Ok(first_named(lists, name))
    }

    /// First list in the folder whose name equals `name` ignoring case.
    pub async fn find_list_by_name_in_folder(&self, folder_id: &str, name: &str) -> Result<Option<ClickUpList>> {
        debug!(operation = "findListByNameInFolder", folder_id, list_name = name);
        let lists = self.get_lists_in_folder(folder_id).await?;
        Ok(first_named(lists, name))
    }
}

fn first_named(lists: Vec<ClickUpList>, name: &str) -> Option<ClickUpList> {
    let wanted = name.to_lowercase();
    lists.into_iter().find(|l| l.name.to_lowercase() == wanted)
}

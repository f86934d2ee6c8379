//! ClickUp wire types for requests and listing responses

use crate::template::TemplateOptions;
use clickup_core::EntityRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A workspace. The v2 API still calls these teams.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Space {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SpacesResponse {
    #[serde(default)]
    pub spaces: Vec<Space>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub space: Option<EntityRef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FoldersResponse {
    #[serde(default)]
    pub folders: Vec<Folder>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClickUpList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub folder: Option<EntityRef>,
    #[serde(default)]
    pub space: Option<EntityRef>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub archived: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ListsResponse {
    #[serde(default)]
    pub lists: Vec<ClickUpList>,
}

/// Body of `POST /space/{id}/list` and `POST /folder/{id}/list`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateListData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Unix milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl CreateListData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Body of `PUT /list/{id}`. Only provided fields are sent.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateListData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UpdateListData {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.content.is_none() && self.status.is_none()
    }
}

/// Body of `POST /folder/{id}/list_template/{template}`.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CreateListFromTemplateData {
    pub name: String,
    pub options: TemplateOptions,
}

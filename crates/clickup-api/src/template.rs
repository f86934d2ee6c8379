//! Template import options for list-from-template creation
//!
//! Every toggle the caller provided is forwarded unchanged. Every toggle the
//! caller omitted stays absent from the request body so upstream defaults
//! apply; an omitted toggle is never sent as `false`.

use serde::Serialize;
use serde_json::{json, Map, Value};

#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct TemplateOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_immediately: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_views: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_due_date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_start_date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_followers: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_attachments: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recur_settings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_tags: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_statuses: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_assignees: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_dependencies: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_dependencies: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_checklists: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_subtask_assignees: Option<Value>,
    /// Project start date used for remapping (`YYYY-MM-DDTHH:mm:ss`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Value>,
    /// Project due date used for remapping (`YYYY-MM-DDTHH:mm:ss`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remap_start_date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_weekends: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<Value>,
}

/// Boolean import toggles with their tool-facing descriptions.
const FLAGS: &[(&str, &str)] = &[
    ("return_immediately", "Return list ID immediately without waiting for full creation (default: true)"),
    ("automation", "Import automation settings from template"),
    ("include_views", "Import views from template"),
    ("old_due_date", "Import tasks' due dates from template"),
    ("old_start_date", "Import tasks' start dates from template"),
    ("old_followers", "Import tasks' watchers from template"),
    ("comment_attachments", "Import tasks' comment attachments from template"),
    ("recur_settings", "Import tasks' recurring settings from template"),
    ("old_tags", "Import tasks' tags from template"),
    ("old_statuses", "Import tasks' status settings from template"),
    ("subtasks", "Import tasks' subtasks from template"),
    ("custom_type", "Import tasks' task types from template"),
    ("old_assignees", "Import tasks' assignees from template"),
    ("attachments", "Import tasks' attachments from template"),
    ("comment", "Import tasks' comments from template"),
    ("old_status", "Import tasks' current statuses from template"),
    ("external_dependencies", "Import tasks' external dependencies from template"),
    ("internal_dependencies", "Import tasks' internal dependencies from template"),
    ("priority", "Import tasks' priorities from template"),
    ("custom_fields", "Import tasks' Custom Fields from template"),
    ("old_checklists", "Import tasks' checklists from template"),
    ("relationships", "Import tasks' relationships from template"),
    ("old_subtask_assignees", "Import tasks' subtask assignees from template"),
    ("remap_start_date", "Remap start dates based on project start/due dates"),
    ("skip_weekends", "Skip weekends when remapping dates"),
];

/// Any value the caller supplied, whatever its type.
fn present(args: &Value, key: &str) -> Option<Value> {
    args.get(key).cloned()
}

/// Like `present`, but an empty string or `null` counts as not supplied.
fn non_empty(args: &Value, key: &str) -> Option<Value> {
    match args.get(key) {
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::Null) => None,
        other => other.cloned(),
    }
}

impl TemplateOptions {
    /// Copy exactly the toggles present in tool arguments.
    ///
    /// Toggles are forwarded as given, including an explicit `false` or a value
    /// of an unexpected type; upstream decides what it accepts. `content` and
    /// the remapping dates are dropped when empty.
    pub fn from_args(args: &Value) -> Self {
        Self {
            return_immediately: present(args, "return_immediately"),
            content: non_empty(args, "content"),
            time_estimate: present(args, "time_estimate"),
            automation: present(args, "automation"),
            include_views: present(args, "include_views"),
            old_due_date: present(args, "old_due_date"),
            old_start_date: present(args, "old_start_date"),
            old_followers: present(args, "old_followers"),
            comment_attachments: present(args, "comment_attachments"),
            recur_settings: present(args, "recur_settings"),
            old_tags: present(args, "old_tags"),
            old_statuses: present(args, "old_statuses"),
            subtasks: present(args, "subtasks"),
            custom_type: present(args, "custom_type"),
            old_assignees: present(args, "old_assignees"),
            attachments: present(args, "attachments"),
            comment: present(args, "comment"),
            old_status: present(args, "old_status"),
            external_dependencies: present(args, "external_dependencies"),
            internal_dependencies: present(args, "internal_dependencies"),
            priority: present(args, "priority"),
            custom_fields: present(args, "custom_fields"),
            old_checklists: present(args, "old_checklists"),
            relationships: present(args, "relationships"),
            old_subtask_assignees: present(args, "old_subtask_assignees"),
            start_date: non_empty(args, "start_date"),
            due_date: non_empty(args, "due_date"),
            remap_start_date: present(args, "remap_start_date"),
            skip_weekends: present(args, "skip_weekends"),
            archived: present(args, "archived"),
        }
    }

    /// JSON Schema properties for every option, keyed by option name.
    pub fn schema_properties() -> Map<String, Value> {
        let mut props: Map<String, Value> = FLAGS
            .iter()
            .map(|(name, description)| {
                (
                    name.to_string(),
                    json!({ "type": "boolean", "description": description }),
                )
            })
            .collect();
        props.insert(
            "content".into(),
            json!({ "type": "string", "description": "Description or content of the list" }),
        );
        props.insert(
            "time_estimate".into(),
            json!({ "type": "number", "description": "Include time (hours, minutes and seconds)" }),
        );
        props.insert(
            "start_date".into(),
            json!({ "type": "string", "description": "Project start date for remapping dates (ISO datetime format: YYYY-MM-DDTHH:mm:ss)" }),
        );
        props.insert(
            "due_date".into(),
            json!({ "type": "string", "description": "Project due date for remapping dates (ISO datetime format: YYYY-MM-DDTHH:mm:ss)" }),
        );
        props.insert(
            "archived".into(),
            json!({ "type": "number", "description": "Include archived tasks (0 or 1)" }),
        );
        props
    }
}

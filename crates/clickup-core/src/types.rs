//! Core types for the ClickUp hierarchy

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Level of the workspace hierarchy a node lives at.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Workspace,
    Space,
    Folder,
    List,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Workspace => "workspace",
            NodeKind::Space => "space",
            NodeKind::Folder => "folder",
            NodeKind::List => "list",
        }
    }

    /// Parse a kind name as used in tool arguments ("list", "Folder", "team").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "workspace" | "team" => Some(NodeKind::Workspace),
            "space" => Some(NodeKind::Space),
            "folder" => Some(NodeKind::Folder),
            "list" => Some(NodeKind::List),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node is addressed either by its opaque id or by its display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeRef {
    Id(String),
    Name(String),
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Id(id) => write!(f, "id={}", id),
            NodeRef::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

/// One node of a freshly fetched workspace tree.
///
/// Built once per resolution call and never mutated afterwards, so fields are
/// only reachable through accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HierarchyNode {
    id: String,
    name: String,
    kind: NodeKind,
    children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    pub fn new(kind: NodeKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<HierarchyNode>) -> Self {
        self.children = children;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn children(&self) -> &[HierarchyNode] {
        &self.children
    }

    /// Depth-first pre-order walk, children in insertion order.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        self.pre_order().count()
    }
}

pub struct PreOrder<'a> {
    stack: Vec<&'a HierarchyNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a HierarchyNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Ancestor that restricts where a name is looked up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeRef {
    pub kind: NodeKind,
    pub reference: NodeRef,
}

impl ScopeRef {
    pub fn id(kind: NodeKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            reference: NodeRef::Id(id.into()),
        }
    }

    pub fn name(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            reference: NodeRef::Name(name.into()),
        }
    }
}

/// What to look for: a node of `target_kind` whose name equals `target_name`
/// ignoring case, optionally under `scope`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionQuery {
    pub target_kind: NodeKind,
    pub target_name: String,
    pub scope: Option<ScopeRef>,
}

impl ResolutionQuery {
    pub fn new(target_kind: NodeKind, target_name: impl Into<String>) -> Self {
        Self {
            target_kind,
            target_name: target_name.into(),
            scope: None,
        }
    }

    pub fn within(mut self, scope: ScopeRef) -> Self {
        self.scope = Some(scope);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub id: String,
    pub name: String,
}

impl From<&HierarchyNode> for ResolutionResult {
    fn from(node: &HierarchyNode) -> Self {
        Self {
            id: node.id.clone(),
            name: node.name.clone(),
        }
    }
}

/// `{ id, name }` reference to a parent entity embedded in a record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EntityRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Read a reference out of an upstream value; `null` and id-less objects yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let id = id_string(obj.get("id")?)?;
        let name = obj.get("name").and_then(Value::as_str).map(String::from);
        Some(Self { id, name })
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Render an upstream identifier. Empty strings do not count as identifiers.
pub fn id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Canonical record produced from a creation response.
///
/// `id` is always present. Every other field is whatever upstream sent, or the
/// caller-supplied default when upstream omitted it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedEntity {
    #[serde(skip)]
    id: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl NormalizedEntity {
    /// Wrap a field map; `None` when no identifier can be read from it.
    pub fn from_fields(fields: Map<String, Value>) -> Option<Self> {
        let id = fields.get("id").and_then(id_string)?;
        Some(Self { id, fields })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn content(&self) -> Option<&str> {
        self.fields.get("content").and_then(Value::as_str)
    }

    pub fn folder(&self) -> Option<EntityRef> {
        self.fields.get("folder").and_then(EntityRef::from_value)
    }

    pub fn space(&self) -> Option<EntityRef> {
        self.fields.get("space").and_then(EntityRef::from_value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Fill `key` with `value` only when upstream left it absent or null.
    pub fn with_default(mut self, key: &str, value: Value) -> Self {
        let missing = self.fields.get(key).map_or(true, Value::is_null);
        if missing && key != "id" {
            self.fields.insert(key.to_string(), value);
        }
        self
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

//! Creation response normalization
//!
//! Template-based creation answers before the new entity is fully materialized,
//! so the payload can arrive as a bare id, an id-only stub, an enveloped object,
//! or the complete record. The shape is inferred from structural cues and each
//! recognized shape is an ordered rule: the first rule whose predicate matches
//! canonicalizes the payload. New upstream variants go in as new rules.

use crate::error::{Error, Result};
use crate::types::{id_string, NormalizedEntity};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Envelope fields unwrapped (exactly one level) before classification, in order.
pub const ENVELOPE_FIELDS: [&str; 2] = ["list", "data"];

/// An id-bearing object with at most this many fields is still materializing.
pub const MATERIALIZING_FIELD_LIMIT: usize = 3;

/// Recognized creation payload shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// A bare identifier string.
    BareId,
    /// An object carrying `id` and at most a couple of incidental fields.
    Materializing,
    /// A complete record.
    Materialized,
}

struct Rule {
    shape: Shape,
    matches: fn(&Value) -> bool,
    canonicalize: fn(Value, &str) -> Option<NormalizedEntity>,
}

const RULES: &[Rule] = &[
    Rule {
        shape: Shape::BareId,
        matches: is_bare_id,
        canonicalize: from_bare_id,
    },
    Rule {
        shape: Shape::Materializing,
        matches: is_materializing,
        canonicalize: from_materializing,
    },
    Rule {
        shape: Shape::Materialized,
        matches: is_materialized,
        canonicalize: from_materialized,
    },
];

/// Reconcile a raw creation payload into one canonical record.
///
/// Fields present upstream are never dropped; fields absent upstream are filled
/// from `fallback_name` and empty defaults only for the partial shapes. Fails with
/// `MalformedResponse` when no identifier can be extracted. The error carries
/// the observed field names, never the payload itself.
pub fn normalize_creation_response(raw: Value, fallback_name: &str) -> Result<NormalizedEntity> {
    let payload = unwrap_envelope(raw);

    for rule in RULES {
        if !(rule.matches)(&payload) {
            continue;
        }
        debug!(shape = ?rule.shape, "classified creation response");
        if let Some(entity) = (rule.canonicalize)(payload.clone(), fallback_name) {
            return Ok(entity);
        }
    }

    let shape = shape_name(&payload);
    let fields = field_names(&payload);
    warn!(shape, fields = ?fields, "unrecognized creation response");
    Err(Error::malformed(shape, fields))
}

/// Which rule a payload would hit after envelope unwrapping, if any.
pub fn classify(raw: &Value) -> Option<Shape> {
    let payload = unwrap_envelope(raw.clone());
    RULES
        .iter()
        .find(|rule| (rule.matches)(&payload))
        .map(|rule| rule.shape)
}

/// Field-count heuristic separating a still-materializing stub from a full record.
pub fn is_still_materializing(obj: &Map<String, Value>) -> bool {
    obj.len() <= MATERIALIZING_FIELD_LIMIT
}

fn unwrap_envelope(raw: Value) -> Value {
    match raw {
        Value::Object(mut obj) => {
            for field in ENVELOPE_FIELDS {
                match obj.remove(field) {
                    Some(inner) if !inner.is_null() => return inner,
                    Some(inner) => {
                        obj.insert(field.to_string(), inner);
                    }
                    None => {}
                }
            }
            Value::Object(obj)
        }
        other => other,
    }
}

fn object_with_id(value: &Value) -> Option<&Map<String, Value>> {
    value
        .as_object()
        .filter(|obj| obj.get("id").and_then(id_string).is_some())
}

fn is_bare_id(value: &Value) -> bool {
    matches!(value, Value::String(s) if !s.is_empty())
}

fn is_materializing(value: &Value) -> bool {
    object_with_id(value).is_some_and(is_still_materializing)
}

fn is_materialized(value: &Value) -> bool {
    object_with_id(value).is_some_and(|obj| !is_still_materializing(obj))
}

fn synthesized(id: Value, fallback_name: &str) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("id".into(), id);
    fields.insert("name".into(), Value::String(fallback_name.to_string()));
    fields.insert("content".into(), Value::String(String::new()));
    fields.insert("folder".into(), Value::Null);
    fields.insert("space".into(), Value::Null);
    fields
}

fn from_bare_id(value: Value, fallback_name: &str) -> Option<NormalizedEntity> {
    NormalizedEntity::from_fields(synthesized(value, fallback_name))
}

fn from_materializing(value: Value, fallback_name: &str) -> Option<NormalizedEntity> {
    let Value::Object(payload) = value else {
        return None;
    };
    let id = payload.get("id")?.clone();
    let mut fields = synthesized(id, fallback_name);
    // Payload fields win over the synthesized defaults.
    fields.extend(payload);
    NormalizedEntity::from_fields(fields)
}

fn from_materialized(value: Value, _fallback_name: &str) -> Option<NormalizedEntity> {
    match value {
        Value::Object(fields) => NormalizedEntity::from_fields(fields),
        _ => None,
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn field_names(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_unwrap_is_single_level() {
        let raw = json!({ "data": { "data": { "id": "x" } } });
        assert_eq!(unwrap_envelope(raw), json!({ "data": { "id": "x" } }));
    }

    #[test]
    fn list_envelope_checked_before_data() {
        let raw = json!({ "list": "from-list", "data": "from-data" });
        assert_eq!(unwrap_envelope(raw), json!("from-list"));
    }

    #[test]
    fn null_envelope_is_not_unwrapped() {
        let raw = json!({ "list": null, "id": "x" });
        assert_eq!(unwrap_envelope(raw.clone()), raw);
    }

    #[test]
    fn materializing_cutoff_is_inclusive() {
        let three = json!({ "id": "a", "b": 1, "c": 2 });
        let four = json!({ "id": "a", "b": 1, "c": 2, "d": 3 });
        assert!(is_materializing(&three));
        assert!(!is_materialized(&three));
        assert!(is_materialized(&four));
        assert!(!is_materializing(&four));
    }

    #[test]
    fn empty_string_is_not_an_id() {
        assert!(!is_bare_id(&json!("")));
        assert!(object_with_id(&json!({ "id": "" })).is_none());
    }
}

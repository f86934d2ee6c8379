//! Tests for clickup-core: hierarchy types, normalizer shapes, errors, config, protocol

use clickup_core::normalize::{classify, is_still_materializing};
use clickup_core::*;
use serde_json::{json, Value};

// ===========================================================================
// NodeKind
// ===========================================================================

#[test]
fn node_kind_serde_is_lowercase() {
    let json = serde_json::to_string(&NodeKind::Folder).unwrap();
    assert_eq!(json, r#""folder""#);
    let back: NodeKind = serde_json::from_str(r#""list""#).unwrap();
    assert_eq!(back, NodeKind::List);
}

#[test]
fn node_kind_parse_accepts_team_alias_and_case() {
    assert_eq!(NodeKind::parse("Team"), Some(NodeKind::Workspace));
    assert_eq!(NodeKind::parse(" SPACE "), Some(NodeKind::Space));
    assert_eq!(NodeKind::parse("task"), None);
}

// ===========================================================================
// HierarchyNode
// ===========================================================================

fn sample_tree() -> HierarchyNode {
    HierarchyNode::new(NodeKind::Workspace, "w", "Acme").with_children(vec![
        HierarchyNode::new(NodeKind::Space, "s1", "Eng").with_children(vec![
            HierarchyNode::new(NodeKind::Folder, "f1", "Q1")
                .with_children(vec![HierarchyNode::new(NodeKind::List, "l1", "Backlog")]),
            HierarchyNode::new(NodeKind::List, "l2", "Loose"),
        ]),
        HierarchyNode::new(NodeKind::Space, "s2", "Ops"),
    ])
}

#[test]
fn pre_order_visits_parents_before_children_in_insertion_order() {
    let tree = sample_tree();
    let ids: Vec<&str> = tree.pre_order().map(|n| n.id()).collect();
    assert_eq!(ids, vec!["w", "s1", "f1", "l1", "l2", "s2"]);
    assert_eq!(tree.node_count(), 6);
}

#[test]
fn resolution_result_from_node() {
    let node = HierarchyNode::new(NodeKind::List, "l9", "Sprint");
    let result = ResolutionResult::from(&node);
    assert_eq!(result.id, "l9");
    assert_eq!(result.name, "Sprint");
}

// ===========================================================================
// Normalizer: recognized shapes
// ===========================================================================

#[test]
fn bare_string_id_is_synthesized() {
    let entity = normalize_creation_response(json!("abc123"), "Sprint Plan").unwrap();
    assert_eq!(
        entity.into_value(),
        json!({ "id": "abc123", "name": "Sprint Plan", "content": "", "folder": null, "space": null })
    );
}

#[test]
fn id_only_stub_keeps_payload_fields() {
    let entity =
        normalize_creation_response(json!({ "id": "abc123", "content": "x" }), "Fallback").unwrap();
    assert_eq!(
        entity.into_value(),
        json!({ "id": "abc123", "name": "Fallback", "content": "x", "folder": null, "space": null })
    );
}

#[test]
fn enveloped_full_record_is_unwrapped_verbatim() {
    let inner = json!({
        "id": "abc123",
        "name": "Sprint",
        "content": "x",
        "folder": { "id": "f1", "name": "Q1" },
        "space": { "id": "s1", "name": "Eng" },
        "status": "open"
    });
    let entity =
        normalize_creation_response(json!({ "data": inner.clone() }), "Ignored").unwrap();
    assert_eq!(entity.folder(), Some(EntityRef::new("f1", "Q1")));
    assert_eq!(entity.space(), Some(EntityRef::new("s1", "Eng")));
    assert_eq!(entity.name(), Some("Sprint"));
    assert_eq!(entity.into_value(), inner);
}

#[test]
fn payload_without_any_id_is_malformed() {
    let err = normalize_creation_response(json!({ "foo": "bar" }), "X").unwrap_err();
    match err {
        Error::MalformedResponse { shape, fields } => {
            assert_eq!(shape, "object");
            assert_eq!(fields, vec!["foo".to_string()]);
        }
        other => panic!("Expected MalformedResponse, got {:?}", other),
    }
}

#[test]
fn malformed_error_never_carries_payload_values() {
    let err = normalize_creation_response(json!({ "secret": "hunter2" }), "X").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("secret"));
    assert!(!msg.contains("hunter2"));
}

struct Case {
    name: &'static str,
    raw: Value,
    shape: Option<Shape>,
    expect_id: Option<&'static str>,
    expect_name: Option<&'static str>,
}

#[test]
fn normalizer_shape_table() {
    let cases = vec![
        Case {
            name: "bare id",
            raw: json!("L1"),
            shape: Some(Shape::BareId),
            expect_id: Some("L1"),
            expect_name: Some("Fallback"),
        },
        Case {
            name: "bare id in list envelope",
            raw: json!({ "list": "L2" }),
            shape: Some(Shape::BareId),
            expect_id: Some("L2"),
            expect_name: Some("Fallback"),
        },
        Case {
            name: "bare id in data envelope",
            raw: json!({ "data": "L3" }),
            shape: Some(Shape::BareId),
            expect_id: Some("L3"),
            expect_name: Some("Fallback"),
        },
        Case {
            name: "id only",
            raw: json!({ "id": "L4" }),
            shape: Some(Shape::Materializing),
            expect_id: Some("L4"),
            expect_name: Some("Fallback"),
        },
        Case {
            name: "stub at cutoff with its own name",
            raw: json!({ "id": "L5", "name": "Real", "content": "c" }),
            shape: Some(Shape::Materializing),
            expect_id: Some("L5"),
            expect_name: Some("Real"),
        },
        Case {
            name: "stub in list envelope",
            raw: json!({ "list": { "id": "L6" } }),
            shape: Some(Shape::Materializing),
            expect_id: Some("L6"),
            expect_name: Some("Fallback"),
        },
        Case {
            name: "numeric id stub",
            raw: json!({ "id": 901 }),
            shape: Some(Shape::Materializing),
            expect_id: Some("901"),
            expect_name: Some("Fallback"),
        },
        Case {
            name: "four fields is materialized",
            raw: json!({ "id": "L7", "name": "N", "content": "", "status": null }),
            shape: Some(Shape::Materialized),
            expect_id: Some("L7"),
            expect_name: Some("N"),
        },
        Case {
            name: "materialized without name keeps it absent",
            raw: json!({ "id": "L8", "a": 1, "b": 2, "c": 3 }),
            shape: Some(Shape::Materialized),
            expect_id: Some("L8"),
            expect_name: None,
        },
        Case {
            name: "empty string",
            raw: json!(""),
            shape: None,
            expect_id: None,
            expect_name: None,
        },
        Case {
            name: "empty id field",
            raw: json!({ "id": "", "name": "N" }),
            shape: None,
            expect_id: None,
            expect_name: None,
        },
        Case {
            name: "null",
            raw: Value::Null,
            shape: None,
            expect_id: None,
            expect_name: None,
        },
        Case {
            name: "number",
            raw: json!(42),
            shape: None,
            expect_id: None,
            expect_name: None,
        },
        Case {
            name: "array",
            raw: json!(["L9"]),
            shape: None,
            expect_id: None,
            expect_name: None,
        },
        Case {
            name: "null envelope without id",
            raw: json!({ "data": null }),
            shape: None,
            expect_id: None,
            expect_name: None,
        },
        Case {
            name: "envelope around id-less object",
            raw: json!({ "data": { "name": "N" } }),
            shape: None,
            expect_id: None,
            expect_name: None,
        },
    ];

    for case in cases {
        assert_eq!(classify(&case.raw), case.shape, "classify: {}", case.name);
        let result = normalize_creation_response(case.raw.clone(), "Fallback");
        match case.expect_id {
            Some(id) => {
                let entity = result.unwrap_or_else(|e| panic!("{}: {}", case.name, e));
                assert_eq!(entity.id(), id, "id: {}", case.name);
                assert_eq!(entity.name(), case.expect_name, "name: {}", case.name);
            }
            None => {
                let err = result.expect_err(case.name);
                assert!(
                    matches!(err, Error::MalformedResponse { .. }),
                    "{}: {:?}",
                    case.name,
                    err
                );
            }
        }
    }
}

#[test]
fn stub_payload_fields_override_defaults() {
    let entity = normalize_creation_response(
        json!({ "id": "L1", "folder": { "id": "f9", "name": "Inbox" } }),
        "Fallback",
    )
    .unwrap();
    assert_eq!(entity.folder(), Some(EntityRef::new("f9", "Inbox")));
    assert_eq!(entity.space(), None);
    assert_eq!(entity.content(), Some(""));
}

#[test]
fn normalizing_a_normalized_record_is_a_noop() {
    let full = json!({
        "id": "L1",
        "name": "Sprint",
        "content": "",
        "folder": null,
        "space": null
    });
    let once = normalize_creation_response(full.clone(), "Other").unwrap();
    let twice = normalize_creation_response(once.clone().into_value(), "Other").unwrap();
    assert_eq!(once.clone().into_value(), full);
    assert_eq!(once, twice);
}

#[test]
fn synthesized_stub_renormalizes_to_itself() {
    let once = normalize_creation_response(json!("abc"), "Plan").unwrap();
    let twice = normalize_creation_response(once.clone().into_value(), "Different").unwrap();
    assert_eq!(once, twice);
}

#[test]
fn materializing_heuristic_in_isolation() {
    let obj = |v: Value| v.as_object().cloned().unwrap();
    assert!(is_still_materializing(&obj(json!({ "id": "a" }))));
    assert!(is_still_materializing(&obj(json!({ "id": "a", "b": 1, "c": 2 }))));
    assert!(!is_still_materializing(&obj(json!({ "id": "a", "b": 1, "c": 2, "d": 3 }))));
}

#[test]
fn with_default_fills_only_missing_or_null() {
    let entity = normalize_creation_response(json!("L1"), "Plan")
        .unwrap()
        .with_default("folder", EntityRef::new("f1", "Q1").to_value())
        .with_default("name", json!("Overwritten?"))
        .with_default("id", json!("nope"));
    assert_eq!(entity.folder(), Some(EntityRef::new("f1", "Q1")));
    assert_eq!(entity.name(), Some("Plan"));
    assert_eq!(entity.id(), "L1");
}

#[test]
fn normalized_entity_serializes_as_flat_record() {
    let entity = normalize_creation_response(json!({ "id": "L1" }), "Plan").unwrap();
    let json = serde_json::to_value(&entity).unwrap();
    assert_eq!(json["id"], "L1");
    assert_eq!(json["name"], "Plan");
    assert!(json.get("fields").is_none());
}

// ===========================================================================
// Error
// ===========================================================================

#[test]
fn target_and_scope_not_found_are_distinguishable() {
    let target = Error::not_found(NodeKind::List, "Backlog");
    let scope = Error::scope_not_found(NodeKind::Space, NodeRef::Name("Eng".into()));
    assert!(target.is_not_found());
    assert!(scope.is_not_found());
    assert_eq!(target.to_string(), r#"list "Backlog" not found"#);
    assert_eq!(scope.to_string(), r#"scope space "Eng" not found"#);
    let by_id = Error::scope_not_found(NodeKind::Folder, NodeRef::Id("f1".into()));
    assert_eq!(by_id.to_string(), "scope folder id=f1 not found");
}

#[test]
fn upstream_errors_pass_through_verbatim() {
    let err: Error = UpstreamError::Auth("bad token".into()).into();
    assert!(err.is_upstream());
    assert_eq!(err.to_string(), "authentication failed: bad token");
    assert_eq!(err.upstream(), Some(&UpstreamError::Auth("bad token".into())));
}

#[test]
fn fetch_error_names_the_phase() {
    let err = Error::fetch(
        "fetch folders for space s1",
        UpstreamError::RateLimited { retry_after_ms: 500 },
    );
    assert!(err.is_upstream());
    assert!(!err.is_not_found());
    assert_eq!(
        err.to_string(),
        "fetch folders for space s1 failed: rate limited: retry after 500ms"
    );
}

#[test]
fn context_names_the_phase_of_a_decode_failure() {
    let decode: Error = serde_json::from_str::<Vec<String>>("{").unwrap_err().into();
    let err = decode.context("fetch folders for space s1");
    assert!(matches!(err, Error::Decode { ref phase, .. } if phase == "fetch folders for space s1"));
    assert!(err
        .to_string()
        .starts_with("fetch folders for space s1 failed: unexpected response:"));
    assert!(!err.is_upstream());
}

#[test]
fn context_leaves_resolution_errors_alone() {
    let err = Error::not_found(NodeKind::List, "Backlog").context("resolve");
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "list \"Backlog\" not found");
}

// ===========================================================================
// ServiceConfig
// ===========================================================================

#[test]
fn config_defaults() {
    let config = ServiceConfig::default();
    assert_eq!(config.base_url, "https://api.clickup.com/api/v2");
    assert_eq!(config.request_timeout_secs, 30);
    assert!(config.validate().is_err());
}

#[test]
fn config_load_from_toml_with_partial_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clickup-mcp.toml");
    std::fs::write(&path, "api_key = \"pk_1\"\nteam_id = \"900\"\n").unwrap();
    let config = ServiceConfig::load(&path);
    assert_eq!(config.api_key, "pk_1");
    assert_eq!(config.team_id, "900");
    assert_eq!(config.base_url, "https://api.clickup.com/api/v2");
    assert!(config.validate().is_ok());
}

#[test]
fn config_missing_or_invalid_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        ServiceConfig::load(&dir.path().join("absent.toml")),
        ServiceConfig::default()
    );
    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "api_key = [").unwrap();
    assert_eq!(ServiceConfig::load(&bad), ServiceConfig::default());
}

#[test]
fn config_overrides_ignore_empty_values() {
    let config = ServiceConfig {
        api_key: "file-key".into(),
        ..Default::default()
    }
    .with_overrides(|key| match key {
        "CLICKUP_API_KEY" => Some("  ".into()),
        "CLICKUP_TEAM_ID" => Some("123".into()),
        _ => None,
    });
    assert_eq!(config.api_key, "file-key");
    assert_eq!(config.team_id, "123");
}

#[test]
fn config_list_url_and_redaction() {
    let config = ServiceConfig {
        api_key: "pk_secret".into(),
        team_id: "42".into(),
        ..Default::default()
    };
    assert_eq!(config.list_url("L1"), "https://app.clickup.com/42/v/l/L1");
    let toml = config.to_redacted_toml();
    assert!(!toml.contains("pk_secret"));
    assert!(toml.contains("<redacted>"));
}

// ===========================================================================
// Protocol
// ===========================================================================

#[test]
fn rpc_request_accepts_numeric_and_missing_id() {
    let req: RpcRequest =
        serde_json::from_str(r#"{"jsonrpc":"2.0","id":7,"method":"tools/list"}"#).unwrap();
    assert_eq!(req.id, Some(json!(7)));
    assert!(req.params.is_null());
    let note: RpcRequest =
        serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).unwrap();
    assert!(note.is_notification());
}

#[test]
fn rpc_response_shapes() {
    let ok = serde_json::to_value(RpcResponse::ok(json!(1), json!({ "a": 1 }))).unwrap();
    assert_eq!(ok["jsonrpc"], "2.0");
    assert!(ok.get("error").is_none());
    let err = serde_json::to_value(RpcResponse::method_not_found(json!("x"), "nope")).unwrap();
    assert_eq!(err["error"]["code"], METHOD_NOT_FOUND);
    assert!(err.get("result").is_none());
}

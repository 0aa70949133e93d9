/// Inspection report tests: the exact text the assembly scripts print.
use fs_json::{
    assembly_mates, inspect_assembly_mates, inspect_target_mate, parse_element_url, parse_id,
    target_mate, AssemblyAttribute, AttributedEntity, InspectError, MateConnector, Value,
};

fn entity(kind: &str, url: &str, id: &[&str]) -> AttributedEntity {
    AttributedEntity {
        attribute: AssemblyAttribute {
            kind: kind.to_string(),
            url: url.to_string(),
        },
        operation_id: id.iter().map(|s| s.to_string()).collect(),
    }
}

fn connector(id: &[&str]) -> MateConnector {
    MateConnector {
        operation_id: id.iter().map(|s| s.to_string()).collect(),
    }
}

const URL: &str = "https://cad.example.com/documents/abc123/w/def456/e/ghi789";

// ============================================================================
// Helpers
// ============================================================================

#[test]
fn parse_id_joins_components() {
    let id: Vec<String> = ["FWa", "1", "mate"].iter().map(|s| s.to_string()).collect();
    assert_eq!(parse_id(&id), "FWa.1.mate");
}

#[test]
fn parse_id_single_and_empty() {
    assert_eq!(parse_id(&["only".to_string()]), "only");
    assert_eq!(parse_id(&[]), "");
}

#[test]
fn parse_element_url_extracts_ids() {
    let path = parse_element_url(URL).unwrap();
    assert_eq!(path.document_id, "abc123");
    assert_eq!(path.workspace_id, "def456");
    assert_eq!(path.element_id, "ghi789");
}

#[test]
fn parse_element_url_rejects_version_links() {
    let err = parse_element_url("https://cad.example.com/documents/abc/v/def/e/ghi").unwrap_err();
    assert!(matches!(err, InspectError::MalformedUrl(ref u) if u.contains("/v/")));
}

// ============================================================================
// Assembly mates
// ============================================================================

#[test]
fn no_entities_is_invalid() {
    assert_eq!(
        inspect_assembly_mates(&[]).unwrap(),
        r#"{"valid" : false,"mates" : [],"mirrors" : []}"#
    );
}

#[test]
fn single_mate_report() {
    let entities = [entity("MATE", URL, &["FWa", "1", "body"])];
    assert_eq!(
        inspect_assembly_mates(&entities).unwrap(),
        r#"{"valid" : true,"mates" : [{"mateId" : "FWa.1","documentId" : "abc123","workspaceId" : "def456","elementId" : "ghi789"}],"mirrors" : []}"#
    );
}

#[test]
fn non_mate_entities_are_skipped_but_count_as_valid() {
    let entities = [entity("MIRROR", "not a url", &["x"])];
    let report = assembly_mates(&entities).unwrap();
    assert_eq!(report.get("valid"), Some(&Value::Boolean(true)));
    assert_eq!(report.get("mates"), Some(&Value::Array(vec![])));
}

#[test]
fn mates_keep_query_order() {
    let entities = [
        entity("MATE", "/d1/w/w1/e/e1", &["A", "z"]),
        entity("OTHER", "", &[]),
        entity("MATE", "/d2/w/w2/e/e2", &["B", "C", "z"]),
    ];
    let text = inspect_assembly_mates(&entities).unwrap();
    let first = text.find(r#""mateId" : "A""#).expect("first mate");
    let second = text.find(r#""mateId" : "B.C""#).expect("second mate");
    assert!(first < second);
}

#[test]
fn single_component_id_gives_empty_mate_id() {
    let entities = [entity("MATE", URL, &["only"])];
    let report = assembly_mates(&entities).unwrap();
    let Some(Value::Array(mates)) = report.get("mates") else {
        panic!("mates must be an array");
    };
    assert_eq!(mates[0].get("mateId"), Some(&Value::from("")));
}

#[test]
fn mate_with_empty_operation_id_fails() {
    let entities = [entity("MATE", URL, &[])];
    assert!(matches!(
        inspect_assembly_mates(&entities),
        Err(InspectError::EmptyOperationId)
    ));
}

#[test]
fn mate_with_malformed_url_fails() {
    let entities = [entity("MATE", "https://cad.example.com/", &["A", "b"])];
    assert!(matches!(
        inspect_assembly_mates(&entities),
        Err(InspectError::MalformedUrl(_))
    ));
}

// ============================================================================
// Target mate
// ============================================================================

#[test]
fn target_mate_uses_first_component() {
    let connectors = [connector(&["FTm", "3"]), connector(&["other"])];
    assert_eq!(
        inspect_target_mate(&connectors).unwrap(),
        r#"{"targetMateId" : "FTm"}"#
    );
}

#[test]
fn target_mate_without_connectors_fails() {
    assert!(matches!(
        target_mate(&[]),
        Err(InspectError::MissingMateConnector)
    ));
}

#[test]
fn target_mate_with_empty_id_fails() {
    assert!(matches!(
        target_mate(&[connector(&[])]),
        Err(InspectError::EmptyOperationId)
    ));
}

// ============================================================================
// Input decoding
// ============================================================================

#[test]
fn entities_deserialize_from_query_json() {
    let json = r#"[
        {"attribute": {"type": "MATE", "url": "/d/w/w/e/e"}, "operationId": ["F", "1"]}
    ]"#;
    let entities: Vec<AttributedEntity> = serde_json::from_str(json).unwrap();
    assert_eq!(entities, vec![entity("MATE", "/d/w/w/e/e", &["F", "1"])]);
}

#[test]
fn connectors_deserialize_from_query_json() {
    let connectors: Vec<MateConnector> =
        serde_json::from_str(r#"[{"operationId": ["M"]}]"#).unwrap();
    assert_eq!(inspect_target_mate(&connectors).unwrap(), r#"{"targetMateId" : "M"}"#);
}

//! Inspection reports printed by the assembly feature scripts.
//!
//! The scripts query the part studio for entities carrying the assembly
//! attribute (or for mate connector bodies), then print a JSON report through
//! the shared serializer. Here the query results arrive as already-evaluated
//! input data; building and serializing the report is pure.
//!
//! # Example
//! ```
//! use fs_json::{inspect_assembly_mates, AssemblyAttribute, AttributedEntity};
//!
//! let entities = vec![AttributedEntity {
//!     attribute: AssemblyAttribute {
//!         kind: "MATE".to_string(),
//!         url: "https://cad.example.com/documents/d1/w/w2/e/e3".to_string(),
//!     },
//!     operation_id: vec!["FqA".to_string(), "2".to_string(), "body".to_string()],
//! }];
//! assert_eq!(
//!     inspect_assembly_mates(&entities).unwrap(),
//!     r#"{"valid" : true,"mates" : [{"mateId" : "FqA.2","documentId" : "d1","workspaceId" : "w2","elementId" : "e3"}],"mirrors" : []}"#
//! );
//! ```

use crate::error::InspectError;
use crate::serializer::serialize;
use crate::value::Value;
use serde::Deserialize;

type Result<T> = std::result::Result<T, InspectError>;

/// Attribute type marking an entity created by a mate.
pub const MATE_KIND: &str = "MATE";

/// The assembly attribute attached to a queried entity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssemblyAttribute {
    #[serde(rename = "type")]
    pub kind: String,
    /// Link to the document element the mate refers to.
    pub url: String,
}

/// One entity returned by the attribute query, with the id of the operation
/// that last modified it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributedEntity {
    pub attribute: AssemblyAttribute,
    pub operation_id: Vec<String>,
}

/// A mate connector body and the id of the operation that last modified it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MateConnector {
    pub operation_id: Vec<String>,
}

/// Document, workspace and element ids extracted from an element URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementPath {
    pub document_id: String,
    pub workspace_id: String,
    pub element_id: String,
}

/// Join operation id components with `.`.
///
/// ```
/// use fs_json::parse_id;
/// let id = ["FqA", "2", "body"].map(String::from);
/// assert_eq!(parse_id(&id), "FqA.2.body");
/// ```
pub fn parse_id(id: &[String]) -> String {
    id.join(".")
}

/// Extract the ids from a URL ending in `/<document>/w/<workspace>/e/<element>`.
///
/// The whole URL must match: the three ids are non-empty runs of
/// `[A-Za-z0-9_]`, the element id runs to the end of the string, and the
/// document id is preceded by a `/`. Anything before that slash is accepted
/// except a line break.
pub fn parse_element_url(url: &str) -> Result<ElementPath> {
    let malformed = || InspectError::MalformedUrl(url.to_string());

    // rsplitn yields from the right: element, "e", workspace, "w", document, prefix
    let parts: Vec<&str> = url.rsplitn(6, '/').collect();
    let [element, e, workspace, w, document, prefix] = parts[..] else {
        return Err(malformed());
    };
    if e != "e" || w != "w" || prefix.contains('\n') {
        return Err(malformed());
    }
    if ![document, workspace, element].iter().all(|s| is_word(s)) {
        return Err(malformed());
    }

    Ok(ElementPath {
        document_id: document.to_string(),
        workspace_id: workspace.to_string(),
        element_id: element.to_string(),
    })
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Build the assembly-mate report.
///
/// `valid` is true when the attribute query returned anything. Each entity
/// whose attribute type is `MATE` contributes one entry. Its `mateId` is the
/// operation id without its last component. `mirrors` is always empty.
pub fn assembly_mates(entities: &[AttributedEntity]) -> Result<Value> {
    let mut mates = Vec::new();
    for entity in entities {
        if entity.attribute.kind != MATE_KIND {
            continue;
        }
        let path = parse_element_url(&entity.attribute.url)?;
        let (_, parent) = entity
            .operation_id
            .split_last()
            .ok_or(InspectError::EmptyOperationId)?;

        mates.push(Value::map([
            ("mateId", Value::from(parse_id(parent))),
            ("documentId", Value::from(path.document_id)),
            ("workspaceId", Value::from(path.workspace_id)),
            ("elementId", Value::from(path.element_id)),
        ]));
    }

    tracing::debug!(
        entities = entities.len(),
        mates = mates.len(),
        "built assembly mate report"
    );

    Ok(Value::map([
        ("valid", Value::from(!entities.is_empty())),
        ("mates", Value::Array(mates)),
        ("mirrors", Value::array([])),
    ]))
}

/// Build the mate-connector report: the first component of the first
/// connector's operation id.
pub fn target_mate(connectors: &[MateConnector]) -> Result<Value> {
    let connector = connectors
        .first()
        .ok_or(InspectError::MissingMateConnector)?;
    let target = connector
        .operation_id
        .first()
        .ok_or(InspectError::EmptyOperationId)?;

    tracing::debug!(target_mate_id = %target, "resolved target mate");

    Ok(Value::map([("targetMateId", Value::from(target.as_str()))]))
}

/// [`assembly_mates`], serialized.
pub fn inspect_assembly_mates(entities: &[AttributedEntity]) -> Result<String> {
    Ok(serialize(&assembly_mates(entities)?)?)
}

/// [`target_mate`], serialized.
pub fn inspect_target_mate(connectors: &[MateConnector]) -> Result<String> {
    Ok(serialize(&target_mate(connectors)?)?)
}

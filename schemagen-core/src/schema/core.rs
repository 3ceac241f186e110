use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

use super::{SchemaDocument, SchemaNode};
use crate::json_value::{iter_array, iter_object, JsonKind, ValueExt};

/// Infer a full schema document for a decoded JSON value.
///
/// Array and object roots have their node fields merged into the document
/// alongside `$schema` and `title`. Scalar and null roots yield a document
/// with no `type`.
pub fn infer_document(value: &Value) -> SchemaDocument {
    let root = match value.kind() {
        JsonKind::Object | JsonKind::Array => Some(infer_node(value)),
        kind => {
            debug!(?kind, "root value is not a container, emitting untyped document");
            None
        }
    };
    SchemaDocument::new(root)
}

/// Infer the schema node for any value below the document root.
///
/// Arrays are described by their first element only.
pub fn infer_node(value: &Value) -> SchemaNode {
    match value.kind() {
        JsonKind::Object => {
            let properties: IndexMap<String, SchemaNode> = iter_object(value)
                .map(|(key, child)| (key.clone(), infer_node(child)))
                .collect();
            trace!(keys = properties.len(), "inferred object schema");
            SchemaNode::Object { properties }
        }
        JsonKind::Array => {
            let items = iter_array(value).next().map(|first| Box::new(infer_node(first)));
            if items.is_none() {
                trace!("empty array, leaving items unset");
            }
            SchemaNode::Array { items }
        }
        _ => scalar_type(value),
    }
}

/// Map a scalar to its schema type. Null, and anything that is not a
/// scalar, falls back to `string`.
pub(crate) fn scalar_type(value: &Value) -> SchemaNode {
    match value.kind() {
        JsonKind::Integer => SchemaNode::Integer,
        JsonKind::Number => SchemaNode::Number,
        JsonKind::Boolean => SchemaNode::Boolean,
        JsonKind::String | JsonKind::Null | JsonKind::Object | JsonKind::Array => {
            SchemaNode::String
        }
    }
}

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::error::{Result, SchemaError};

pub(crate) mod core;

pub use self::core::{infer_document, infer_node};

/// `$schema` identifier stamped on every generated document
pub const DRAFT_07_SCHEMA_URI: &str = "http://json-schema.org/draft-07/schema#";

/// `title` stamped on every generated document
pub const DEFAULT_TITLE: &str = "Generated schema for Root";

/// One inferred type description.
///
/// Serializes as a JSON Schema fragment keyed by `type`. An object node's
/// `required` list is not stored: it is always the key set of `properties`,
/// emitted in the same order.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Object {
        properties: IndexMap<String, SchemaNode>,
    },
    /// `items` is `None` when inferred from an empty array.
    Array {
        items: Option<Box<SchemaNode>>,
    },
    String,
    Integer,
    Number,
    Boolean,
}

impl SchemaNode {
    /// The JSON Schema `type` keyword for this node
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaNode::Object { .. } => "object",
            SchemaNode::Array { .. } => "array",
            SchemaNode::String => "string",
            SchemaNode::Integer => "integer",
            SchemaNode::Number => "number",
            SchemaNode::Boolean => "boolean",
        }
    }

    /// Keys listed under `required`; empty for anything but an object node.
    pub fn required(&self) -> Vec<&str> {
        match self {
            SchemaNode::Object { properties } => properties.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    fn serialize_fields<M: SerializeMap>(&self, map: &mut M) -> std::result::Result<(), M::Error> {
        map.serialize_entry("type", self.type_name())?;
        match self {
            SchemaNode::Object { properties } => {
                map.serialize_entry("properties", properties)?;
                map.serialize_entry("required", &self.required())?;
            }
            SchemaNode::Array { items: Some(items) } => {
                map.serialize_entry("items", items)?;
            }
            _ => {}
        }
        Ok(())
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        self.serialize_fields(&mut map)?;
        map.end()
    }
}

/// A complete generated schema: the fixed metadata plus the root node's
/// fields inlined at the top level.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    pub schema_uri: String,
    pub title: String,
    /// `None` when the input root was a bare scalar or null, in which case
    /// the document carries no `type` at all.
    pub root: Option<SchemaNode>,
}

impl SchemaDocument {
    pub fn new(root: Option<SchemaNode>) -> Self {
        Self {
            schema_uri: DRAFT_07_SCHEMA_URI.to_string(),
            title: DEFAULT_TITLE.to_string(),
            root,
        }
    }

    /// Render with two-space indentation
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SchemaError::Encode)
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(SchemaError::Encode)
    }
}

impl Serialize for SchemaDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("$schema", &self.schema_uri)?;
        map.serialize_entry("title", &self.title)?;
        if let Some(root) = &self.root {
            root.serialize_fields(&mut map)?;
        }
        map.end()
    }
}

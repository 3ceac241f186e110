pub mod error;
pub mod json_value;
pub mod schema;

// Re-export commonly used items
pub use error::{Result, SchemaError};
pub use schema::{
    infer_document, infer_node, SchemaDocument, SchemaNode, DEFAULT_TITLE,
    DRAFT_07_SCHEMA_URI,
};

use serde::Deserialize;
use serde_json::de::{Read, SliceRead, StrRead};
use serde_json::{Deserializer, Value};

/// Decode JSON text and infer a schema document for it
pub fn infer_schema_from_str(json: &str) -> Result<SchemaDocument> {
    let value = decode(StrRead::new(json))?;
    Ok(infer_document(&value))
}

/// Decode a raw JSON payload (e.g. an HTTP response body) and infer a schema document for it
pub fn infer_schema_from_slice(json: &[u8]) -> Result<SchemaDocument> {
    let value = decode(SliceRead::new(json))?;
    Ok(infer_document(&value))
}

/// Nesting depth is unbounded; only the stack limits it.
fn decode<'de, R: Read<'de>>(read: R) -> Result<Value> {
    let mut de = Deserializer::new(read);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de).map_err(SchemaError::Decode)?;
    de.end().map_err(SchemaError::Decode)?;
    Ok(value)
}

#[cfg(test)]
mod tests;

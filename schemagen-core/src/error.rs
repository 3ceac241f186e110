use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid JSON input: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Failed to encode schema: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;

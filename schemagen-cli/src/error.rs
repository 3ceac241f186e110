use std::io;
use std::path::PathBuf;

use schemagen_core::SchemaError;
use thiserror::Error;

/// Every failure is fatal to the invocation and maps to exit code 1.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("URL is required")]
    MissingUrl,
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("HTTP request failed with status code {status}")]
    Status { status: u16 },
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("Error writing to file {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("schemagen/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// GET `url` and return the raw body. Anything other than 200 is an error.
pub fn fetch(url: &str, config: &FetchConfig) -> Result<Vec<u8>, CliError> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(CliError::Transport)?;

    debug!(url, "fetching");
    let response = client.get(url).send().map_err(CliError::Transport)?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(CliError::Status {
            status: status.as_u16(),
        });
    }

    let body = response.bytes().map_err(CliError::Transport)?;
    debug!(url, bytes = body.len(), "fetched response body");
    Ok(body.to_vec())
}

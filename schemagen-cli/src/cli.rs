use std::time::Duration;

use clap::Parser;
use tracing::debug;

use crate::error::CliError;
use crate::fetch::FetchConfig;

#[derive(Parser, Debug)]
#[command(
    name = "schemagen",
    version,
    about = "Generate JSON Schema from API response",
    long_about = "Generate JSON Schema from API response for use in validating API responses."
)]
pub struct Cli {
    /// URL to the API endpoint
    #[arg(short, long)]
    pub url: Option<String>,

    /// Output file for the generated JSON Schema (written as <OUT>.json)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Accepted for compatibility, has no effect
    #[arg(short, long)]
    pub toggle: bool,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything a single run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: String,
    pub out: Option<String>,
    pub fetch: FetchConfig,
}

impl Cli {
    pub fn into_config(self) -> Result<RunConfig, CliError> {
        if self.toggle {
            debug!("--toggle has no effect");
        }
        // Empty counts as absent
        let url = self
            .url
            .filter(|url| !url.is_empty())
            .ok_or(CliError::MissingUrl)?;
        Ok(RunConfig {
            url,
            out: self.out.filter(|out| !out.is_empty()),
            fetch: FetchConfig {
                timeout: Duration::from_secs(self.timeout),
                ..FetchConfig::default()
            },
        })
    }
}

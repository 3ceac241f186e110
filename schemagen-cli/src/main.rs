use std::process::ExitCode;

use clap::Parser;
use schemagen_core::infer_schema_from_slice;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod fetch;
mod output;

use cli::{Cli, RunConfig};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.into_config().and_then(|config| run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            anstream::eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only ever carries the schema
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &RunConfig) -> Result<(), CliError> {
    let body = fetch::fetch(&config.url, &config.fetch)?;
    let schema = infer_schema_from_slice(&body)?;
    let text = schema.to_pretty_json()?;

    output::print_schema(&text);

    if let Some(name) = &config.out {
        output::write_schema(name, &text)?;
    }
    Ok(())
}

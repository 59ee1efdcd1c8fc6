pub mod cli;
pub mod config;
pub mod detection;
pub mod utils;

use anyhow::Result;
use cli::args::Args;
use tracing_subscriber::EnvFilter;

pub use config::{ConfigurationError, ConfigurationFileLocator, LocatorOptions};

pub fn run() -> Result<()> {
    let args = Args::parse_args();
    init_logging(args.verbose);

    cli::commands::locate(&args)
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

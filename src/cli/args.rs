use clap::Parser;
use std::path::PathBuf;

use crate::config::LocatorOptions;

/// gvc - locate the GitVersion configuration file
///
/// Looks for an explicit configuration file or one of the conventional
/// names in the working directory and the project root, and refuses to
/// guess when both directories carry one.
#[derive(Parser, Debug)]
#[command(name = "gvc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "CONVENTIONAL NAMES (in priority order):\n    \
    GitVersion.yml\n    \
    GitVersion.yaml\n    \
    .GitVersion.yml\n    \
    .GitVersion.yaml")]
pub struct Args {
    /// Enable verbose output (log every candidate tried)
    #[arg(short, long)]
    pub verbose: bool,

    /// Use specific config file, absolute or relative to the searched directories
    #[arg(short, long, value_name = "PATH", env = "GITVERSION_CONFIG")]
    pub config: Option<String>,

    /// Working directory to search (defaults to the current directory)
    #[arg(short, long = "work-dir", value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Project root to search (defaults to the working directory)
    #[arg(short, long = "project-root", value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    /// Fail if the working directory and project root both have a config file
    #[arg(long)]
    pub verify: bool,
}

impl Args {
    /// Parse arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Try to parse from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Locator options derived from `--config`
    pub fn locator_options(&self) -> LocatorOptions {
        LocatorOptions::from_user_path(self.config.as_deref())
    }
}

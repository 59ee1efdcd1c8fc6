use std::path::PathBuf;
use thiserror::Error;

/// Fatal configuration errors raised while locating the configuration file
///
/// These are user-facing misconfigurations: they name the paths involved and
/// are never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error(
        "Ambiguous configuration file selection from '{}' and '{}'",
        .working.display(),
        .project_root.display()
    )]
    Ambiguous {
        working: PathBuf,
        project_root: PathBuf,
    },

    #[error(
        "The configuration file was not found at '{}' or '{}'",
        .working.display(),
        .project_root.display()
    )]
    NotFound {
        working: PathBuf,
        project_root: PathBuf,
    },

    #[error(
        "The configuration file '{}' is a relative path but no directory was given to resolve it against",
        .path.display()
    )]
    UnanchoredPath { path: PathBuf },
}

impl ConfigurationError {
    /// True for both flavours of "configuration file not found"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::UnanchoredPath { .. })
    }
}

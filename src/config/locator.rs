//! Locate the configuration file governing a working directory
//!
//! Candidates are tried in priority order: the explicit configuration path
//! (when set) and then the conventional names. The first one that exists
//! wins. `verify` checks a working directory against a project root and
//! refuses to continue when both of them carry a configuration file.

use std::path::{Path, PathBuf};

use super::error::ConfigurationError;
use super::names::{is_conventional_name, CONVENTIONAL_FILE_NAMES};
use super::options::{is_blank, LocatorOptions};
use crate::utils::fs::{FileSystem, OsFileSystem};
use crate::utils::paths::{combine, is_rooted, paths_equal};

/// Finds the configuration file for a directory
#[derive(Debug, Clone)]
pub struct ConfigurationFileLocator<F = OsFileSystem> {
    fs: F,
    options: LocatorOptions,
}

impl ConfigurationFileLocator<OsFileSystem> {
    /// Locator over the real file system
    pub fn with_os_fs(options: LocatorOptions) -> Self {
        Self::new(OsFileSystem, options)
    }
}

impl<F: FileSystem> ConfigurationFileLocator<F> {
    pub fn new(fs: F, options: LocatorOptions) -> Self {
        Self { fs, options }
    }

    pub fn options(&self) -> &LocatorOptions {
        &self.options
    }

    /// Resolve the configuration file for `directory`
    ///
    /// Returns `Ok(None)` when no candidate exists. A relative explicit path
    /// with no directory to anchor it is an error.
    pub fn get_configuration_file(
        &self,
        directory: Option<&Path>,
    ) -> Result<Option<PathBuf>, ConfigurationError> {
        let directory = anchor(directory);

        if let Some(explicit) = self.options.configuration_file() {
            if let Some(found) = self.find_explicit(explicit, directory)? {
                return Ok(Some(found));
            }
        }

        Ok(self.find_conventional(directory))
    }

    /// Fail when the configuration choice between two directories is ambiguous
    pub fn verify(
        &self,
        working_directory: Option<&Path>,
        project_root_directory: Option<&Path>,
    ) -> Result<(), ConfigurationError> {
        let explicit = self.options.configuration_file();
        if explicit.is_some_and(is_rooted) {
            return Ok(());
        }

        let working_directory = anchor(working_directory);
        let project_root_directory = anchor(project_root_directory);
        if paths_equal(working_directory, project_root_directory) {
            return Ok(());
        }

        let working_file = self.get_configuration_file(working_directory)?;
        let project_root_file = self.get_configuration_file(project_root_directory)?;

        match (working_file, project_root_file) {
            (Some(working), Some(project_root)) => Err(ConfigurationError::Ambiguous {
                working,
                project_root,
            }),
            (Some(_), None) | (None, Some(_)) => Ok(()),
            (None, None) => match explicit {
                Some(explicit) if !is_conventional_path(explicit) => {
                    Err(ConfigurationError::NotFound {
                        working: combine(working_directory, explicit),
                        project_root: combine(project_root_directory, explicit),
                    })
                }
                _ => Ok(()),
            },
        }
    }

    fn find_explicit(
        &self,
        explicit: &Path,
        directory: Option<&Path>,
    ) -> Result<Option<PathBuf>, ConfigurationError> {
        let candidate = if is_rooted(explicit) {
            explicit.to_path_buf()
        } else {
            match directory {
                Some(dir) => dir.join(explicit),
                None => {
                    tracing::debug!(
                        "configuration file '{}' is relative and no directory was given",
                        explicit.display()
                    );
                    return Err(ConfigurationError::UnanchoredPath {
                        path: explicit.to_path_buf(),
                    });
                }
            }
        };

        tracing::debug!("Trying to find configuration file at '{}'", candidate.display());
        if self.fs.file_exists(&candidate) {
            tracing::info!("Found configuration file at '{}'", candidate.display());
            return Ok(Some(candidate));
        }

        tracing::debug!("No configuration file at '{}'", candidate.display());
        Ok(None)
    }

    fn find_conventional(&self, directory: Option<&Path>) -> Option<PathBuf> {
        let Some(directory) = directory else {
            tracing::debug!("No directory given, skipping conventional configuration names");
            return None;
        };
        if !self.fs.directory_exists(directory) {
            tracing::debug!("Directory '{}' does not exist", directory.display());
            return None;
        }

        let files = self.fs.list_files(directory);
        for name in CONVENTIONAL_FILE_NAMES {
            tracing::debug!(
                "Trying to find configuration file {} at '{}'",
                name,
                directory.display()
            );
            let matching = files.iter().find(|file| {
                file.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.eq_ignore_ascii_case(name))
            });
            if let Some(file) = matching {
                tracing::info!("Found configuration file at '{}'", file.display());
                return Some(file.clone());
            }
        }

        None
    }
}

/// Treat an empty directory argument the same as no directory
fn anchor(directory: Option<&Path>) -> Option<&Path> {
    directory.filter(|d| !is_blank(d))
}

fn is_conventional_path(path: &Path) -> bool {
    path.to_str().is_some_and(is_conventional_name)
}

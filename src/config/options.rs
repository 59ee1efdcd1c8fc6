use std::path::{Path, PathBuf};

use crate::utils::paths::expand_path;

/// Immutable settings handed to the locator at construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatorOptions {
    configuration_file: Option<PathBuf>,
}

impl LocatorOptions {
    /// Options with an explicit configuration path; blank paths count as unset
    pub fn new(configuration_file: Option<PathBuf>) -> Self {
        Self {
            configuration_file: configuration_file.filter(|p| !is_blank(p)),
        }
    }

    /// Build options from a user-supplied path string, expanding `~` and `$VARS`
    pub fn from_user_path(path: Option<&str>) -> Self {
        let expanded = path
            .filter(|p| !p.trim().is_empty())
            .map(expand_path);
        Self::new(expanded)
    }

    /// The explicit configuration path, if one was given
    pub fn configuration_file(&self) -> Option<&Path> {
        self.configuration_file.as_deref()
    }
}

pub(crate) fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_path_is_unset() {
        assert_eq!(LocatorOptions::new(Some(PathBuf::from("   "))).configuration_file(), None);
        assert_eq!(LocatorOptions::new(Some(PathBuf::new())).configuration_file(), None);
        assert_eq!(LocatorOptions::from_user_path(Some("")).configuration_file(), None);
        assert_eq!(LocatorOptions::default().configuration_file(), None);
    }

    #[test]
    fn test_relative_path_kept_as_is() {
        let options = LocatorOptions::from_user_path(Some("custom.yml"));
        assert_eq!(options.configuration_file(), Some(Path::new("custom.yml")));
    }

    #[test]
    fn test_tilde_is_expanded() {
        let home = dirs::home_dir().unwrap();
        let options = LocatorOptions::from_user_path(Some("~/GitVersion.yml"));
        assert_eq!(options.configuration_file(), Some(home.join("GitVersion.yml").as_path()));
    }
}

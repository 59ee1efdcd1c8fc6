use std::path::{Component, Path, PathBuf};

/// Expand a path string, handling ~ for home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }

    PathBuf::from(shellexpand::full(path).unwrap_or_else(|_| path.into()).into_owned())
}

/// Whether a path can be used without a directory to resolve it against
///
/// `C:foo` and `\foo` on Windows count as rooted even though they are not
/// fully absolute.
pub fn is_rooted(path: &Path) -> bool {
    path.has_root() || has_prefix(path)
}

fn has_prefix(path: &Path) -> bool {
    matches!(path.components().next(), Some(Component::Prefix(_)))
}

/// Join a file onto an optional directory
pub fn combine(directory: Option<&Path>, file: &Path) -> PathBuf {
    match directory {
        Some(dir) => dir.join(file),
        None => file.to_path_buf(),
    }
}

/// Lexically normalize a path: drop `.`, fold `..`, ignore trailing separators
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is still `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Make a path absolute against the current directory, then normalize it
pub fn full_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize(&absolute)
}

/// Whether two optional directories denote the same logical path
///
/// Relative paths are resolved against the current directory first, so
/// `.` and the absolute current directory compare equal.
pub fn paths_equal(a: Option<&Path>, b: Option<&Path>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            let (a, b) = (full_path(a), full_path(b));
            if cfg!(windows) {
                a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
            } else {
                a == b
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_dots() {
        assert_eq!(normalize(Path::new("/a/./b/../c/")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(normalize(Path::new("../x")), PathBuf::from("../x"));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
    }

    #[test]
    fn test_paths_equal() {
        assert!(paths_equal(None, None));
        assert!(!paths_equal(Some(Path::new("/a")), None));
        assert!(paths_equal(Some(Path::new("/repo/")), Some(Path::new("/repo"))));
        assert!(paths_equal(
            Some(Path::new("/repo/src/..")),
            Some(Path::new("/repo/./"))
        ));
        assert!(!paths_equal(Some(Path::new("/repo")), Some(Path::new("/repo/src"))));
    }

    #[test]
    fn test_paths_equal_relative_and_absolute() {
        let cwd = std::env::current_dir().unwrap();
        assert!(paths_equal(Some(Path::new(".")), Some(cwd.as_path())));
        assert!(paths_equal(Some(Path::new("src/..")), Some(cwd.as_path())));
        assert!(paths_equal(Some(Path::new("src")), Some(cwd.join("src").as_path())));
        assert!(!paths_equal(Some(Path::new("src")), Some(cwd.as_path())));
    }

    #[test]
    fn test_combine() {
        assert_eq!(
            combine(Some(Path::new("/w")), Path::new("custom.yml")),
            PathBuf::from("/w/custom.yml")
        );
        assert_eq!(combine(None, Path::new("custom.yml")), PathBuf::from("custom.yml"));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_rooted() {
        assert!(is_rooted(Path::new("/etc/GitVersion.yml")));
        assert!(!is_rooted(Path::new("GitVersion.yml")));
        assert!(!is_rooted(Path::new("./conf/custom.yml")));
    }
}

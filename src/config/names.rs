/// Preferred configuration file name
pub const DEFAULT_FILE_NAME: &str = "GitVersion.yml";
/// Alternative extension for the preferred name
pub const DEFAULT_ALTERNATIVE_FILE_NAME: &str = "GitVersion.yaml";
/// Hidden variant of the preferred name
pub const DEFAULT_FILE_NAME_DOTTED: &str = ".GitVersion.yml";
/// Hidden variant of the alternative name
pub const DEFAULT_ALTERNATIVE_FILE_NAME_DOTTED: &str = ".GitVersion.yaml";

/// Conventional configuration file names, in priority order
pub const CONVENTIONAL_FILE_NAMES: [&str; 4] = [
    DEFAULT_FILE_NAME,
    DEFAULT_ALTERNATIVE_FILE_NAME,
    DEFAULT_FILE_NAME_DOTTED,
    DEFAULT_ALTERNATIVE_FILE_NAME_DOTTED,
];

/// Check whether a name is one of the conventional file names (ignoring case)
pub fn is_conventional_name(name: &str) -> bool {
    CONVENTIONAL_FILE_NAMES
        .iter()
        .any(|conventional| conventional.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_order() {
        assert_eq!(
            CONVENTIONAL_FILE_NAMES,
            [
                "GitVersion.yml",
                "GitVersion.yaml",
                ".GitVersion.yml",
                ".GitVersion.yaml"
            ]
        );
    }

    #[test]
    fn test_is_conventional_name_ignores_case() {
        assert!(is_conventional_name("gitversion.YML"));
        assert!(is_conventional_name(".GITVERSION.yaml"));
        assert!(!is_conventional_name("custom.yml"));
        assert!(!is_conventional_name("sub/GitVersion.yml"));
    }
}

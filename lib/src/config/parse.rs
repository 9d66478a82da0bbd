//! Conversions from raw configuration strings to richer types.

use std::path::PathBuf;

/// Parse a file path, expanding a leading `~` to the user's home directory.
pub fn file_path(value: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(value).into_owned())
}

#[cfg(test)]
mod tests {
    use super::file_path;

    #[test]
    fn plain_path_is_unchanged() {
        assert_eq!(file_path("./db/test.db"),
                   std::path::PathBuf::from("./db/test.db"));
    }

    #[test]
    fn tilde_is_expanded() {
        let p = file_path("~/test.db");
        assert!(!p.to_string_lossy().starts_with('~'));
        assert!(p.to_string_lossy().ends_with("test.db"));
    }
}

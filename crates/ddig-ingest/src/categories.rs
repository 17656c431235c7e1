//! Therapeutic category map
//!
//! DDInter distributes one interaction table per first-level ATC
//! category, encoded as a single-letter suffix in the file name
//! (`ddinter_downloads_code_A.csv`). The map from suffix code to class
//! name is fixed configuration data; an unknown code is rejected upstream
//! rather than admitting an edge with an undefined class.

use std::path::Path;

/// Resolve a single-letter category code to its therapeutic class name.
pub fn class_for_code(code: &str) -> Option<&'static str> {
    match code {
        "A" => Some("Alimentary tract and metabolism"),
        "B" => Some("Blood and blood forming organs"),
        "D" => Some("Dermatologicals"),
        "H" => Some("Systemic hormonal preparations"),
        "L" => Some("Antineoplastic and immunomodulating agents"),
        "P" => Some("Antiparasitic products"),
        "R" => Some("Respiratory system"),
        "V" => Some("Various"),
        _ => None,
    }
}

/// Extract the category code from a file path: the token between the last
/// underscore of the file name and the extension. Returns `None` only when
/// the path has no file name; a name without an underscore yields its
/// leading token, which then fails the map lookup.
pub fn code_from_path(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let tail = name.rsplit('_').next()?;
    tail.split('.').next()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_all_known_codes_resolve() {
        for code in ["A", "B", "D", "H", "L", "P", "R", "V"] {
            assert!(class_for_code(code).is_some(), "code {code} should resolve");
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(class_for_code("Z").is_none());
        assert!(class_for_code("").is_none());
        assert!(class_for_code("AB").is_none());
    }

    #[test]
    fn test_code_from_download_file_name() {
        let path = PathBuf::from("/tmp/cache/ddinter_downloads_code_A.csv");
        assert_eq!(code_from_path(&path), Some("A"));
    }

    #[test]
    fn test_code_ignores_directory_underscores() {
        let path = PathBuf::from("/data/dd_inter/downloads_V.csv");
        assert_eq!(code_from_path(&path), Some("V"));
    }

    #[test]
    fn test_name_without_underscore_yields_unmapped_token() {
        let path = PathBuf::from("interactions.csv");
        let code = code_from_path(&path).unwrap();
        assert_eq!(code, "interactions");
        assert!(class_for_code(code).is_none());
    }
}

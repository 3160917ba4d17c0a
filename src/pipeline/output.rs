//! Output path handling for the report.

use crate::reports::ReportMetadata;
use std::path::{Path, PathBuf};

/// Resolve where the report should be written.
///
/// - `None`: derived filename in the current directory.
/// - A path that names an existing directory, or ends in a path
///   separator: derived filename inside that directory.
/// - Anything else: used as the file path verbatim.
///
/// The derived filename embeds both side names and revisions (see
/// [`ReportMetadata::derived_filename`]) so repeated comparisons do not
/// overwrite each other.
pub fn derive_output_path(output: Option<&Path>, meta: &ReportMetadata) -> PathBuf {
    match output {
        None => PathBuf::from(meta.derived_filename()),
        Some(path) => {
            let text = path.as_os_str().to_string_lossy();
            let wants_dir = text.ends_with(|c| c == '/' || c == '\\') || path.is_dir();
            if wants_dir {
                path.join(meta.derived_filename())
            } else {
                path.to_path_buf()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> ReportMetadata {
        ReportMetadata {
            name1: "old".to_string(),
            name2: "new".to_string(),
            hash1: "h1".to_string(),
            hash2: "h2".to_string(),
            excludes: vec![],
        }
    }

    #[test]
    fn test_no_output_derives_in_current_dir() {
        let path = derive_output_path(None, &meta());
        assert_eq!(path, PathBuf::from("diff_old-h1_new-h2.html"));
    }

    #[test]
    fn test_explicit_file_path_used_verbatim() {
        let path = derive_output_path(Some(Path::new("out/report.html")), &meta());
        assert_eq!(path, PathBuf::from("out/report.html"));
    }

    #[test]
    fn test_trailing_separator_means_directory() {
        let path = derive_output_path(Some(Path::new("reports/")), &meta());
        assert_eq!(path, PathBuf::from("reports/diff_old-h1_new-h2.html"));
    }

    #[test]
    fn test_existing_directory_receives_derived_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = derive_output_path(Some(dir.path()), &meta());
        assert_eq!(path, dir.path().join("diff_old-h1_new-h2.html"));
    }
}

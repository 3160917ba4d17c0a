//! Per-file unified diff computation.
//!
//! A file is read from both tree roots as a permissively decoded line
//! snapshot; an absent file is an empty snapshot, so added and deleted
//! files fall out of the same diff-against-empty code path. The line diff
//! itself comes from the `similar` crate; this module only frames it with
//! `a/<path>` / `b/<path>` markers and a synthetic `diff --git` header so
//! every per-file section stays self-describing after concatenation.

use crate::error::{DirDiffError, Result};
use similar::TextDiff;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Context lines around each hunk, matching conventional unified output.
const CONTEXT_RADIUS: usize = 3;

/// Read a file's content for diffing.
///
/// Decoding is lossy: invalid UTF-8 is replaced, never fatal. A missing
/// file yields empty content. A path that is a directory on this side also
/// yields empty content, so a file/directory type conflict renders as a
/// pure addition or removal of the file side. Any other read error, such
/// as permission denied, is surfaced, it must not masquerade as a
/// deleted file.
pub fn read_snapshot(path: &Path) -> Result<String> {
    match fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(_) if path.is_dir() => Ok(String::new()),
        Err(source) => Err(DirDiffError::Io {
            path: path.to_path_buf(),
            message: "failed to read file for diff".to_string(),
            source,
        }),
    }
}

/// Unified diff for one relative path across two tree roots.
///
/// Returns an empty string when both snapshots are line-identical; the
/// orchestrator uses that as the skip signal. Non-empty output starts with
/// a synthetic `diff --git a/<path> b/<path>` line, lines are joined with
/// single newlines and carry no trailing newline.
pub fn diff_file(rel_path: &str, root1: &Path, root2: &Path) -> Result<String> {
    let old = read_snapshot(&root1.join(rel_path))?;
    let new = read_snapshot(&root2.join(rel_path))?;
    if old == new {
        return Ok(String::new());
    }

    let diff = TextDiff::from_lines(old.as_str(), new.as_str());
    let body = diff
        .unified_diff()
        .context_radius(CONTEXT_RADIUS)
        .missing_newline_hint(false)
        .header(&format!("a/{rel_path}"), &format!("b/{rel_path}"))
        .to_string();
    if body.is_empty() {
        // Content differed only in ways the line diff does not see
        // (e.g. a trailing newline after lossy decoding).
        return Ok(String::new());
    }

    let mut out = format!("diff --git a/{rel_path} b/{rel_path}\n");
    out.push_str(body.trim_end_matches('\n'));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tree(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        dir
    }

    #[test]
    fn test_identical_files_yield_empty_diff() {
        let a = tree(&[("f.txt", "same\ncontent\n")]);
        let b = tree(&[("f.txt", "same\ncontent\n")]);
        assert_eq!(diff_file("f.txt", a.path(), b.path()).unwrap(), "");
    }

    #[test]
    fn test_single_line_change_with_context() {
        let a = tree(&[("a.txt", "1\n2\n3\n")]);
        let b = tree(&[("a.txt", "1\nX\n3\n")]);
        let diff = diff_file("a.txt", a.path(), b.path()).unwrap();

        let lines: Vec<&str> = diff.lines().collect();
        assert_eq!(lines[0], "diff --git a/a.txt b/a.txt");
        assert_eq!(lines[1], "--- a/a.txt");
        assert_eq!(lines[2], "+++ b/a.txt");
        assert!(lines[3].starts_with("@@"));
        assert_eq!(&lines[4..], &[" 1", "-2", "+X", " 3"]);
    }

    #[test]
    fn test_left_only_file_is_pure_deletion() {
        let a = tree(&[("gone.txt", "one\ntwo\n")]);
        let b = tree(&[]);
        let diff = diff_file("gone.txt", a.path(), b.path()).unwrap();

        assert!(diff.starts_with("diff --git a/gone.txt b/gone.txt"));
        assert!(diff.contains("-one"));
        assert!(diff.contains("-two"));
        assert!(!diff.lines().any(|l| l.starts_with('+') && !l.starts_with("+++")));
    }

    #[test]
    fn test_right_only_file_is_pure_addition() {
        let a = tree(&[]);
        let b = tree(&[("new.txt", "hello\n")]);
        let diff = diff_file("new.txt", a.path(), b.path()).unwrap();

        assert!(diff.contains("+hello"));
        assert!(!diff.lines().any(|l| l.starts_with('-') && !l.starts_with("---")));
    }

    #[test]
    fn test_no_trailing_newline() {
        let a = tree(&[("f.txt", "old\n")]);
        let b = tree(&[("f.txt", "new\n")]);
        let diff = diff_file("f.txt", a.path(), b.path()).unwrap();
        assert!(!diff.ends_with('\n'));
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let a = tree(&[]);
        fs::write(a.path().join("bin.dat"), [0x66, 0xff, 0x6f, 0x6f, 0x0a]).unwrap();
        let b = tree(&[("bin.dat", "foo\n")]);
        let diff = diff_file("bin.dat", a.path(), b.path()).unwrap();
        assert!(diff.contains('\u{FFFD}'));
    }

    #[test]
    fn test_directory_side_reads_as_empty() {
        let a = tree(&[("thing", "i am a file\n")]);
        let b = tree(&[("thing/inner.txt", "nested\n")]);
        // "thing" is a file on the left, a directory on the right.
        let diff = diff_file("thing", a.path(), b.path()).unwrap();
        assert!(diff.contains("-i am a file"));
    }

    #[test]
    fn test_missing_snapshot_is_empty() {
        let missing = PathBuf::from("/definitely/not/a/real/path.txt");
        assert_eq!(read_snapshot(&missing).unwrap(), "");
    }
}

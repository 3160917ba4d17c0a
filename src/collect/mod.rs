//! Recursive file discovery with exclusion pruning.
//!
//! Walks a tree root and returns the set of root-relative file paths that
//! survive the exclusion filter. Excluded directories are pruned before
//! descent, so large ignored subtrees (dependency caches, build output)
//! are never walked.

use crate::error::{DirDiffError, Result};
use crate::filter::PathFilter;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Root-relative path with posix separators, or `None` when `path` does
/// not live under `root`.
fn rel_posix(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Collect all non-excluded files under `root` as relative paths.
///
/// A missing root yields an empty set: comparing against a tree that does
/// not exist is a legitimate "everything added/removed" scenario, decided
/// by the caller. Traversal errors other than a missing root (for example
/// permission denied on a subdirectory) are surfaced.
pub fn collect(root: &Path, filter: &PathFilter) -> Result<BTreeSet<String>> {
    let mut files = BTreeSet::new();
    if !root.is_dir() {
        tracing::debug!("Tree root {:?} does not exist, treating as empty", root);
        return Ok(files);
    }

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        match rel_posix(root, entry.path()) {
            // The root itself has an empty relative path and is never filtered.
            Some(rel) if !rel.is_empty() => !filter.is_excluded(&rel),
            _ => true,
        }
    });

    for entry in walker {
        let entry = entry.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            DirDiffError::Io {
                path,
                message: "directory traversal failed".to_string(),
                source: err.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(rel) = rel_posix(root, entry.path()) {
            files.insert(rel);
        }
    }

    Ok(files)
}

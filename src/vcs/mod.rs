//! Best-effort repository revision lookup.

use std::path::Path;
use std::process::Command;

/// Short revision identifier of the repository containing `root`.
///
/// Runs `git rev-parse --short=8 HEAD` in the tree; any failure (no git,
/// not a repository, detached worktree state) yields the `fallback` token.
/// Never fatal: the revision is report metadata, not an input to the diff.
pub fn short_rev(root: &Path, fallback: &str) -> String {
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(["rev-parse", "--short=8", "HEAD"])
        .output();

    match output {
        Ok(out) if out.status.success() => {
            let rev = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if rev.is_empty() {
                tracing::debug!("git returned an empty revision for {:?}", root);
                fallback.to_string()
            } else {
                rev
            }
        }
        _ => {
            tracing::debug!("No revision for {:?}, using fallback", root);
            fallback.to_string()
        }
    }
}

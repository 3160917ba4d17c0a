//! CLI command handler.
//!
//! Testable entry point invoked by main.rs: takes a fully built
//! [`DiffConfig`], runs the pipeline and writes the report to disk.

use crate::config::DiffConfig;
use crate::pipeline::{build_report, derive_output_path};
use crate::reports::{ReportMetadata, TemplateAssets};
use crate::vcs;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Display label for a tree root: its final path component.
///
/// The root is canonicalized first so `.` and trailing separators still
/// produce a real directory name. A root with no file name (e.g. `/`) or
/// one that does not exist falls back to its lossy display form.
fn tree_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.to_string_lossy().into_owned())
}

/// Run the diff command, returning the path the report was written to.
///
/// Configuration errors (bad patterns, unreadable assets) fail before any
/// traversal; a missing tree root does not fail and renders as an
/// all-added or all-removed report.
pub fn run_diff(config: &DiffConfig) -> Result<PathBuf> {
    // Assets first: invalid configuration must never produce a partial report.
    let assets = TemplateAssets::load(&config.assets)?;

    let meta = ReportMetadata {
        name1: tree_name(&config.paths.left),
        name2: tree_name(&config.paths.right),
        hash1: vcs::short_rev(&config.paths.left, &config.behavior.rev_fallback),
        hash2: vcs::short_rev(&config.paths.right, &config.behavior.rev_fallback),
        excludes: config.excludes.clone(),
    };

    let html = build_report(config, &meta, &assets)?;

    let out_path = derive_output_path(config.output.path.as_deref(), &meta);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {parent:?}"))?;
        }
    }
    fs::write(&out_path, html)
        .with_context(|| format!("Failed to write report to {out_path:?}"))?;

    if !config.behavior.quiet {
        tracing::info!("Generated {}", out_path.display());
    }
    Ok(out_path)
}

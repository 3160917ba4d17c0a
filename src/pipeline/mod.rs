//! Pipeline orchestration: collect, diff, render.
//!
//! Composes the leaf components into a full report run. The union of
//! relative paths present in either tree is processed in lexicographic
//! order, which makes the report deterministic and diffable across
//! repeated runs regardless of filesystem iteration order.

mod output;

pub use output::derive_output_path;

use crate::collect::collect;
use crate::config::DiffConfig;
use crate::diff::diff_file;
use crate::error::Result;
use crate::filter::PathFilter;
use crate::reports::{diff_to_html, render_report, ReportMetadata, TemplateAssets};

/// Aggregate diff text for the whole comparison.
///
/// Collects both trees, diffs every path in the sorted union, omits the
/// paths whose diff is empty and joins the surviving per-file sections
/// with a single newline. Empty output means the trees are identical
/// (under the configured exclusions).
pub fn build_diff_text(config: &DiffConfig, filter: &PathFilter) -> Result<String> {
    let left = collect(&config.paths.left, filter)?;
    let right = collect(&config.paths.right, filter)?;
    tracing::debug!(
        "Collected {} files in {:?}, {} in {:?}",
        left.len(),
        config.paths.left,
        right.len(),
        config.paths.right
    );

    let union: Vec<&String> = left.union(&right).collect();
    let total = union.len();
    let mut sections = Vec::new();
    for rel in union {
        let text = diff_file(rel, &config.paths.left, &config.paths.right)?;
        if !text.is_empty() {
            sections.push(text);
        }
    }
    tracing::info!("{} of {} files differ", sections.len(), total);

    Ok(sections.join("\n"))
}

/// Run the full pipeline and return the final HTML document.
///
/// The exclusion filter is compiled up front so a malformed pattern fails
/// before any traversal starts.
pub fn build_report(
    config: &DiffConfig,
    meta: &ReportMetadata,
    assets: &TemplateAssets,
) -> Result<String> {
    let filter = PathFilter::compile(&config.excludes)?;
    let diff_text = build_diff_text(config, &filter)?;
    let fragment = diff_to_html(&diff_text);
    render_report(assets, meta, &fragment)
}

//! Configuration types for dirdiff-html.
//!
//! All run state is carried in an explicit [`DiffConfig`] passed into the
//! pipeline; there is no ambient or process-wide configuration, which
//! keeps runs reproducible and testable in isolation.

use std::path::PathBuf;

/// Complete configuration for one diff run.
#[derive(Debug, Clone, Default)]
pub struct DiffConfig {
    /// The two tree roots being compared
    pub paths: TreePaths,
    /// Exclusion pattern source strings (regex, searched in relative paths)
    pub excludes: Vec<String>,
    /// Output location
    pub output: OutputConfig,
    /// Template/stylesheet/script overrides
    pub assets: AssetConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// The two roots of a comparison.
#[derive(Debug, Clone, Default)]
pub struct TreePaths {
    /// Left ("a/") side
    pub left: PathBuf,
    /// Right ("b/") side
    pub right: PathBuf,
}

/// Where the report is written.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Output file, or a directory to receive the derived filename.
    /// `None` derives the filename in the current directory.
    pub path: Option<PathBuf>,
}

/// Optional overrides for the embedded template assets.
#[derive(Debug, Clone, Default)]
pub struct AssetConfig {
    /// Handlebars template path
    pub template: Option<PathBuf>,
    /// Stylesheet path, inlined into the report
    pub css: Option<PathBuf>,
    /// Script path, inlined into the report
    pub js: Option<PathBuf>,
}

/// Behavior flags.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Token substituted when a tree's revision cannot be determined
    pub rev_fallback: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            rev_fallback: "fallback".to_string(),
        }
    }
}

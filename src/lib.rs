//! **Directory tree comparison with a self-contained HTML report.**
//!
//! `dirdiff-html` walks two directory trees, computes a unified line diff
//! for every file that changed, was added or was removed, and renders the
//! result into a single HTML file that works offline: the stylesheet and
//! the collapse script are inlined, no external URLs are referenced.
//!
//! ## Key Features
//!
//! - **Exclusion patterns**: regex patterns prune whole subtrees before
//!   descent and skip individual files, so large ignored trees (dependency
//!   caches, build output) are never walked.
//! - **Uniform add/remove handling**: an absent file is an empty snapshot,
//!   so added and deleted files are ordinary diffs against empty content.
//! - **Safe markup**: every diff line is HTML-escaped after classification,
//!   raw file content never reaches the output.
//! - **Deterministic output**: paths are processed in sorted order and the
//!   report carries no timestamps, so unchanged trees render byte-identical
//!   reports across runs.
//!
//! ## Core Modules
//!
//! - [`filter`]: compiled exclusion patterns ([`filter::PathFilter`]).
//! - [`collect`]: recursive file discovery with exclusion pruning.
//! - [`diff`]: per-file unified diff built on the `similar` crate.
//! - [`reports`]: diff-to-HTML conversion and strict-mode template
//!   interpolation.
//! - [`pipeline`]: orchestration of the above into one report run.
//!
//! ## Example
//!
//! ```no_run
//! use dirdiff_html::config::{DiffConfig, TreePaths};
//! use dirdiff_html::pipeline::build_report;
//! use dirdiff_html::reports::{ReportMetadata, TemplateAssets};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DiffConfig {
//!         paths: TreePaths {
//!             left: "v1".into(),
//!             right: "v2".into(),
//!         },
//!         excludes: vec![r"^target/".to_string()],
//!         ..DiffConfig::default()
//!     };
//!     let meta = ReportMetadata {
//!         name1: "v1".into(),
//!         name2: "v2".into(),
//!         hash1: "abc12345".into(),
//!         hash2: "def67890".into(),
//!         excludes: config.excludes.clone(),
//!     };
//!     let html = build_report(&config, &meta, &TemplateAssets::embedded())?;
//!     std::fs::write("diff.html", html)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod collect;
pub mod config;
pub mod diff;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod reports;
pub mod vcs;

pub use error::{DirDiffError, Result};
pub use filter::PathFilter;
pub use pipeline::build_report;
pub use reports::{ReportMetadata, TemplateAssets};

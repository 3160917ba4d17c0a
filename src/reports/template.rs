//! Template interpolation for the final report.
//!
//! The visual chrome lives entirely in the template and its stylesheet
//! and script assets; this module only fills the named slots. Rendering
//! runs handlebars in strict mode, so a template that references a slot
//! the renderer does not supply fails with the slot name instead of
//! silently rendering a hole.

use super::types::ReportMetadata;
use crate::config::AssetConfig;
use crate::error::{DirDiffError, Result};
use handlebars::Handlebars;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Default template and assets, compiled into the binary so the tool works
/// with no files besides the two trees.
const DEFAULT_TEMPLATE: &str = include_str!("../../assets/report.html.hbs");
const DEFAULT_CSS: &str = include_str!("../../assets/style.css");
const DEFAULT_JS: &str = include_str!("../../assets/collapse.js");

/// The template and its stylesheet/script assets, as opaque strings.
#[derive(Debug, Clone)]
pub struct TemplateAssets {
    pub template: String,
    pub css: String,
    pub js: String,
}

impl TemplateAssets {
    /// The embedded defaults.
    pub fn embedded() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            css: DEFAULT_CSS.to_string(),
            js: DEFAULT_JS.to_string(),
        }
    }

    /// Load assets, taking overrides from the configuration where present.
    ///
    /// An unreadable override is a configuration error and fails before
    /// any traversal starts.
    pub fn load(config: &AssetConfig) -> Result<Self> {
        let mut assets = Self::embedded();
        if let Some(path) = &config.template {
            assets.template = read_asset(path)?;
        }
        if let Some(path) = &config.css {
            assets.css = read_asset(path)?;
        }
        if let Some(path) = &config.js {
            assets.js = read_asset(path)?;
        }
        Ok(assets)
    }
}

fn read_asset(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| DirDiffError::Asset {
        path: path.to_path_buf(),
        source,
    })
}

/// Substitute the diff fragment and side metadata into the template.
///
/// Slot contract: `name1`, `name2`, `hash1`, `hash2`, `css`, `js`,
/// `diff_html`, `excludes` (list of pattern sources), plus `version` with
/// the generating tool's version. `css`, `js` and `diff_html` are inserted
/// raw (`{{{...}}}` in the template); everything else goes through
/// handlebars' own escaping.
pub fn render_report(
    assets: &TemplateAssets,
    meta: &ReportMetadata,
    diff_html: &str,
) -> Result<String> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);

    let data = json!({
        "name1": meta.name1,
        "name2": meta.name2,
        "hash1": meta.hash1,
        "hash2": meta.hash2,
        "css": assets.css,
        "js": assets.js,
        "diff_html": diff_html,
        "excludes": meta.excludes,
        "version": env!("CARGO_PKG_VERSION"),
    });

    registry
        .render_template(&assets.template, &data)
        .map_err(DirDiffError::from)
}

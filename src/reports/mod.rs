//! Report rendering for directory diff results.
//!
//! Two stages: [`diff_to_html`] turns aggregate diff text into a colored,
//! escaped HTML fragment, and [`render_report`] interpolates that fragment
//! together with side metadata and the stylesheet/script assets into the
//! template's named slots.
//!
//! # Security
//!
//! The `escape` module provides the escaping used for diff content. File
//! content from the compared trees is untrusted and never reaches the
//! output unescaped.

pub mod escape;
mod html;
mod template;
mod types;

pub use html::diff_to_html;
pub use template::{render_report, TemplateAssets};
pub use types::ReportMetadata;

//! Exclusion pattern filtering.
//!
//! Patterns are regular expressions searched anywhere in a root-relative
//! path (posix separators, no leading `./`). The same filter is applied to
//! directories, pruning whole subtrees, and to individual files.

use crate::error::{DirDiffError, Result};
use regex::Regex;

/// A compiled set of exclusion patterns.
///
/// Compilation happens once, up front; a malformed pattern is a
/// configuration error and never surfaces mid-traversal.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    patterns: Vec<Regex>,
}

impl PathFilter {
    /// Compile a set of exclusion patterns.
    pub fn compile(patterns: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|source| DirDiffError::InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// True when any pattern matches anywhere in the relative path.
    ///
    /// This is a regex *search*, not a full match, mirroring how ignore
    /// patterns are conventionally applied.
    pub fn is_excluded(&self, rel_path: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(rel_path))
    }

    /// Source strings of the compiled patterns, for report metadata.
    pub fn sources(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.as_str().to_string()).collect()
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when no patterns were configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

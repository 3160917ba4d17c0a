//! Report type definitions.

use serde::Serialize;

/// Side metadata interpolated into the report template.
///
/// `name1`/`name2` are the labels of the compared trees, `hash1`/`hash2`
/// their best-effort revision identifiers (or the configured fallback
/// token). `excludes` carries the raw exclusion pattern source strings for
/// display in the report footer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportMetadata {
    pub name1: String,
    pub name2: String,
    pub hash1: String,
    pub hash2: String,
    pub excludes: Vec<String>,
}

impl ReportMetadata {
    /// Derived output filename embedding both side names and revisions,
    /// so repeated comparisons do not overwrite each other.
    pub fn derived_filename(&self) -> String {
        format!(
            "diff_{}-{}_{}-{}.html",
            self.name1, self.hash1, self.name2, self.hash2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_filename_embeds_names_and_revisions() {
        let meta = ReportMetadata {
            name1: "old".to_string(),
            name2: "new".to_string(),
            hash1: "abc12345".to_string(),
            hash2: "def67890".to_string(),
            excludes: vec![],
        };
        assert_eq!(meta.derived_filename(), "diff_old-abc12345_new-def67890.html");
    }
}

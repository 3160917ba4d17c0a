//! Diff text to HTML fragment conversion.
//!
//! Each diff line is classified by a prefix test on the raw line, then
//! HTML-escaped, then wrapped in a coloring span. The order matters:
//! escaping must never alter the leading characters the classification
//! looks at. Lines are joined with an explicit `<br/>` so the fragment
//! renders one visual line per diff line regardless of surrounding markup.

use super::escape::escape_html;

/// How a single diff line should be colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClass {
    /// Added line (`+` prefix, but not the `+++` file marker)
    Addition,
    /// Removed line (`-` prefix, but not the `---` file marker)
    Deletion,
    /// Synthetic per-file `diff --git` header
    FileHeader,
    /// Context, hunk headers and file markers
    Plain,
}

/// Classify one raw, unescaped diff line.
fn classify(line: &str) -> LineClass {
    if line.starts_with("diff --git") {
        LineClass::FileHeader
    } else if line.starts_with('+') && !line.starts_with("+++") {
        LineClass::Addition
    } else if line.starts_with('-') && !line.starts_with("---") {
        LineClass::Deletion
    } else {
        LineClass::Plain
    }
}

/// Convert aggregate diff text into a colored HTML fragment.
///
/// Coloring is carried by CSS classes (`added`, `removed`, `file-header`)
/// defined by the report stylesheet; the fragment hard-codes no colors.
pub fn diff_to_html(diff_text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    for line in diff_text.lines() {
        let class = classify(line);
        let esc = escape_html(line);
        let rendered = match class {
            LineClass::Addition => format!("<span class=\"added\">{esc}</span>"),
            LineClass::Deletion => format!("<span class=\"removed\">{esc}</span>"),
            LineClass::FileHeader => format!("<span class=\"file-header\">{esc}</span>"),
            LineClass::Plain => esc,
        };
        out.push(rendered);
    }
    out.join("<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_additions_and_deletions() {
        assert_eq!(classify("+new line"), LineClass::Addition);
        assert_eq!(classify("-old line"), LineClass::Deletion);
        assert_eq!(classify(" context"), LineClass::Plain);
    }

    #[test]
    fn test_file_markers_are_not_changes() {
        assert_eq!(classify("+++ b/a.txt"), LineClass::Plain);
        assert_eq!(classify("--- a/a.txt"), LineClass::Plain);
        assert_eq!(classify("diff --git a/a.txt b/a.txt"), LineClass::FileHeader);
    }

    #[test]
    fn test_mid_line_markers_ignored() {
        // Only the leading character matters for classification.
        assert_eq!(classify(" x + y - z"), LineClass::Plain);
        assert_eq!(classify("@@ -1,3 +1,3 @@"), LineClass::Plain);
    }

    #[test]
    fn test_classify_before_escape_ordering() {
        // An addition whose content starts with '&' must stay an addition,
        // even though escaping turns '&' into '&amp;'.
        let html = diff_to_html("+&done");
        assert_eq!(html, "<span class=\"added\">+&amp;done</span>");
    }

    #[test]
    fn test_content_is_escaped() {
        let html = diff_to_html("+<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_lines_joined_with_br() {
        let html = diff_to_html(" a\n b");
        assert_eq!(html, " a<br/> b");
    }

    #[test]
    fn test_empty_input_renders_empty() {
        assert_eq!(diff_to_html(""), "");
    }
}

//! Line classification
//!
//! Decides how a line relates to an in-progress comment and extracts its
//! indentation. Both are pure functions of the line text; nothing is
//! remembered between calls.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// How the line above a freshly opened line relates to a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContinuationKind {
    /// `/*` or `/**` opening a block comment
    BlockOpen,
    /// `*` gutter inside a block comment
    BlockMiddle,
    /// `//` line comment
    Line,
    /// Anything else
    None,
}

impl ContinuationKind {
    /// Whether a newline after this kind of line should get a prefix
    pub fn continues(self) -> bool {
        !matches!(self, ContinuationKind::None)
    }
}

impl std::fmt::Display for ContinuationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContinuationKind::BlockOpen => "BLOCK_OPEN",
            ContinuationKind::BlockMiddle => "BLOCK_MIDDLE",
            ContinuationKind::Line => "LINE",
            ContinuationKind::None => "NONE",
        };
        f.write_str(name)
    }
}

/// Ordered rule table, first match wins. Block rules precede the line rule.
static CONTINUATION_RULES: Lazy<Vec<(Regex, ContinuationKind)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"^\s*/\*[^/]").unwrap(),
            ContinuationKind::BlockOpen,
        ),
        (
            Regex::new(r"^\s*\*[^/]").unwrap(),
            ContinuationKind::BlockMiddle,
        ),
        (Regex::new(r"^\s*//").unwrap(), ContinuationKind::Line),
    ]
});

/// Classify the line preceding a new line
pub fn classify_continuation(previous_line: &str) -> ContinuationKind {
    CONTINUATION_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(previous_line))
        .map(|(_, kind)| *kind)
        .unwrap_or(ContinuationKind::None)
}

/// Leading whitespace of `line`, or the empty string
pub fn leading_whitespace(line: &str) -> &str {
    let end = line
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len());
    &line[..end]
}

/// True when the line holds nothing but whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Indentation for a comment written above `next_line`.
///
/// Prefers the next line, then the anchor line; blank lines contribute none.
pub fn comment_indentation<'a>(anchor_line: &'a str, next_line: &'a str) -> &'a str {
    if !is_blank(next_line) {
        leading_whitespace(next_line)
    } else if !is_blank(anchor_line) {
        leading_whitespace(anchor_line)
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_open_lines() {
        for line in ["/**", "  /** doc", "\t/* plain", "/*x"] {
            assert_eq!(classify_continuation(line), ContinuationKind::BlockOpen, "{line:?}");
        }
    }

    #[test]
    fn test_block_middle_lines() {
        for line in [" * text", "   * some comment text", "\t*x", "* "] {
            assert_eq!(classify_continuation(line), ContinuationKind::BlockMiddle, "{line:?}");
        }
    }

    #[test]
    fn test_line_comment_lines() {
        for line in ["//", "// note", "    // indented", "/// doc"] {
            assert_eq!(classify_continuation(line), ContinuationKind::Line, "{line:?}");
        }
    }

    #[test]
    fn test_non_comment_lines() {
        for line in ["", "   ", "const x = 1;", " */", "*/", "/*/", "a // trailing", "/*", " *"] {
            assert_eq!(classify_continuation(line), ContinuationKind::None, "{line:?}");
        }
    }

    #[test]
    fn test_block_rules_win_over_line_rule() {
        assert_eq!(classify_continuation("/** // x"), ContinuationKind::BlockOpen);
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace("    return x;"), "    ");
        assert_eq!(leading_whitespace("\t\tfoo"), "\t\t");
        assert_eq!(leading_whitespace("foo"), "");
        assert_eq!(leading_whitespace("   "), "   ");
        assert_eq!(leading_whitespace(""), "");
    }

    #[test]
    fn test_comment_indentation_prefers_next_line() {
        assert_eq!(comment_indentation("", "    return x;"), "    ");
        assert_eq!(comment_indentation("  foo();", "      bar();"), "      ");
        assert_eq!(comment_indentation("  foo();", "   "), "  ");
        assert_eq!(comment_indentation("   ", "  "), "");
    }
}

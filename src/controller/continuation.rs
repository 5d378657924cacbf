//! Comment continuation on newline

use crate::comment::{classify_continuation, ContinuationKind};
use crate::style::DocStyle;
use crate::surface::TextSurface;

/// Continue a comment onto the line the host just opened.
///
/// Classifies the line above the cursor and inserts the matching prefix at the
/// cursor. Returns the classification; nothing is inserted for `None`.
pub fn continue_comment<S: TextSurface + ?Sized>(
    surface: &mut S,
    style: &DocStyle,
) -> ContinuationKind {
    let row = surface.cursor_position().row;
    let Some(previous_row) = row.checked_sub(1) else {
        return ContinuationKind::None;
    };

    let previous_line = surface.line_text_or_empty(previous_row);
    let kind = classify_continuation(&previous_line);
    let prefix = match kind {
        ContinuationKind::BlockOpen | ContinuationKind::BlockMiddle => &style.block_continuation,
        ContinuationKind::Line => &style.line_continuation,
        ContinuationKind::None => return kind,
    };

    log::debug!("continuing {kind} comment from row {previous_row} with {prefix:?}");
    surface.insert_text(prefix);
    kind
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{LineBuffer, Point};

    fn newline_at(text: &str, row: usize, column: usize) -> (LineBuffer, ContinuationKind) {
        let mut buf = LineBuffer::from_text(text)
            .with_cursor(Point::new(row, column))
            .unwrap();
        buf.insert_newline();
        let kind = continue_comment(&mut buf, &DocStyle::default());
        (buf, kind)
    }

    #[test]
    fn test_block_gutter_after_middle_line() {
        let (buf, kind) = newline_at("   * some comment text", 0, 22);
        assert_eq!(kind, ContinuationKind::BlockMiddle);
        assert_eq!(buf.lines()[1], "   * ");
        assert_eq!(buf.cursor_position(), Point::new(1, 5));
    }

    #[test]
    fn test_block_gutter_after_opener() {
        let (buf, kind) = newline_at("/**", 0, 3);
        // `/**` alone has a character after `/*`
        assert_eq!(kind, ContinuationKind::BlockOpen);
        assert_eq!(buf.lines()[1], " * ");

        let (buf, _) = newline_at("  /** Adds", 0, 10);
        assert_eq!(buf.lines()[1], "   * ");
    }

    #[test]
    fn test_line_comment_prefix() {
        let (buf, kind) = newline_at("    // note", 0, 11);
        assert_eq!(kind, ContinuationKind::Line);
        assert_eq!(buf.lines()[1], "    // ");
    }

    #[test]
    fn test_code_and_closer_get_nothing() {
        for text in ["let a = 1;", " */", ""] {
            let column = text.chars().count();
            let (buf, kind) = newline_at(text, 0, column);
            assert_eq!(kind, ContinuationKind::None, "{text:?}");
            assert!(buf.lines()[1].trim().is_empty());
        }
    }

    #[test]
    fn test_first_row_has_no_previous_line() {
        let mut buf = LineBuffer::from_text("// x");
        assert_eq!(
            continue_comment(&mut buf, &DocStyle::default()),
            ContinuationKind::None
        );
        assert_eq!(buf.text(), "// x");
    }
}

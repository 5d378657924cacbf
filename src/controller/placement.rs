//! Comment placement
//!
//! Reads the line under the cursor and the one below it, writes the
//! synthesized comment at the right indentation and leaves the cursor where
//! the user will type next.

use crate::comment::{comment_indentation, is_blank, Comment, CommentSynthesizer, CommentVariant};
use crate::surface::{Point, TextSurface};
use serde::Serialize;

/// Where a comment was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentPlacement {
    pub variant: CommentVariant,
    /// Row of the opening delimiter
    pub first_row: usize,
    pub line_count: usize,
    pub indentation: String,
    /// Whether a blank line was opened below a non-blank anchor first
    pub opened_line: bool,
}

/// Full text of the cursor's line, read through a selection the way a host
/// command would. Leaves the line selected.
fn read_cursor_line<S: TextSurface + ?Sized>(surface: &mut S) -> String {
    surface.move_cursor_to_beginning_of_line();
    surface.select_to_end_of_line();
    surface.selected_text()
}

/// Move down one line and read it; empty when already on the last line
fn read_line_below<S: TextSurface + ?Sized>(surface: &mut S) -> String {
    let row = surface.cursor_position().row;
    surface.move_cursor_down();
    if surface.cursor_position().row == row + 1 {
        read_cursor_line(surface)
    } else {
        String::new()
    }
}

/// Synthesize a comment for the cursor position and write it into `surface`
pub fn write_comment<S: TextSurface + ?Sized>(
    surface: &mut S,
    synthesizer: &CommentSynthesizer,
) -> CommentPlacement {
    let origin = surface.cursor_position();
    let target_row = origin.row;

    let anchor = read_cursor_line(surface);
    let mut next = read_line_below(surface);
    let indentation = comment_indentation(&anchor, &next).to_string();

    // A non-blank anchor is code; the comment documents the line after it.
    let opened_line = !is_blank(&anchor);
    if opened_line {
        surface.set_cursor_position(origin);
        surface.insert_newline_below();
        next = read_line_below(surface);
    }

    let comment = synthesizer.make_comment(&anchor, &next);
    log::debug!(
        "writing {} comment ({} lines) below row {} with indentation {:?}",
        comment.variant,
        comment.lines.len(),
        target_row,
        indentation
    );

    write_lines(surface, target_row, &indentation, &comment);
    position_cursor(surface, target_row, comment.variant);

    CommentPlacement {
        variant: comment.variant,
        first_row: target_row + 1,
        line_count: comment.lines.len(),
        indentation,
        opened_line,
    }
}

fn write_lines<S: TextSurface + ?Sized>(
    surface: &mut S,
    target_row: usize,
    indentation: &str,
    comment: &Comment,
) {
    surface.set_cursor_position(Point::new(target_row, 0));
    surface.insert_newline_below();
    surface.move_cursor_to_beginning_of_line();

    let last = comment.lines.len().saturating_sub(1);
    for (index, line) in comment.indented(indentation).iter().enumerate() {
        surface.insert_text(line);
        if index != last {
            surface.insert_newline_below();
            surface.move_cursor_to_beginning_of_line();
        }
    }
}

fn position_cursor<S: TextSurface + ?Sized>(
    surface: &mut S,
    target_row: usize,
    variant: CommentVariant,
) {
    if !variant.has_description() {
        surface.move_cursor_up();
        return;
    }

    let description_row = target_row + 1 + Comment::DESCRIPTION_OFFSET;
    surface.set_cursor_position(Point::new(description_row, 0));
    surface.move_cursor_to_end_of_line();
    surface.select_to_previous_word_boundary();

    // Trailing whitespace selects first; keep going until a word is covered.
    loop {
        let selected = surface.selected_text();
        if selected.is_empty() || !selected.chars().all(char::is_whitespace) {
            break;
        }
        let before = surface.cursor_position();
        surface.select_to_previous_word_boundary();
        if surface.cursor_position() == before {
            break;
        }
    }
    log::trace!("selected placeholder {:?}", surface.selected_text());
}

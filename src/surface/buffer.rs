//! In-memory text surface
//!
//! A rope-backed buffer with one cursor and an optional selection. It behaves
//! like a simple host editor: word boundaries follow Unicode word segmentation,
//! and a typed newline auto-indents to the previous line's indentation rounded
//! down to whole indent units. CRLF input is stored as LF and written back
//! with its original line ending.

use super::{Point, TextSurface};
use crate::comment::leading_whitespace;
use crate::error::{Error, Result};
use ropey::Rope;
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Line terminator of the text a buffer was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// CRLF when the text contains any `\r\n`
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Text with every `\r\n` folded to `\n`
fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[derive(Debug, Clone)]
pub struct LineBuffer {
    /// Contents with LF line breaks only
    rope: Rope,
    line_ending: LineEnding,
    cursor: Point,
    /// Fixed end of the selection; the cursor is the moving end
    selection_tail: Option<Point>,
    tab_length: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl LineBuffer {
    /// Build a buffer from text, remembering whether it used CRLF
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(&normalize_newlines(text)),
            line_ending: LineEnding::detect(text),
            cursor: Point::default(),
            selection_tail: None,
            tab_length: 2,
        }
    }

    pub fn with_tab_length(mut self, tab_length: usize) -> Self {
        self.tab_length = tab_length.max(1);
        self
    }

    /// Place the cursor, failing when the position is outside the buffer
    pub fn with_cursor(mut self, position: Point) -> Result<Self> {
        let in_bounds =
            position.row < self.line_count() && position.column <= self.line_len(position.row);
        if !in_bounds {
            return Err(Error::InvalidPosition {
                row: position.row,
                column: position.column,
                rows: self.line_count(),
            });
        }
        self.cursor = position;
        Ok(self)
    }

    /// Full text, joined with the line ending the buffer was loaded with
    pub fn text(&self) -> String {
        let text = self.rope.to_string();
        match self.line_ending {
            LineEnding::Lf => text,
            LineEnding::CrLf => text.replace('\n', self.line_ending.as_str()),
        }
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Every line, without terminators
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count())
            .filter_map(|row| self.line_text(row))
            .collect()
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Ordered `(start, end)` of the selection, if one is active
    pub fn selection(&self) -> Option<(Point, Point)> {
        let tail = self.selection_tail?;
        if tail == self.cursor {
            return None;
        }
        Some((tail.min(self.cursor), tail.max(self.cursor)))
    }

    /// Type a newline at the cursor the way a host editor does: split the
    /// line and auto-indent the new one.
    pub fn insert_newline(&mut self) {
        self.delete_selection();
        let row = self.cursor.row;
        let indent = self.auto_indent(&self.line_text(row).unwrap_or_default());
        let index = self.char_index(self.cursor);
        self.rope.insert(index, &format!("\n{indent}"));
        self.cursor = Point::new(row + 1, indent.chars().count());
    }

    /// Previous line's indentation, rounded down to whole indent units
    fn auto_indent(&self, line: &str) -> String {
        let width: usize = leading_whitespace(line)
            .chars()
            .map(|c| if c == '\t' { self.tab_length } else { 1 })
            .sum();
        " ".repeat(width / self.tab_length * self.tab_length)
    }

    fn line_text(&self, row: usize) -> Option<String> {
        let mut line = self.rope.get_line(row)?.to_string();
        if line.ends_with('\n') {
            line.pop();
        }
        Some(line)
    }

    /// Length of `row` in characters, excluding the line break
    fn line_len(&self, row: usize) -> usize {
        let Some(line) = self.rope.get_line(row) else {
            return 0;
        };
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    fn clamp(&self, position: Point) -> Point {
        let row = position.row.min(self.line_count() - 1);
        Point::new(row, position.column.min(self.line_len(row)))
    }

    fn char_index(&self, position: Point) -> usize {
        let position = self.clamp(position);
        self.rope.line_to_char(position.row) + position.column
    }

    fn point_at(&self, char_index: usize) -> Point {
        let row = self.rope.char_to_line(char_index);
        Point::new(row, char_index - self.rope.line_to_char(row))
    }

    fn move_to(&mut self, position: Point) {
        self.selection_tail = None;
        self.cursor = self.clamp(position);
    }

    fn extend_to(&mut self, position: Point) {
        if self.selection_tail.is_none() {
            self.selection_tail = Some(self.cursor);
        }
        self.cursor = self.clamp(position);
    }

    fn previous_word_boundary(&self, from: Point) -> Point {
        if from.column == 0 {
            return match from.row {
                0 => from,
                row => Point::new(row - 1, self.line_len(row - 1)),
            };
        }
        let line = self.rope.line(from.row);
        let text = line.to_string();
        let byte_pos = line.char_to_byte(from.column);
        let boundary = text
            .split_word_bound_indices()
            .map(|(offset, _)| offset)
            .take_while(|offset| *offset < byte_pos)
            .last()
            .unwrap_or(0);
        Point::new(from.row, line.byte_to_char(boundary))
    }

    fn delete_selection(&mut self) {
        if let Some((start, end)) = self.selection() {
            let range = self.char_index(start)..self.char_index(end);
            self.rope.remove(range);
            self.cursor = start;
        }
        self.selection_tail = None;
    }
}

impl TextSurface for LineBuffer {
    fn cursor_position(&self) -> Point {
        self.cursor
    }

    fn set_cursor_position(&mut self, position: Point) {
        self.move_to(position);
    }

    fn move_cursor_up(&mut self) {
        let Point { row, column } = self.cursor;
        self.move_to(Point::new(row.saturating_sub(1), column));
    }

    fn move_cursor_down(&mut self) {
        let Point { row, column } = self.cursor;
        self.move_to(Point::new(row + 1, column));
    }

    fn move_cursor_to_beginning_of_line(&mut self) {
        self.move_to(Point::new(self.cursor.row, 0));
    }

    fn move_cursor_to_end_of_line(&mut self) {
        let row = self.cursor.row;
        self.move_to(Point::new(row, self.line_len(row)));
    }

    fn select_to_end_of_line(&mut self) {
        let row = self.cursor.row;
        self.extend_to(Point::new(row, self.line_len(row)));
    }

    fn select_to_previous_word_boundary(&mut self) {
        let boundary = self.previous_word_boundary(self.cursor);
        self.extend_to(boundary);
    }

    fn selected_text(&self) -> String {
        self.selection()
            .map(|(start, end)| {
                self.rope
                    .slice(self.char_index(start)..self.char_index(end))
                    .to_string()
            })
            .unwrap_or_default()
    }

    fn line_text_for_row(&self, row: usize) -> Option<String> {
        self.line_text(row)
    }

    fn insert_text(&mut self, text: &str) {
        self.delete_selection();
        let text = normalize_newlines(text);
        let index = self.char_index(self.cursor);
        self.rope.insert(index, &text);
        self.cursor = self.point_at(index + text.chars().count());
    }

    fn insert_newline_below(&mut self) {
        let row = self.cursor.row;
        let end_of_line = self.char_index(Point::new(row, self.line_len(row)));
        self.rope.insert_char(end_of_line, '\n');
        self.move_to(Point::new(row + 1, 0));
    }
}

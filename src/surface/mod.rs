//! Text surface abstraction
//!
//! The controllers never own editor state. They drive whatever implements
//! [`TextSurface`]: a host editor binding, or the in-memory [`LineBuffer`].

pub mod buffer;

pub use buffer::{LineBuffer, LineEnding};

use serde::Serialize;

/// Zero-based buffer position; `column` counts characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// Cursor, selection and line access a host editor provides.
///
/// Movements clear any selection; the `select_*` methods keep the selection
/// tail fixed and move the cursor (the selection head).
pub trait TextSurface {
    fn cursor_position(&self) -> Point;

    /// Move the cursor, clamped to the buffer
    fn set_cursor_position(&mut self, position: Point);

    fn move_cursor_up(&mut self);

    fn move_cursor_down(&mut self);

    fn move_cursor_to_beginning_of_line(&mut self);

    fn move_cursor_to_end_of_line(&mut self);

    fn select_to_end_of_line(&mut self);

    /// Extend the selection backward to the previous word boundary
    fn select_to_previous_word_boundary(&mut self);

    /// Selected text, empty when nothing is selected
    fn selected_text(&self) -> String;

    /// Text of `row`, `None` past the end of the buffer
    fn line_text_for_row(&self, row: usize) -> Option<String>;

    /// Insert `text` at the cursor, replacing the selection if any
    fn insert_text(&mut self, text: &str);

    /// Open a blank line below the cursor's line and move onto it
    fn insert_newline_below(&mut self);

    /// Text of `row`, empty past the end of the buffer
    fn line_text_or_empty(&self, row: usize) -> String {
        self.line_text_for_row(row).unwrap_or_default()
    }
}

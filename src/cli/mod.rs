//! Command-line interface module
//!
//! This module contains the implementations for the CLI subcommands. Each one
//! loads a file into a [`LineBuffer`](crate::surface::LineBuffer), runs an
//! action against it and prints the result.

pub mod block;
pub mod inspect;
pub mod newline;
pub mod synthesize;

/// Common CLI utilities
pub mod utils {
    use crate::error::{Error as JsdocError, Result as JsdocResult};
    use crate::style::DocStyle;
    use crate::surface::{LineBuffer, Point};
    use std::path::{Path, PathBuf};

    /// Read `path` into a buffer with the cursor at `row`:`column`
    pub fn load_buffer(
        path: &Path,
        row: usize,
        column: usize,
        style: &DocStyle,
    ) -> JsdocResult<LineBuffer> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            JsdocError::Io(format!("Failed to read file {}: {}", path.display(), e))
        })?;
        LineBuffer::from_text(&text)
            .with_tab_length(style.tab_length)
            .with_cursor(Point::new(row, column))
    }

    /// Load the style file if one was given
    pub fn load_style(path: Option<&PathBuf>) -> JsdocResult<DocStyle> {
        DocStyle::load(path.map(|p| p.as_path()))
    }

    /// Write output to file or stdout
    pub fn write_output(content: &str, output_path: Option<&PathBuf>) -> JsdocResult<()> {
        match output_path {
            Some(path) => {
                std::fs::write(path, content).map_err(JsdocError::from)?;
                log::info!("Output written to: {}", path.display());
                Ok(())
            }
            None => {
                println!("{}", content);
                Ok(())
            }
        }
    }
}

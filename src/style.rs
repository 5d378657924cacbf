//! Comment token configuration
//!
//! Every delimiter, tag and placeholder the synthesizer writes, plus the
//! continuation prefixes, lives in a [`DocStyle`]. Styles can be loaded from a
//! JSON file; absent fields keep their JSDoc defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tokens used to synthesize and continue comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocStyle {
    /// Opening delimiter line, e.g. `/**`
    pub block_open: String,
    /// Bare gutter line inside a block, e.g. ` *`
    pub block_line: String,
    /// Closing delimiter line, e.g. ` */`
    pub block_close: String,
    /// Tag introducing a parameter line
    pub param_tag: String,
    /// Tag introducing the return value line
    pub return_tag: String,
    /// Generic type placeholder carried by tagged lines
    pub type_placeholder: String,
    /// Placeholder the user is expected to overwrite
    pub description_placeholder: String,
    /// Prefix inserted when continuing a block comment
    pub block_continuation: String,
    /// Prefix inserted when continuing a line comment
    pub line_continuation: String,
    /// Width of one indentation unit for host auto-indent
    pub tab_length: usize,
}

impl Default for DocStyle {
    fn default() -> Self {
        Self {
            block_open: "/**".to_string(),
            block_line: " *".to_string(),
            block_close: " */".to_string(),
            param_tag: "@param ".to_string(),
            return_tag: "@return".to_string(),
            type_placeholder: "{type}".to_string(),
            description_placeholder: "description".to_string(),
            block_continuation: " * ".to_string(),
            line_continuation: "// ".to_string(),
            tab_length: 2,
        }
    }
}

impl DocStyle {
    /// Load a style from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a style from JSON text and validate it
    pub fn from_json(content: &str) -> Result<Self> {
        let style: DocStyle = serde_json::from_str(content)?;
        style.validate()?;
        Ok(style)
    }

    /// Load the style at `path`, or the default style when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject styles that cannot produce a well-formed comment
    pub fn validate(&self) -> Result<()> {
        if self.block_open.trim().is_empty() {
            return Err(Error::config("`block_open` must not be blank"));
        }
        if self.block_close.trim().is_empty() {
            return Err(Error::config("`block_close` must not be blank"));
        }
        if self.tab_length == 0 {
            return Err(Error::config("`tab_length` must be at least 1"));
        }
        if self.description_placeholder.trim().is_empty() {
            log::warn!("empty description placeholder: nothing will be selected after synthesis");
        }
        Ok(())
    }

    /// Block gutter line carrying `text`
    pub(crate) fn gutter(&self, text: &str) -> String {
        format!("{} {}", self.block_line, text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//! Comment synthesis
//!
//! Chooses a comment variant from the anchor line and the line below it and
//! builds the (un-indented) comment lines.

use super::classifier::is_blank;
use super::signature::{parse_function_signature, FunctionSignature};
use crate::style::DocStyle;
use serde::Serialize;

/// Kind of comment body produced by synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentVariant {
    /// Tagged comment documenting a function declaration
    Function,
    /// Description-only comment
    Block,
    /// Bare delimiters with no body
    Empty,
}

impl CommentVariant {
    /// Whether the comment carries a description placeholder line
    pub fn has_description(self) -> bool {
        !matches!(self, CommentVariant::Empty)
    }
}

impl std::fmt::Display for CommentVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CommentVariant::Function => "FUNCTION",
            CommentVariant::Block => "BLOCK",
            CommentVariant::Empty => "EMPTY",
        };
        f.write_str(name)
    }
}

/// A synthesized comment, ready to be indented and written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub lines: Vec<String>,
    pub variant: CommentVariant,
}

impl Comment {
    /// Offset of the description placeholder line within `lines`
    pub const DESCRIPTION_OFFSET: usize = 1;

    /// The lines prefixed with `indent`
    pub fn indented(&self, indent: &str) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| format!("{indent}{line}"))
            .collect()
    }
}

/// Builds comments from a [`DocStyle`]
#[derive(Debug, Clone, Default)]
pub struct CommentSynthesizer {
    style: DocStyle,
}

impl CommentSynthesizer {
    pub fn new(style: DocStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &DocStyle {
        &self.style
    }

    /// Synthesize the comment for `anchor_line` followed by `next_line`.
    ///
    /// FUNCTION when the next line declares a function, BLOCK when either line
    /// has content, EMPTY otherwise.
    pub fn make_comment(&self, anchor_line: &str, next_line: &str) -> Comment {
        if let Some(signature) = parse_function_signature(next_line) {
            return self.function_comment(&signature);
        }
        if !is_blank(anchor_line) || !is_blank(next_line) {
            return self.block_comment();
        }
        self.empty_comment()
    }

    fn function_comment(&self, signature: &FunctionSignature) -> Comment {
        let style = &self.style;
        let description = match &signature.name {
            Some(name) => format!("{} - {}", name, style.description_placeholder),
            None => style.description_placeholder.clone(),
        };

        let mut lines = Vec::with_capacity(signature.params.len() + 5);
        lines.push(style.block_open.clone());
        lines.push(style.gutter(&description));
        lines.push(style.block_line.clone());
        for param in &signature.params {
            lines.push(style.gutter(&format!(
                "{} {} {} {}",
                style.param_tag, style.type_placeholder, param, style.description_placeholder
            )));
        }
        lines.push(style.gutter(&format!(
            "{} {} {}",
            style.return_tag, style.type_placeholder, style.description_placeholder
        )));
        lines.push(style.block_close.clone());

        Comment {
            lines,
            variant: CommentVariant::Function,
        }
    }

    fn block_comment(&self) -> Comment {
        let style = &self.style;
        Comment {
            lines: vec![
                style.block_open.clone(),
                style.gutter(&style.description_placeholder),
                style.block_close.clone(),
            ],
            variant: CommentVariant::Block,
        }
    }

    fn empty_comment(&self) -> Comment {
        Comment {
            lines: vec![self.style.block_open.clone(), self.style.block_close.clone()],
            variant: CommentVariant::Empty,
        }
    }
}

/// Synthesize with the default JSDoc style
pub fn make_comment(anchor_line: &str, next_line: &str) -> Comment {
    CommentSynthesizer::default().make_comment(anchor_line, next_line)
}

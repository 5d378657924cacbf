//! jsdoc-rs: comment synthesis and continuation for text editors
//!
//! This library decides what documentation comment belongs above the code
//! under a cursor, writes it at the right indentation through a
//! [`TextSurface`], selects the description placeholder, and continues block
//! and line comments when a newline is typed inside them.

pub mod action;
pub mod cli;
pub mod comment;
pub mod controller;
pub mod error;
pub mod style;
pub mod surface;

pub use action::{Action, ActionOutcome};
pub use error::{Error as JsdocError, Result as JsdocResult};

// Re-export commonly used types
pub use comment::{make_comment, Comment, CommentSynthesizer, CommentVariant, ContinuationKind};
pub use controller::{continue_comment, write_comment, CommentPlacement};
pub use style::DocStyle;
pub use surface::{LineBuffer, Point, TextSurface};

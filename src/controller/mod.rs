//! Controllers that drive a [`TextSurface`](crate::surface::TextSurface)

pub mod continuation;
pub mod placement;

pub use continuation::continue_comment;
pub use placement::{write_comment, CommentPlacement};

//! Comment classification and synthesis
//!
//! Pure text functions: nothing in this module touches a buffer.

pub mod classifier;
pub mod signature;
pub mod synthesizer;

pub use classifier::{
    classify_continuation, comment_indentation, is_blank, leading_whitespace, ContinuationKind,
};
pub use signature::{parse_function_signature, FunctionSignature};
pub use synthesizer::{make_comment, Comment, CommentSynthesizer, CommentVariant};

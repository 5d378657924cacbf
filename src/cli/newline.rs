use super::utils::{load_buffer, load_style, write_output};
use crate::action::{Action, ActionOutcome};
use crate::comment::CommentSynthesizer;
use crate::error::Result as JsdocResult;
use std::path::PathBuf;

/// Arguments for the newline command
#[derive(Debug, Clone)]
pub struct NewlineArgs {
    pub input_path: PathBuf,
    pub row: usize,
    pub column: usize,
    pub style_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

/// Run the newline subcommand: type Enter at the position, then continue any
/// comment the cursor was in
pub fn newline(args: &NewlineArgs) -> JsdocResult<()> {
    let style = load_style(args.style_path.as_ref())?;
    let mut buffer = load_buffer(&args.input_path, args.row, args.column, &style)?;
    let synthesizer = CommentSynthesizer::new(style);

    buffer.insert_newline();
    if let ActionOutcome::Continued(kind) =
        Action::ContinueComment.dispatch(&mut buffer, &synthesizer)
    {
        log::info!("Continuation after row {}: {}", args.row, kind);
    }

    write_output(&buffer.text(), args.output_path.as_ref())
}

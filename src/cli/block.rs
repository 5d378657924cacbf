use super::utils::{load_buffer, load_style, write_output};
use crate::action::{Action, ActionOutcome};
use crate::comment::CommentSynthesizer;
use crate::error::{Error as JsdocError, Result as JsdocResult};
use crate::surface::TextSurface;
use std::path::PathBuf;

/// Arguments for the block command
#[derive(Debug, Clone)]
pub struct BlockArgs {
    pub input_path: PathBuf,
    pub row: usize,
    pub column: usize,
    pub style_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub show_selection: bool,
}

/// Run the block subcommand
pub fn block(args: &BlockArgs) -> JsdocResult<()> {
    let style = load_style(args.style_path.as_ref())?;
    let mut buffer = load_buffer(&args.input_path, args.row, args.column, &style)?;
    let synthesizer = CommentSynthesizer::new(style);

    let placement = match Action::WriteComment.dispatch(&mut buffer, &synthesizer) {
        ActionOutcome::Written(placement) => placement,
        other => {
            return Err(JsdocError::internal(format!(
                "Unexpected outcome for {}: {:?}",
                Action::WriteComment,
                other
            )))
        }
    };
    log::info!(
        "Wrote {} comment at row {} ({} lines)",
        placement.variant,
        placement.first_row,
        placement.line_count
    );

    write_output(&buffer.text(), args.output_path.as_ref())?;

    if args.show_selection {
        match buffer.selection() {
            Some((start, end)) => {
                eprintln!("selection {}-{}: {:?}", start, end, buffer.selected_text())
            }
            None => eprintln!("cursor {}", buffer.cursor_position()),
        }
    }

    Ok(())
}

use super::utils::load_style;
use crate::comment::CommentSynthesizer;
use crate::error::{Error as JsdocError, Result as JsdocResult};
use clap::ValueEnum;
use std::path::PathBuf;

/// Output format for the synthesize and classify commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain lines for reading
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the synthesize command
#[derive(Debug, Clone)]
pub struct SynthesizeArgs {
    pub anchor: String,
    pub next: String,
    pub style_path: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Run the synthesize subcommand
pub fn synthesize(args: &SynthesizeArgs) -> JsdocResult<()> {
    let synthesizer = CommentSynthesizer::new(load_style(args.style_path.as_ref())?);
    let comment = synthesizer.make_comment(&args.anchor, &args.next);

    match args.format {
        OutputFormat::Text => {
            println!("{}", comment.variant);
            for line in &comment.lines {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&comment)
                .map_err(|e| JsdocError::internal(format!("Failed to serialize comment: {}", e)))?;
            println!("{}", json);
        }
    }
    Ok(())
}

use clap::{Parser, Subcommand};
use miette::{miette, Result};
use std::path::PathBuf;

use jsdoc_rs::cli;
use jsdoc_rs::cli::synthesize::OutputFormat;

#[derive(Parser)]
#[command(name = "jsdoc-rs")]
#[command(about = "Synthesize JSDoc comments and continue comments on newline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a comment block at a cursor position (`jsdoc:block`)
    Block {
        /// Input source file
        input: PathBuf,

        /// Cursor row (zero-based)
        #[arg(short, long)]
        row: usize,

        /// Cursor column (zero-based)
        #[arg(short, long, default_value_t = 0)]
        column: usize,

        /// JSON style file overriding comment tokens
        #[arg(short, long)]
        style: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report the final selection on stderr
        #[arg(long)]
        show_selection: bool,
    },

    /// Type a newline at a position and continue any comment (`editor:newline`)
    Newline {
        /// Input source file
        input: PathBuf,

        /// Cursor row (zero-based)
        #[arg(short, long)]
        row: usize,

        /// Cursor column (zero-based)
        #[arg(short, long)]
        column: usize,

        /// JSON style file overriding comment tokens
        #[arg(short, long)]
        style: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the comment synthesized for a line and the line below it
    Synthesize {
        /// Line under the cursor
        #[arg(long, default_value = "")]
        anchor: String,

        /// Line following the cursor line
        #[arg(long, default_value = "")]
        next: String,

        /// JSON style file overriding comment tokens
        #[arg(short, long)]
        style: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Classify a line for comment continuation
    Classify {
        /// Line text
        line: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the effective comment style as JSON
    Style {
        /// JSON style file to load
        #[arg(short, long)]
        style: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Block {
            input,
            row,
            column,
            style,
            output,
            show_selection,
        } => {
            let args = cli::block::BlockArgs {
                input_path: input,
                row,
                column,
                style_path: style,
                output_path: output,
                show_selection,
            };
            cli::block::block(&args).map_err(|e| miette!("{}", e))
        }
        Commands::Newline {
            input,
            row,
            column,
            style,
            output,
        } => {
            let args = cli::newline::NewlineArgs {
                input_path: input,
                row,
                column,
                style_path: style,
                output_path: output,
            };
            cli::newline::newline(&args).map_err(|e| miette!("{}", e))
        }
        Commands::Synthesize {
            anchor,
            next,
            style,
            format,
        } => {
            let args = cli::synthesize::SynthesizeArgs {
                anchor,
                next,
                style_path: style,
                format,
            };
            cli::synthesize::synthesize(&args).map_err(|e| miette!("{}", e))
        }
        Commands::Classify { line, format } => {
            cli::inspect::classify(&line, format).map_err(|e| miette!("{}", e))
        }
        Commands::Style { style } => {
            cli::inspect::style(style.as_ref()).map_err(|e| miette!("{}", e))
        }
    }
}

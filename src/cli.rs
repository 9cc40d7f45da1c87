use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::report::OutputFormat;

#[derive(Parser)]
#[command(name = "unique-words")]
#[command(about = "Extract unique words from text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dedup tokens given one per line.
    Unique(InputArgs),
    /// Count distinct words, ignoring case and punctuation.
    Count(InputArgs),
    /// Stream unique space-separated words as lines are read.
    Stream(InputArgs),
    /// Unique tokens per line, suppressing tokens seen on earlier lines.
    PerLine(SeparatedArgs),
    /// Unique tokens of the whole text split on a separator.
    Text(SeparatedArgs),
    /// Unique non-blank tokens of the text read as characters.
    Chars(SeparatedArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input file; stdin when omitted or `-`.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Print progress to stderr.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SeparatedArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Token separator.
    #[arg(long, default_value_t = ',')]
    pub separator: char,
}

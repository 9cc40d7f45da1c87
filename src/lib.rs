pub mod cli;
pub mod error;
pub mod input;
pub mod ordered_set;
pub mod report;
pub mod tokens;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use cli::{Cli, Commands, InputArgs, SeparatedArgs};
use input::InputSource;
use report::{OutputFormat, Report, render};

pub use error::TokenError;
pub use ordered_set::OrderedSet;
pub use tokens::{
    UniqueWordStream, count_unique_words, extract_unique_tokens, extract_unique_tokens_from_chars,
    extract_unique_tokens_from_text, extract_unique_tokens_lazy, extract_unique_tokens_per_line,
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Unique(args) => run_report(&args, "unique", |source| {
            let lines = source.read_lines()?;
            Ok(Report::Words(extract_unique_tokens(&lines)))
        }),
        Commands::Count(args) => run_report(&args, "count", |source| {
            let text = source.read_text()?;
            Ok(Report::Count(count_unique_words(&text)))
        }),
        Commands::Stream(args) => stream(&args),
        Commands::PerLine(SeparatedArgs { input, separator }) => {
            run_report(&input, "per-line", |source| {
                let lines = source.read_lines()?;
                Ok(Report::Lines(extract_unique_tokens_per_line(&lines, separator)))
            })
        }
        Commands::Text(SeparatedArgs { input, separator }) => {
            run_report(&input, "text", |source| {
                let text = source.read_text()?;
                Ok(Report::Words(extract_unique_tokens_from_text(&text, separator)))
            })
        }
        Commands::Chars(SeparatedArgs { input, separator }) => {
            run_report(&input, "chars", |source| {
                let text = source.read_text()?;
                Ok(Report::Words(extract_unique_tokens_from_chars(
                    text.chars(),
                    separator,
                )))
            })
        }
    }
}

fn run_report<F>(args: &InputArgs, operation: &str, build: F) -> Result<()>
where
    F: FnOnce(&InputSource) -> Result<Report, TokenError>,
{
    let source = InputSource::from_arg(args.input.clone());
    if args.verbose {
        eprintln!("Running {operation} on {source}");
    }

    let report = build(&source).with_context(|| format!("{operation} failed for {source}"))?;
    if args.verbose {
        eprintln!("{operation}: {} result(s)", report.result_count());
    }

    let rendered = render(&report, args.format)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("failed to write output")?;
    if args.format == OutputFormat::Json {
        writeln!(stdout).context("failed to write output")?;
    }
    Ok(())
}

fn stream(args: &InputArgs) -> Result<()> {
    let source = InputSource::from_arg(args.input.clone());
    if args.verbose {
        eprintln!("Running stream on {source}");
    }

    let reader = source
        .open_lines()
        .with_context(|| format!("stream failed for {source}"))?;

    let mut read_error = None;
    let lines = reader.lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(err) => {
            read_error = Some(err);
            None
        }
    });
    let mut words = extract_unique_tokens_lazy(lines);

    let mut stdout = io::stdout().lock();
    let mut produced = Vec::new();
    for word in words.by_ref() {
        match args.format {
            OutputFormat::Text => {
                writeln!(stdout, "{word}").context("failed to write output")?;
                stdout.flush().context("failed to write output")?;
            }
            OutputFormat::Json => produced.push(word),
        }
    }
    let lines_consumed = words.lines_consumed();
    drop(words);

    if let Some(err) = read_error {
        return Err(source.io_error(err)).with_context(|| format!("stream failed for {source}"));
    }

    if args.verbose {
        eprintln!("stream: read {lines_consumed} line(s)");
    }

    if args.format == OutputFormat::Json {
        let rendered = render(&Report::Words(produced), args.format)?;
        writeln!(stdout, "{rendered}").context("failed to write output")?;
    }
    Ok(())
}

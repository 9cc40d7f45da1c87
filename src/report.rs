use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

#[derive(ValueEnum, Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Result of one operation, in the shape that operation returns.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Report {
    Words(Vec<String>),
    Count(usize),
    Lines(Vec<Vec<String>>),
}

impl Report {
    /// Number of words, the count itself, or number of rows.
    pub fn result_count(&self) -> usize {
        match self {
            Report::Words(words) => words.len(),
            Report::Count(count) => *count,
            Report::Lines(rows) => rows.len(),
        }
    }
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report).context("serialize report"),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &Report) -> String {
    let mut output = String::new();
    match report {
        Report::Words(words) => {
            for word in words {
                output.push_str(word);
                output.push('\n');
            }
        }
        Report::Count(count) => {
            output.push_str(&format!("{count}\n"));
        }
        Report::Lines(rows) => {
            for row in rows {
                output.push_str(&row.join("\t"));
                output.push('\n');
            }
        }
    }
    output
}

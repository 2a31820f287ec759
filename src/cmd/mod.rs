//! Command module structure for wordplay CLI

use anyhow::{Context, Result};
use std::path::PathBuf;

use wordplay::config::OutputFormat;
use wordplay::formatters::{format_outcomes, Outcome};
use wordplay::input::{split_units, InputSource};

pub mod config;
pub mod disemvowel;
pub mod palindrome;

/// Output settings resolved from config and global flags.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Resolve the input source and read its full text.
pub fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    let stdin_is_tty = atty::is(atty::Stream::Stdin);
    let source = InputSource::resolve(text, file, stdin_is_tty)?;
    tracing::debug!(?source, "input source resolved");
    source
        .read()
        .with_context(|| format!("Failed to read input from {:?}", source))
}

/// Apply `op` to the whole input or to each line, collecting outcomes.
pub fn collect_outcomes<F>(text: &str, per_line: bool, op: F) -> Vec<Outcome>
where
    F: Fn(&str) -> Outcome,
{
    split_units(text, per_line).into_iter().map(op).collect()
}

/// Print outcomes to stdout in the selected format.
pub fn emit(outcomes: &[Outcome], per_line: bool, options: OutputOptions) -> Result<()> {
    if per_line && outcomes.is_empty() && options.format == OutputFormat::Text {
        return Ok(());
    }
    println!("{}", format_outcomes(outcomes, options.format, per_line)?);
    Ok(())
}

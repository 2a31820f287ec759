//! Output formatters for command results
//!
//! Turns a list of [`Outcome`]s into plain text or JSON.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::palindrome::Verdict;
use crate::ui;

/// Result value of one command applied to one unit of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OutcomeValue {
    Text(String),
    Verdict(Verdict),
}

/// One input and what the command produced for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub command: &'static str,
    pub input: String,
    pub output: OutcomeValue,
}

impl Outcome {
    pub fn text(command: &'static str, input: &str, output: String) -> Self {
        Self {
            command,
            input: input.to_string(),
            output: OutcomeValue::Text(output),
        }
    }

    pub fn verdict(command: &'static str, input: &str, verdict: Verdict) -> Self {
        Self {
            command,
            input: input.to_string(),
            output: OutcomeValue::Verdict(verdict),
        }
    }
}

/// Format outcomes as text, one output per line
pub fn format_text(outcomes: &[Outcome]) -> String {
    outcomes
        .iter()
        .map(|outcome| match &outcome.output {
            OutcomeValue::Text(text) => text.clone(),
            OutcomeValue::Verdict(verdict) => ui::verdict_label(*verdict).to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format outcomes as JSON. A single outcome becomes an object unless
/// `as_array` is set; line mode always produces an array.
pub fn format_json(outcomes: &[Outcome], as_array: bool) -> Result<String> {
    let json = match outcomes {
        [single] if !as_array => serde_json::to_string_pretty(single),
        _ => serde_json::to_string_pretty(outcomes),
    };
    json.context("Failed to serialize results as JSON")
}

/// Format outcomes according to `format`
pub fn format_outcomes(outcomes: &[Outcome], format: OutputFormat, per_line: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(outcomes)),
        OutputFormat::Json => format_json(outcomes, per_line),
    }
}

//! Disemvowel command

use anyhow::Result;

use wordplay::disemvowel::try_disemvowel;
use wordplay::formatters::Outcome;

use super::{emit, read_input, OutputOptions};
use crate::cli::InputArgs;

/// Strip vowels from the input and print the result
pub fn cmd_disemvowel(args: InputArgs, options: OutputOptions) -> Result<()> {
    let text = read_input(args.text, args.file)?;

    let mut outcomes = Vec::new();
    for unit in wordplay::input::split_units(&text, args.lines) {
        let stripped = try_disemvowel(Some(unit))?;
        outcomes.push(Outcome::text("disemvowel", unit, stripped));
    }
    tracing::debug!(units = outcomes.len(), "disemvowel complete");

    emit(&outcomes, args.lines, options)
}

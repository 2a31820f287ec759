//! Palindrome and reverse commands

use anyhow::Result;

use wordplay::formatters::{Outcome, OutcomeValue};
use wordplay::palindrome::{palindrome_with, reverse, PalindromeStrategy, Verdict};

use super::{collect_outcomes, emit, read_input, OutputOptions};
use crate::cli::InputArgs;

/// Check each input unit and print Yes or No.
///
/// With `exit_code`, the process exits with status 1 after printing if
/// any verdict is No.
pub fn cmd_palindrome(
    args: InputArgs,
    strategy: PalindromeStrategy,
    exit_code: bool,
    options: OutputOptions,
) -> Result<()> {
    let text = read_input(args.text, args.file)?;

    let outcomes = collect_outcomes(&text, args.lines, |unit| {
        Outcome::verdict("palindrome", unit, palindrome_with(unit, strategy))
    });

    emit(&outcomes, args.lines, options)?;

    let any_no = outcomes
        .iter()
        .any(|o| o.output == OutcomeValue::Verdict(Verdict::No));
    if exit_code && any_no {
        tracing::debug!("non-palindrome found, exiting with status 1");
        std::process::exit(1);
    }

    Ok(())
}

/// Print each input unit reversed
pub fn cmd_reverse(args: InputArgs, options: OutputOptions) -> Result<()> {
    let text = read_input(args.text, args.file)?;

    let outcomes = collect_outcomes(&text, args.lines, |unit| {
        Outcome::text("reverse", unit, reverse(unit))
    });

    emit(&outcomes, args.lines, options)
}

//! CLI argument definitions for wordplay.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use wordplay::palindrome::PalindromeStrategy;

#[derive(Parser)]
#[command(name = "wordplay")]
#[command(version)]
#[command(about = "Vowel stripping and palindrome checks", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    wordplay disemvowel \"Morris, Minnesota\"\n    wordplay palindrome racecar\n    cat words.txt | wordplay palindrome --lines --json"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where a command reads its text from
#[derive(clap::Args, Debug, Clone)]
pub struct InputArgs {
    /// Text to process (reads --file or piped stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
    /// Read text from a file
    #[arg(long, short, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,
    /// Process each line separately
    #[arg(long)]
    pub lines: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Remove vowels (a, e, i, o, u in either case) from text
    Disemvowel {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print Yes if text reads the same forward and backward, otherwise No
    ///
    /// The comparison is exact: case, spaces and punctuation all count.
    Palindrome {
        #[command(flatten)]
        input: InputArgs,
        /// Comparison strategy (reverse, two-pointer); overrides config
        #[arg(long, value_name = "STRATEGY")]
        strategy: Option<PalindromeStrategy>,
        /// Exit with status 1 if any verdict is No
        #[arg(long)]
        exit_code: bool,
    },
    /// Print text with its characters in reverse order
    Reverse {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show the effective configuration
    Config {
        /// Only validate config files and report problems
        #[arg(long)]
        validate: bool,
    },
    /// Show version information
    Version {
        /// Include commit and build date
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

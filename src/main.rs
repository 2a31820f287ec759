//! CLI entry point and command dispatch for wordplay.

mod cli;
mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io;

use cli::{Cli, Commands};
use cmd::OutputOptions;
use wordplay::config::{Config, OutputFormat};
use wordplay::ui::{self, colors};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if matches!(cli.command, Commands::Config { validate: true }) => {
            // Let `config --validate` report the problem file by file.
            eprintln!("{} {:#}", colors::warning("Warning:"), e);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    wordplay::logging::init(cli.debug, Some(&config.logging.level));

    let color = config.output.color && !cli.no_color && atty::is(atty::Stream::Stdout);
    ui::set_color(color);

    let options = OutputOptions {
        format: if cli.json {
            OutputFormat::Json
        } else {
            config.output.format
        },
        quiet: cli.quiet || ui::is_quiet(),
    };
    tracing::debug!(?options, color, "starting");

    match cli.command {
        Commands::Disemvowel { input } => cmd::disemvowel::cmd_disemvowel(input, options),
        Commands::Palindrome {
            input,
            strategy,
            exit_code,
        } => cmd::palindrome::cmd_palindrome(
            input,
            strategy.unwrap_or(config.palindrome.strategy),
            exit_code,
            options,
        ),
        Commands::Reverse { input } => cmd::palindrome::cmd_reverse(input, options),
        Commands::Config { validate } => cmd::config::cmd_config(validate, options),
        Commands::Version { verbose } => cmd_version(verbose),
        Commands::Completion { shell } => {
            let mut command = Cli::command();
            generate(shell, &mut command, "wordplay", &mut io::stdout());
            Ok(())
        }
    }
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("wordplay {}", VERSION);

    if verbose {
        println!("commit: {}", env!("WORDPLAY_GIT_SHA"));
        println!("built: {}", env!("WORDPLAY_BUILD_DATE"));
    }

    Ok(())
}

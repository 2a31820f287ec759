//! Config command for showing and validating wordplay configuration

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use wordplay::config::{global_config_path, Config};
use wordplay::paths::PROJECT_CONFIG;
use wordplay::ui::colors;

use super::OutputOptions;

/// Print the merged configuration, or validate each file with `validate`
pub fn cmd_config(validate: bool, options: OutputOptions) -> Result<()> {
    let files: Vec<PathBuf> = global_config_path()
        .into_iter()
        .chain(std::iter::once(PathBuf::from(PROJECT_CONFIG)))
        .collect();

    if validate {
        return validate_files(&files, options.quiet);
    }

    let config = Config::load()?;

    if !options.quiet {
        for path in &files {
            println!("{} {}", describe(path), colors::identifier(&path.display().to_string()));
        }
        println!();
    }
    print!("{}", serde_yaml::to_string(&config)?);

    Ok(())
}

fn describe(path: &Path) -> colored::ColoredString {
    if path.exists() {
        "loaded ".green()
    } else {
        colors::dim("missing")
    }
}

/// Validate each existing config file on its own and report problems.
fn validate_files(files: &[PathBuf], quiet: bool) -> Result<()> {
    if !quiet {
        println!("{}", "Validating wordplay configuration...".bold());
    }

    let mut errors = 0;
    for path in files.iter().filter(|p| p.exists()) {
        match Config::load_from(path) {
            Ok(_) => {
                if !quiet {
                    println!("  {} {}", "✓".green(), path.display());
                }
            }
            Err(e) => {
                errors += 1;
                eprintln!("  {} {}", colors::error("✗"), e);
            }
        }
    }

    if errors > 0 {
        anyhow::bail!("Found {} invalid config file(s)", errors);
    }

    if !quiet {
        println!("{} Configuration is valid", "✓".green());
    }
    Ok(())
}

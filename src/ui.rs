//! Centralized UI formatting and color utilities
//!
//! Colors for verdicts and status messages, and the quiet-mode switch.

use colored::{ColoredString, Colorize};

use crate::palindrome::Verdict;

/// Environment variable that enables quiet mode
pub const QUIET_ENV: &str = "WORDPLAY_QUIET";

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var(QUIET_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Set the global color override. `false` forces plain output.
pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Returns the verdict text, green for Yes and red for No.
pub fn verdict_label(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Yes => verdict.as_str().green(),
        Verdict::No => verdict.as_str().red(),
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Cyan for identifiers (paths, setting names)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary information
    pub fn dim(text: &str) -> ColoredString {
        text.dimmed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_is_quiet_env() {
        std::env::set_var(QUIET_ENV, "1");
        assert!(is_quiet());
        std::env::set_var(QUIET_ENV, "TRUE");
        assert!(is_quiet());
        std::env::set_var(QUIET_ENV, "no");
        assert!(!is_quiet());
        std::env::remove_var(QUIET_ENV);
        assert!(!is_quiet());
    }

    #[test]
    fn test_verdict_label_text() {
        assert!(verdict_label(Verdict::Yes).to_string().contains("Yes"));
        assert!(verdict_label(Verdict::No).to_string().contains("No"));
    }
}

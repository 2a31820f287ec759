//! # wordplay - small text utilities
//!
//! Two independent routines over plain text:
//!
//! - [`disemvowel`] - strip the vowels `a e i o u` (either case), keep everything else
//! - [`palindrome`] - answer `Yes` or `No` to whether text reads the same both ways
//!
//! Both are linear, single-pass, and never mutate their input. The `wordplay`
//! binary wraps them with input handling, configuration and output formatting.
//!
//! ## Modules
//!
//! - [`disemvowel`] - vowel removal
//! - [`palindrome`] - palindrome verdicts and string reversal
//! - [`error`] - typed errors
//! - [`input`] - argument, file and stdin input sources
//! - [`config`] - configuration loading and merging
//! - [`formatters`] - text and JSON output
//!
//! ## Example
//!
//! ```
//! use wordplay::disemvowel::disemvowel;
//! use wordplay::palindrome::{palindrome, Verdict};
//!
//! assert_eq!(disemvowel("Morris, Minnesota"), "Mrrs, Mnnst");
//! assert_eq!(palindrome("abcdefgfedcba"), Verdict::Yes);
//! assert_eq!(palindrome("Madam").as_str(), "No");
//! ```

pub mod config;
pub mod disemvowel;
pub mod error;
pub mod formatters;
pub mod input;
pub mod logging;
pub mod palindrome;
pub mod ui;

/// Default path constants.
pub mod paths {
    /// Project config file: `.wordplay/config.md`
    pub const PROJECT_CONFIG: &str = ".wordplay/config.md";
}

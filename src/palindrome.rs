//! Palindrome detection.
//!
//! The check is exact: case, whitespace and punctuation all count.
//! Callers that want "Madam" to match "madam" must normalize first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::TextError;

/// Answer of a palindrome check. Renders as exactly `Yes` or `No`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Yes => "Yes",
            Verdict::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Verdict::Yes)
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the comparison is carried out. Both strategies agree on every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PalindromeStrategy {
    /// Build a reversed copy and compare it against the original.
    #[default]
    Reverse,
    /// Walk inward from both ends without allocating.
    TwoPointer,
}

impl fmt::Display for PalindromeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PalindromeStrategy::Reverse => write!(f, "reverse"),
            PalindromeStrategy::TwoPointer => write!(f, "two_pointer"),
        }
    }
}

impl FromStr for PalindromeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reverse" => Ok(PalindromeStrategy::Reverse),
            "two_pointer" | "two-pointer" => Ok(PalindromeStrategy::TwoPointer),
            other => Err(format!(
                "unknown palindrome strategy '{}' (expected reverse or two_pointer)",
                other
            )),
        }
    }
}

/// Return a new string with the characters of `text` in opposite order.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Check `text` using the default [`PalindromeStrategy::Reverse`].
pub fn palindrome(text: &str) -> Verdict {
    palindrome_with(text, PalindromeStrategy::Reverse)
}

/// Check `text` using the given strategy.
pub fn palindrome_with(text: &str, strategy: PalindromeStrategy) -> Verdict {
    debug!(len = text.len(), %strategy, "checking palindrome");
    let matched = match strategy {
        PalindromeStrategy::Reverse => {
            let reversed = reverse(text);
            text.chars().zip(reversed.chars()).all(|(a, b)| a == b)
        }
        PalindromeStrategy::TwoPointer => {
            let mut front = text.chars();
            let mut back = text.chars().rev();
            // Only the first half needs checking; the iterators meet in the middle.
            (0..text.chars().count() / 2).all(|_| front.next() == back.next())
        }
    };
    Verdict::from(matched)
}

pub fn is_palindrome(text: &str) -> bool {
    palindrome(text).is_yes()
}

/// Checked variant of [`palindrome`].
///
/// # Errors
///
/// Returns [`TextError::InvalidInput`] if `text` is `None`.
pub fn try_palindrome(text: Option<&str>) -> Result<Verdict, TextError> {
    text.map(palindrome)
        .ok_or_else(|| TextError::invalid_input("no text to check"))
}

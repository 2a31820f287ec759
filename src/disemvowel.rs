//! Vowel removal.
//!
//! Strips `a e i o u` (either case) from text and keeps every other
//! character, in order.

use tracing::trace;

use crate::error::TextError;

/// The vowel set, lower and upper case.
pub const VOWELS: [char; 10] = ['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'];

/// Returns true if `c` is in [`VOWELS`].
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Return a copy of `text` with all vowels removed.
///
/// Single forward pass; the result is never longer than the input.
pub fn disemvowel(text: &str) -> String {
    text.chars().filter(|&c| !is_vowel(c)).collect()
}

/// Checked variant of [`disemvowel`].
///
/// # Errors
///
/// - [`TextError::InvalidInput`] if `text` is `None`. Nothing is allocated.
/// - [`TextError::Allocation`] if the output buffer cannot be reserved.
pub fn try_disemvowel(text: Option<&str>) -> Result<String, TextError> {
    let text = text.ok_or_else(|| TextError::invalid_input("no text to disemvowel"))?;

    let mut output = String::new();
    output.try_reserve(text.len())?;
    output.extend(text.chars().filter(|&c| !is_vowel(c)));

    trace!(
        input_len = text.len(),
        output_len = output.len(),
        "disemvoweled"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_vowel() {
        for c in "aeiouAEIOU".chars() {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
        for c in "bcdyYzZ019 ,.!()\t".chars() {
            assert!(!is_vowel(c), "{c:?} should not be a vowel");
        }
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(disemvowel(""), "");
    }

    #[test]
    fn test_no_vowels() {
        assert_eq!(disemvowel("pqrst"), "pqrst");
    }

    #[test]
    fn test_only_vowels() {
        assert_eq!(disemvowel("aeiouAEIOUOIEAuoiea"), "");
    }

    #[test]
    fn test_morris_minnesota() {
        assert_eq!(disemvowel("Morris, Minnesota"), "Mrrs, Mnnst");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            disemvowel("An (Unexplained) Elephant!"),
            "n (nxplnd) lphnt!"
        );
    }

    #[test]
    fn test_long_string() {
        let mut input = String::from("xyz");
        input.push_str(&"a".repeat(49_996));
        assert_eq!(input.len(), 49_999);
        assert_eq!(disemvowel(&input), "xyz");
    }

    #[test]
    fn test_try_disemvowel_none_is_invalid_input() {
        let err = try_disemvowel(None).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_try_disemvowel_matches_plain() {
        for input in ["", "pqrst", "Morris, Minnesota", "An (Unexplained) Elephant!"] {
            assert_eq!(try_disemvowel(Some(input)).unwrap(), disemvowel(input));
        }
    }
}

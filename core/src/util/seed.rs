//! Seed string validation
//!
//! String seeds are restricted to printable ASCII so that the bytes fed to
//! the hash are unambiguous across platforms and encodings.

use thiserror::Error;

/// Errors raised when a seed string is rejected
#[derive(Debug, Error, PartialEq)]
pub enum SeedError {
    #[error("Seed must be printable ASCII: found {found:?} at index {index}")]
    NonPrintableAscii { index: usize, found: char },
}

/// Is `c` in the printable ASCII range (space to tilde)?
#[inline]
pub fn is_printable_ascii(c: char) -> bool {
    (' '..='~').contains(&c)
}

/// Check that `seed` is printable ASCII and return its bytes
///
/// # Example
/// ```
/// use replayable_random_core_rs::util::seed::{seed_bytes, SeedError};
///
/// assert_eq!(seed_bytes("seed"), Ok(&b"seed"[..]));
/// assert_eq!(
///     seed_bytes("s\u{e9}ed"),
///     Err(SeedError::NonPrintableAscii { index: 1, found: '\u{e9}' })
/// );
/// ```
pub fn seed_bytes(seed: &str) -> Result<&[u8], SeedError> {
    match seed.char_indices().find(|&(_, c)| !is_printable_ascii(c)) {
        Some((index, found)) => Err(SeedError::NonPrintableAscii { index, found }),
        None => Ok(seed.as_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_seed_is_accepted() {
        assert_eq!(seed_bytes(""), Ok(&b""[..]));
    }

    #[test]
    fn test_control_characters_are_rejected() {
        assert_eq!(
            seed_bytes("ab\ncd"),
            Err(SeedError::NonPrintableAscii { index: 2, found: '\n' })
        );
        assert!(seed_bytes("\u{7f}").is_err());
    }

    #[test]
    fn test_full_printable_range_is_accepted() {
        let all: String = (0x20u8..=0x7e).map(char::from).collect();
        assert_eq!(seed_bytes(&all).map(<[u8]>::len), Ok(95));
    }
}

//! Seed hashing
//!
//! Based on Johannes Baagøe's "Mash" avalanche hash: every bit of the input
//! affects every bit of the output about half of the time. Unlike the
//! classic version the function is pure (the internal state is passed in
//! and returned) and consumes bytes instead of UTF-16 code units.
//!
//! # Determinism
//!
//! All intermediate arithmetic is `f64` with truncation toward zero. The
//! accumulator returned by [`mash`] is NOT reduced modulo 2^32 before being
//! fed back, which is why it is a `u64`: it can reach 2^33.

use super::conversion::{fraction_to_u32, truncate_to_u32};

/// Avalanche multiplier
const MASH_FACTOR: f64 = 0.02519603282416938;

/// Initial accumulator used by [`mashes`]
pub const DEFAULT_MASH_N: u64 = 0xEFC8_249D;

/// Input hashed to build the baseline words of [`mashes`] (a single space)
pub const DEFAULT_MASH_INPUT: &[u8] = b" ";

/// Fold `input` into the accumulator `n`
///
/// The returned accumulator can be passed back in to continue hashing.
///
/// # Example
/// ```
/// use replayable_random_core_rs::util::mash::{mash, DEFAULT_MASH_INPUT, DEFAULT_MASH_N};
///
/// let h1 = mash(DEFAULT_MASH_N, DEFAULT_MASH_INPUT);
/// let h2 = mash(h1, b"seed");
/// assert_ne!(h1, h2);
/// assert_eq!(mash(h1, b""), h1);
/// ```
pub fn mash(n: u64, input: &[u8]) -> u64 {
    let mut n = n as f64;
    for &byte in input {
        n += f64::from(byte);
        let mut h = MASH_FACTOR * n;
        n = f64::from(truncate_to_u32(h));
        h -= n;
        h *= n;
        n = f64::from(truncate_to_u32(h));
        h -= n;
        n += f64::from(fraction_to_u32(h));
    }
    n as u64
}

/// Derive `count` hash words from `input`
///
/// The first pass hashes a fixed input `count` times to build baseline words
/// that are distinct even for an empty seed. The second pass hashes `input`
/// `count` times and subtracts each result from its baseline word, modulo
/// 2^32.
///
/// # Example
/// ```
/// use replayable_random_core_rs::util::mash::mashes;
///
/// let words = mashes(b"seed", 3);
/// assert_eq!(words, vec![2478005845, 852853345, 2059553257]);
/// ```
pub fn mashes(input: &[u8], count: usize) -> Vec<u32> {
    let mut prev = DEFAULT_MASH_N;
    let mut words: Vec<u32> = (0..count)
        .map(|_| {
            prev = mash(prev, DEFAULT_MASH_INPUT);
            prev as u32
        })
        .collect();
    for word in words.iter_mut() {
        prev = mash(prev, input);
        // Same as adding 1.0 in fractional space on underflow
        *word = word.wrapping_sub(prev as u32);
    }
    words
}

/// [`mashes`] into a fixed-size array
pub fn mash_array<const N: usize>(input: &[u8]) -> [u32; N] {
    let mut words = [0u32; N];
    words.copy_from_slice(&mashes(input, N));
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mash_empty_input_is_identity() {
        assert_eq!(mash(DEFAULT_MASH_N, &[]), DEFAULT_MASH_N);
        assert_eq!(mash(42, &[]), 42);
    }

    #[test]
    fn test_mash_stays_below_2_pow_34() {
        let mut m = mash(DEFAULT_MASH_N, DEFAULT_MASH_INPUT);
        for input in [&[50u8, 80, 0][..], &[1, 200, 102], &[1, 1, 1, 1], &[0, 0, 0, 0]] {
            m = mash(m, input);
            assert!(m < 1 << 34, "accumulator {} out of range", m);
        }
    }

    #[test]
    fn test_mashes_length() {
        assert_eq!(mashes(b"abc", 0).len(), 0);
        assert_eq!(mashes(b"abc", 48).len(), 48);
    }

    #[test]
    fn test_mashes_empty_seed() {
        // The last baseline word is cancelled by an unchanged accumulator.
        assert_eq!(mashes(b"", 3), vec![4061465487, 998582810, 0]);
    }
}

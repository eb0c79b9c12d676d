//! Tests for seed hashing
//!
//! Every engine is seeded from `mashes`, so these values pin down the
//! seeding of all generators at once.

use replayable_random_core_rs::util::mash::{mash, mash_array, mashes, DEFAULT_MASH_N};
use replayable_random_core_rs::util::seed::{seed_bytes, SeedError};

#[test]
fn test_mashes_known_values() {
    assert_eq!(mashes(b"seed", 3), vec![2478005845, 852853345, 2059553257]);
}

#[test]
fn test_mashes_of_empty_input() {
    // Only the priming phase contributes
    assert_eq!(mashes(b"", 3), vec![4061465487, 998582810, 0]);
}

#[test]
fn test_mashes_prefix_is_not_stable() {
    // The hash of the seed runs after the whole priming phase, so asking
    // for more words changes the first ones.
    let three = mashes(b"seed", 3);
    let four = mashes(b"seed", 4);
    assert_eq!(four.len(), 4);
    assert_ne!(&four[..3], &three[..]);
}

#[test]
fn test_mashes_zero_count() {
    assert!(mashes(b"seed", 0).is_empty());
}

#[test]
fn test_mash_array_matches_mashes() {
    let words: [u32; 11] = mash_array(b"kybos");
    assert_eq!(words.to_vec(), mashes(b"kybos", 11));
}

#[test]
fn test_mash_is_deterministic() {
    for input in [&b""[..], b" ", b"seed", b"~~~~~~~~~~~~~~~~"] {
        assert_eq!(
            mash(DEFAULT_MASH_N, input),
            mash(DEFAULT_MASH_N, input),
            "mash not deterministic!"
        );
    }
}

#[test]
fn test_mash_of_nothing_is_identity() {
    assert_eq!(mash(DEFAULT_MASH_N, b""), DEFAULT_MASH_N);
}

#[test]
fn test_different_seeds_hash_differently() {
    assert_ne!(mashes(b"seed", 3), mashes(b"Seed", 3));
    assert_ne!(mashes(b"seed", 3), mashes(b"seed ", 3));
}

#[test]
fn test_seed_bytes_accepts_printable_ascii() {
    let all: String = (' '..='~').collect();
    assert_eq!(seed_bytes(&all).map(<[u8]>::len), Ok(95));
    assert_eq!(seed_bytes(""), Ok(&b""[..]));
}

#[test]
fn test_seed_bytes_rejects_other_characters() {
    assert_eq!(
        seed_bytes("line\n"),
        Err(SeedError::NonPrintableAscii {
            index: 4,
            found: '\n'
        })
    );
    assert!(seed_bytes("\u{7f}").is_err());
    assert!(seed_bytes("d\u{e9}j\u{e0}").is_err());
}

//! Alea generator
//!
//! Johannes Baagøe's generator designed for efficiency with `f64`
//! arithmetic, based on George Marsaglia's multiply-with-carry (MWC).
//!
//! # Algorithm
//!
//! The state holds 96 bits of entropy as three 32-bit fractions. Each step
//! computes `t = MULTIPLIER * seed0 + carry * 2^-32`, keeps the integer part
//! as the new carry and the fractional part as the newest seed. With
//! `a = 2_091_639` and 96 bits of state the period is close to
//! `a * 2^95 ≈ 2^116`.
//!
//! Seeds are derived differently from the classic implementation, so the
//! sequences differ from it.

use super::{Engine, EngineKind, MutRand};
use crate::plain::{require, AleaPlain, PlainState};
use crate::util::conversion::{is_fract32, u32_to_fraction};
use crate::util::mash::mash_array;
use log::debug;
use serde::{Deserialize, Serialize};

/// Prime below 2^21: `MULTIPLIER * 2^32` stays exactly representable in
/// an `f64`, so no precision is lost in a step.
pub(crate) const MULTIPLIER: f64 = 2_091_639.0;

const INITIAL_CARRY: u32 = 1;

/// Alea generator state
///
/// # Example
/// ```
/// use replayable_random_core_rs::{Alea, Engine, MutRand};
///
/// let mut g = Alea::from_seed("seed").unwrap();
/// assert_eq!(g.next_u32(), 149261188);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlainState", into = "PlainState")]
pub struct Alea {
    /// At most `MULTIPLIER` after any step
    carry: u32,
    seed0: f64,
    seed1: f64,
    seed2: f64,
}

impl Alea {
    /// State seeded with three hash words
    pub(crate) fn from_words(words: [u32; 3]) -> Self {
        Self {
            carry: INITIAL_CARRY,
            seed0: u32_to_fraction(words[0]),
            seed1: u32_to_fraction(words[1]),
            seed2: u32_to_fraction(words[2]),
        }
    }

    pub(crate) fn plain(&self) -> AleaPlain {
        AleaPlain {
            carry: self.carry,
            seed0: self.seed0,
            seed1: self.seed1,
            seed2: self.seed2,
        }
    }

    pub(crate) fn from_alea_plain(plain: &AleaPlain) -> Option<Self> {
        let label = EngineKind::Alea.label();
        // Any carry is accepted: its fraction stays below 1, so a step never
        // carries more than MULTIPLIER.
        require(
            is_fract32(plain.seed0) && is_fract32(plain.seed1) && is_fract32(plain.seed2),
            label,
            "seeds must be 32-bit fractions in [0, 1)",
        )?;
        Some(Self {
            carry: plain.carry,
            seed0: plain.seed0,
            seed1: plain.seed1,
            seed2: plain.seed2,
        })
    }
}

impl MutRand for Alea {
    fn next_fract32(&mut self) -> f64 {
        let t = MULTIPLIER * self.seed0 + u32_to_fraction(self.carry);
        // 0 <= t < MULTIPLIER + 1
        self.carry = t as u32;
        self.seed0 = self.seed1;
        self.seed1 = self.seed2;
        self.seed2 = t - f64::from(self.carry);
        self.seed2
    }
}

impl Engine for Alea {
    const KIND: EngineKind = EngineKind::Alea;

    fn from_bytes(seed: &[u8]) -> Self {
        debug!("Seeding alea from {} bytes", seed.len());
        Self::from_words(mash_array(seed))
    }

    fn to_plain(&self) -> PlainState {
        PlainState::Alea(self.plain())
    }

    fn from_plain(plain: &PlainState) -> Option<Self> {
        match plain {
            PlainState::Alea(p) => Self::from_alea_plain(p),
            other => {
                debug!("Rejected plain alea state: found type {}", other.label());
                None
            }
        }
    }
}

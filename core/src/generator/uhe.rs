//! Ultra-High-Entropy (UHE) generator
//!
//! Proposed by Gibson Research Corporation as an extension of Alea to a
//! multi-word multiply-with-carry. The 1536 bits of entropy are held as 48
//! unsigned 32-bit words (the classic version uses `f64` fractions).
//!
//! # Algorithm
//!
//! Words are produced in batches: once all 48 words have been handed out,
//! the whole buffer is regenerated in place, each word depending on the
//! carry propagated from the previous one. With `a = 1_768_863` the period
//! is close to `a * 2^1535 ≈ 2^1556`.
//!
//! # Copy-on-write
//!
//! The buffer is only written during regeneration, so a fork shares it until
//! one side regenerates; `Rc::make_mut` copies it at that point if it is
//! still shared.

use super::{Engine, EngineKind, MutRand};
use crate::plain::{require, PlainState, UhePlain};
use crate::util::conversion::{fraction_to_u32, u32_to_fraction};
use crate::util::mash::mash_array;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Prime below 2^21, see the Alea multiplier.
///
/// Proposed choices: 187884, 686118, 898134, 1104375, 1250205, 1460910, 1768863
const MULTIPLIER: f64 = 1_768_863.0;

const INITIAL_CARRY: u32 = 1;

/// Number of 32-bit words of entropy
pub const ORDER: usize = 48;

/// UHE generator state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlainState", into = "PlainState")]
pub struct Uhe {
    carry: u32,
    seeds: Rc<[u32; ORDER]>,
    /// Next word to hand out; `ORDER` means the buffer is exhausted
    phase: usize,
}

/// Regenerate every word of `seeds`, returning the final carry
fn pregenerate(seeds: &mut [u32; ORDER], carry: u32) -> u32 {
    let mut carry = carry;
    for seed in seeds.iter_mut() {
        let t = MULTIPLIER * u32_to_fraction(*seed) + u32_to_fraction(carry);
        carry = t as u32;
        *seed = fraction_to_u32(t - f64::from(carry));
    }
    carry
}

impl Uhe {
    /// Words not yet handed out since the last regeneration
    pub fn remaining(&self) -> usize {
        ORDER - self.phase
    }

    /// Does this state share its buffer with a fork?
    pub fn is_shared(&self) -> bool {
        Rc::strong_count(&self.seeds) > 1
    }
}

impl MutRand for Uhe {
    fn next_u32(&mut self) -> u32 {
        if self.phase == ORDER {
            let seeds = Rc::make_mut(&mut self.seeds);
            self.carry = pregenerate(seeds, self.carry);
            self.phase = 0;
            trace!("Regenerated uhe buffer, carry {}", self.carry);
        }
        let value = self.seeds[self.phase];
        self.phase += 1;
        value
    }
}

impl Engine for Uhe {
    const KIND: EngineKind = EngineKind::Uhe;

    fn from_bytes(seed: &[u8]) -> Self {
        debug!("Seeding uhe from {} bytes", seed.len());
        Self {
            carry: INITIAL_CARRY,
            seeds: Rc::new(mash_array(seed)),
            phase: ORDER,
        }
    }

    fn to_plain(&self) -> PlainState {
        PlainState::Uhe(UhePlain {
            carry: self.carry,
            seeds: self.seeds.to_vec(),
            phase: self.phase as u32,
        })
    }

    fn from_plain(plain: &PlainState) -> Option<Self> {
        let label = Self::KIND.label();
        let PlainState::Uhe(p) = plain else {
            debug!("Rejected plain {} state: found type {}", label, plain.label());
            return None;
        };
        require(p.carry <= i32::MAX as u32, label, "carry must fit in an i32")?;
        require(p.seeds.len() == ORDER, label, "seeds must hold 48 words")?;
        require(p.phase as usize <= ORDER, label, "phase out of range")?;
        let seeds = <[u32; ORDER]>::try_from(p.seeds.as_slice()).ok()?;
        Some(Self {
            carry: p.carry,
            seeds: Rc::new(seeds),
            phase: p.phase as usize,
        })
    }
}

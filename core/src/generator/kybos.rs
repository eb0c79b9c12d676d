//! Kybos generator
//!
//! Johannes Baagøe's combination of Alea with a variant of the Bays-Durham
//! shuffle. 256 bits of entropy are held as eight 32-bit fractions on top of
//! the embedded Alea state.
//!
//! # Algorithm
//!
//! A regeneration walks the seed table starting at the current phase: the
//! seed at the phase is decreased (modulo 1) by an Alea output and the next
//! phase is picked from the updated seed. The walk stops as soon as it comes
//! back to a phase it already visited, so a batch holds between 1 and 8
//! values. Draws then replay the same walk, handing out the updated seeds.

use super::alea::Alea;
use super::{Engine, EngineKind, MutRand};
use crate::plain::{require, KybosPlain, PlainState};
use crate::util::conversion::{fraction_to_bounded_u32, is_fract32, u32_to_fraction};
use crate::util::mash::mash_array;
use crate::util::u4_set::U4Set;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Number of 32-bit fractions of entropy
///
/// At most 16: visited phases are tracked in a [`U4Set`].
pub const ORDER: usize = 8;

/// Kybos generator state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlainState", into = "PlainState")]
pub struct Kybos {
    subgenerator: Alea,
    seeds: Rc<[f64; ORDER]>,
    /// Index of the next seed to hand out
    phase: usize,
    /// Values left in the current batch
    consumable: usize,
}

/// Phase selected by a seed
#[inline]
fn next_phase(seed: f64) -> usize {
    fraction_to_bounded_u32(0, ORDER as u32, seed) as usize
}

/// Shuffle from `start` until a phase repeats, returning the batch size
fn pregenerate(seeds: &mut [f64; ORDER], subgenerator: &mut Alea, start: usize) -> usize {
    let mut visited = U4Set::singleton(start);
    let mut phase = start;
    let mut consumable = 0;
    loop {
        let mut seed = seeds[phase] - subgenerator.next_fract32();
        if seed < 0.0 {
            seed += 1.0;
        }
        seeds[phase] = seed;

        visited = visited.with(phase);
        phase = next_phase(seed);
        consumable += 1;
        if visited.contains(phase) {
            break;
        }
    }
    consumable
}

impl Kybos {
    /// Values left in the current batch
    pub fn consumable(&self) -> usize {
        self.consumable
    }

    /// Does this state share its seed table with a fork?
    pub fn is_shared(&self) -> bool {
        Rc::strong_count(&self.seeds) > 1
    }
}

impl MutRand for Kybos {
    fn next_fract32(&mut self) -> f64 {
        if self.consumable == 0 {
            let seeds = Rc::make_mut(&mut self.seeds);
            self.consumable = pregenerate(seeds, &mut self.subgenerator, self.phase);
            trace!("Shuffled kybos table, batch of {}", self.consumable);
        }
        let value = self.seeds[self.phase];
        self.phase = next_phase(value);
        self.consumable -= 1;
        value
    }
}

impl Engine for Kybos {
    const KIND: EngineKind = EngineKind::Kybos;

    fn from_bytes(seed: &[u8]) -> Self {
        debug!("Seeding kybos from {} bytes", seed.len());
        let words: [u32; 3 + ORDER] = mash_array(seed);
        Self {
            subgenerator: Alea::from_words([words[0], words[1], words[2]]),
            seeds: Rc::new(std::array::from_fn(|i| u32_to_fraction(words[3 + i]))),
            phase: 0,
            consumable: 0,
        }
    }

    fn to_plain(&self) -> PlainState {
        PlainState::Kybos(KybosPlain {
            subprng: Box::new(PlainState::Alea(self.subgenerator.plain())),
            seeds: self.seeds.to_vec(),
            phase: self.phase as u32,
            consumable: self.consumable as u32,
        })
    }

    fn from_plain(plain: &PlainState) -> Option<Self> {
        let label = Self::KIND.label();
        let PlainState::Kybos(p) = plain else {
            debug!("Rejected plain {} state: found type {}", label, plain.label());
            return None;
        };
        require((p.phase as usize) < ORDER, label, "phase out of range")?;
        require((p.consumable as usize) < ORDER, label, "consumable out of range")?;
        require(p.seeds.len() == ORDER, label, "seeds must hold 8 fractions")?;
        require(
            p.seeds.iter().all(|&s| is_fract32(s)),
            label,
            "seeds must be 32-bit fractions in [0, 1)",
        )?;
        let subgenerator = Alea::from_plain(&p.subprng)?;
        let seeds = <[f64; ORDER]>::try_from(p.seeds.as_slice()).ok()?;
        Some(Self {
            subgenerator,
            seeds: Rc::new(seeds),
            phase: p.phase as usize,
            consumable: p.consumable as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Uhe;

    #[test]
    fn test_seeding_uses_eleven_words() {
        let g = Kybos::from_bytes(b"seed");
        let words: [u32; 11] = mash_array(b"seed");
        assert_eq!(g.subgenerator, Alea::from_words([words[0], words[1], words[2]]));
        assert_eq!(g.seeds[0], u32_to_fraction(words[3]));
        assert_eq!(g.seeds[ORDER - 1], u32_to_fraction(words[10]));
        assert_eq!((g.phase, g.consumable), (0, 0));
    }

    #[test]
    fn test_batch_size_is_bounded_by_order() {
        let mut g = Kybos::from_bytes(b"batches");
        for _ in 0..1_000 {
            if g.consumable == 0 {
                let seeds = Rc::make_mut(&mut g.seeds);
                let batch = pregenerate(seeds, &mut g.subgenerator, g.phase);
                assert!((1..=ORDER).contains(&batch), "batch of {}", batch);
                g.consumable = batch;
            }
            g.next_fract32();
            assert!(g.phase < ORDER);
            assert!(g.consumable < ORDER);
        }
    }

    #[test]
    fn test_draws_follow_the_shuffle_walk() {
        let mut g = Kybos::from_bytes(b"walk");
        g.next_fract32();
        while g.consumable == 0 {
            g.next_fract32();
        }
        let phase = g.phase;
        let expected = g.seeds[phase];
        assert_eq!(g.next_fract32(), expected);
        assert_eq!(g.phase, next_phase(expected));
    }

    #[test]
    fn test_fork_copies_table_on_shuffle() {
        let mut g = Kybos::from_bytes(b"seed");
        let fork = g.fork();
        assert!(g.is_shared());
        g.next_fract32();
        assert!(!g.is_shared());
        assert_eq!(fork.consumable, 0);
        assert_eq!(fork, Kybos::from_bytes(b"seed"));
    }

    #[test]
    fn test_subprng_is_validated() {
        let mut plain = match Kybos::from_bytes(b"seed").to_plain() {
            PlainState::Kybos(p) => p,
            other => panic!("unexpected plain state {:?}", other),
        };
        plain.subprng = Box::new(Uhe::from_bytes(b"seed").to_plain());
        assert!(Kybos::from_plain(&PlainState::Kybos(plain)).is_none());
    }
}

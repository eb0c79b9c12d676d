//! Generator engines
//!
//! Three multiply-with-carry based engines share one capability set:
//! seeding from bytes, validation from plain data, a step function producing
//! raw bits, and copy-on-write forking.
//!
//! - **alea**: 3-word multiply-with-carry, native output is a fraction
//! - **uhe**: 48-word multiply-with-carry, native output is a u32 word
//! - **kybos**: Alea feeding a Bays-Durham style shuffle over 8 fractions
//!
//! # Forking
//!
//! Forking is `Clone`. Array-backed engines keep their seeds behind an `Rc`
//! and copy them lazily, on the first regeneration of the buffer by a side
//! that does not own it exclusively. `Rc` makes these states `!Send`: a fork
//! cannot be mutated from another thread.

mod alea;
mod kybos;
mod uhe;

pub use alea::Alea;
pub use kybos::Kybos;
pub use uhe::Uhe;

use crate::plain::{InvalidStateError, PlainState};
use crate::util::conversion::{fraction_to_u32, u32_to_fraction};
use crate::util::seed::{seed_bytes, SeedError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

/// Mutable generator state
///
/// Implementors override at least one of [`MutRand::next_u32`] and
/// [`MutRand::next_fract32`]; the other is derived from it.
pub trait MutRand: Clone {
    /// Random unsigned 32-bit word
    fn next_u32(&mut self) -> u32 {
        fraction_to_u32(self.next_fract32())
    }

    /// Random float in [0, 1) with 32 significant bits
    fn next_fract32(&mut self) -> f64 {
        u32_to_fraction(self.next_u32())
    }

    /// Copy-on-write duplicate of this state
    ///
    /// Draws from the fork never change this state and vice versa.
    fn fork(&self) -> Self {
        self.clone()
    }

    /// Run `f` on a fork and return its result with the advanced fork
    ///
    /// This is the value-semantics entry point: `self` is left untouched
    /// and can be derived from again.
    ///
    /// # Example
    /// ```
    /// use replayable_random_core_rs::{Alea, Engine, MutRand};
    ///
    /// let g = Alea::from_seed("seed").unwrap();
    /// let (a, next) = g.derive(|m| m.next_u32());
    /// let (b, _) = g.derive(|m| m.next_u32());
    /// assert_eq!(a, b);
    /// assert_ne!(next, g);
    /// ```
    fn derive<T, F>(&self, f: F) -> (T, Self)
    where
        F: FnOnce(&mut Self) -> T,
    {
        let mut forked = self.fork();
        let value = f(&mut forked);
        (value, forked)
    }
}

/// Engine identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    Alea,
    Uhe,
    Kybos,
}

impl EngineKind {
    /// Plain-data `"type"` label
    pub fn label(self) -> &'static str {
        match self {
            EngineKind::Alea => "alea",
            EngineKind::Uhe => "uhe",
            EngineKind::Kybos => "kybos",
        }
    }
}

/// Engine name that matches no engine
#[derive(Debug, Error, PartialEq)]
#[error("Unknown engine: {0}")]
pub struct UnknownEngineError(pub String);

impl FromStr for EngineKind {
    type Err = UnknownEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alea" => Ok(EngineKind::Alea),
            "uhe" => Ok(EngineKind::Uhe),
            "kybos" => Ok(EngineKind::Kybos),
            other => Err(UnknownEngineError(other.to_string())),
        }
    }
}

/// A seedable, persistable generator engine
pub trait Engine: MutRand + Sized {
    const KIND: EngineKind;

    /// State derived from arbitrary seed bytes
    fn from_bytes(seed: &[u8]) -> Self;

    /// State derived from a printable ASCII seed
    fn from_seed(seed: &str) -> Result<Self, SeedError> {
        Ok(Self::from_bytes(seed_bytes(seed)?))
    }

    /// Plain representation of the current state
    fn to_plain(&self) -> PlainState;

    /// State from its plain representation, `None` if malformed
    fn from_plain(plain: &PlainState) -> Option<Self>;

    /// State from untyped data, `None` if malformed
    fn from_plain_value(value: &Value) -> Option<Self> {
        PlainState::from_value(value).and_then(|plain| Self::from_plain(&plain))
    }
}

macro_rules! impl_plain_conversions {
    ($engine:ty) => {
        impl From<$engine> for PlainState {
            fn from(g: $engine) -> Self {
                g.to_plain()
            }
        }

        impl TryFrom<PlainState> for $engine {
            type Error = InvalidStateError;

            fn try_from(plain: PlainState) -> Result<Self, Self::Error> {
                <$engine as Engine>::from_plain(&plain).ok_or(InvalidStateError {
                    label: <$engine as Engine>::KIND.label(),
                })
            }
        }
    };
}

impl_plain_conversions!(Alea);
impl_plain_conversions!(Uhe);
impl_plain_conversions!(Kybos);

// ============================================================================
// Closed set of engines
// ============================================================================

/// Any of the engines, selected at runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlainState", into = "PlainState")]
pub enum Generator {
    Alea(Alea),
    Uhe(Uhe),
    Kybos(Kybos),
}

impl Generator {
    /// State of engine `kind` derived from seed bytes
    pub fn from_bytes(kind: EngineKind, seed: &[u8]) -> Self {
        match kind {
            EngineKind::Alea => Generator::Alea(Alea::from_bytes(seed)),
            EngineKind::Uhe => Generator::Uhe(Uhe::from_bytes(seed)),
            EngineKind::Kybos => Generator::Kybos(Kybos::from_bytes(seed)),
        }
    }

    /// State of engine `kind` derived from a printable ASCII seed
    ///
    /// # Example
    /// ```
    /// use replayable_random_core_rs::{EngineKind, Generator};
    ///
    /// assert!(Generator::from_seed(EngineKind::Uhe, "seed").is_ok());
    /// assert!(Generator::from_seed(EngineKind::Uhe, "caf\u{e9}").is_err());
    /// ```
    pub fn from_seed(kind: EngineKind, seed: &str) -> Result<Self, SeedError> {
        Ok(Self::from_bytes(kind, seed_bytes(seed)?))
    }

    pub fn kind(&self) -> EngineKind {
        match self {
            Generator::Alea(_) => EngineKind::Alea,
            Generator::Uhe(_) => EngineKind::Uhe,
            Generator::Kybos(_) => EngineKind::Kybos,
        }
    }

    pub fn to_plain(&self) -> PlainState {
        match self {
            Generator::Alea(g) => g.to_plain(),
            Generator::Uhe(g) => g.to_plain(),
            Generator::Kybos(g) => g.to_plain(),
        }
    }

    /// State of whichever engine `plain` describes, `None` if malformed
    pub fn from_plain(plain: &PlainState) -> Option<Self> {
        match plain {
            PlainState::Alea(_) => Alea::from_plain(plain).map(Generator::Alea),
            PlainState::Uhe(_) => Uhe::from_plain(plain).map(Generator::Uhe),
            PlainState::Kybos(_) => Kybos::from_plain(plain).map(Generator::Kybos),
        }
    }

    /// State from untyped data, `None` if malformed
    pub fn from_plain_value(value: &Value) -> Option<Self> {
        PlainState::from_value(value).and_then(|plain| Self::from_plain(&plain))
    }
}

impl MutRand for Generator {
    fn next_u32(&mut self) -> u32 {
        match self {
            Generator::Alea(g) => g.next_u32(),
            Generator::Uhe(g) => g.next_u32(),
            Generator::Kybos(g) => g.next_u32(),
        }
    }

    fn next_fract32(&mut self) -> f64 {
        match self {
            Generator::Alea(g) => g.next_fract32(),
            Generator::Uhe(g) => g.next_fract32(),
            Generator::Kybos(g) => g.next_fract32(),
        }
    }
}

impl From<Alea> for Generator {
    fn from(g: Alea) -> Self {
        Generator::Alea(g)
    }
}

impl From<Uhe> for Generator {
    fn from(g: Uhe) -> Self {
        Generator::Uhe(g)
    }
}

impl From<Kybos> for Generator {
    fn from(g: Kybos) -> Self {
        Generator::Kybos(g)
    }
}

impl From<Generator> for PlainState {
    fn from(g: Generator) -> Self {
        g.to_plain()
    }
}

impl TryFrom<PlainState> for Generator {
    type Error = InvalidStateError;

    fn try_from(plain: PlainState) -> Result<Self, Self::Error> {
        Generator::from_plain(&plain).ok_or(InvalidStateError {
            label: plain.label(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind_seeds_matching_variant() {
        for kind in [EngineKind::Alea, EngineKind::Uhe, EngineKind::Kybos] {
            let g = Generator::from_bytes(kind, b"seed");
            assert_eq!(g.kind(), kind);
            assert_eq!(g.to_plain().label(), kind.label());
        }
    }

    #[test]
    fn test_generator_dispatches_to_engine() {
        let mut alea = Alea::from_bytes(b"seed");
        let mut g = Generator::from(alea);
        for _ in 0..10 {
            assert_eq!(g.next_u32(), alea.next_u32());
        }
    }

    #[test]
    fn test_engine_names_parse() {
        for kind in [EngineKind::Alea, EngineKind::Uhe, EngineKind::Kybos] {
            assert_eq!(kind.label().parse::<EngineKind>(), Ok(kind));
        }
        assert_eq!(
            "Alea".parse::<EngineKind>(),
            Err(UnknownEngineError("Alea".to_string()))
        );
    }

    #[test]
    fn test_default_kind_is_alea() {
        assert_eq!(EngineKind::default(), EngineKind::Alea);
    }
}

//! Sequential access to a generator
//!
//! A [`RandomStream`] exclusively owns one generator state and advances it
//! on every draw. Use it when values are consumed one after another; use
//! the pure [`Distribution::sample`] flavor when states are passed around
//! as values.
//!
//! # Determinism
//!
//! Same engine + same seed → same sequence of values. A stream can be
//! checkpointed with [`RandomStream::to_plain`] and resumed with
//! [`RandomStream::from_plain`] at exactly the same point.

use crate::distrib::{
    Bytes, DistribError, Distribution, Fill, Fract53, I32Between, I54, U32Between, I32, U32,
};
use crate::generator::{EngineKind, Generator, MutRand};
use crate::plain::PlainState;
use crate::util::conversion::{fraction_to_bounded_i32, fraction_to_bounded_u32};
use crate::util::seed::SeedError;
use serde_json::Value;

/// Stateful seeded random stream
///
/// # Example
/// ```
/// use replayable_random_core_rs::{EngineKind, RandomStream};
///
/// let mut stream = RandomStream::from_seed(EngineKind::Alea, "seed").unwrap();
/// assert_eq!(stream.next_u32(), 149261188);
///
/// let die = stream.next_u32_between(1, 7);
/// assert!((1..7).contains(&die));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RandomStream<G: MutRand = Generator> {
    state: G,
}

impl RandomStream<Generator> {
    /// Stream of engine `kind` seeded with a printable ASCII string
    ///
    /// # Errors
    /// `NonPrintableAscii` if `seed` contains anything else
    pub fn from_seed(kind: EngineKind, seed: &str) -> Result<Self, SeedError> {
        Generator::from_seed(kind, seed).map(Self::new)
    }

    /// Stream of engine `kind` seeded with arbitrary bytes
    pub fn from_bytes(kind: EngineKind, seed: &[u8]) -> Self {
        Self::new(Generator::from_bytes(kind, seed))
    }

    /// Stream resuming from untyped plain data, `None` if malformed
    pub fn from_plain(value: &Value) -> Option<Self> {
        Generator::from_plain_value(value).map(Self::new)
    }

    /// Plain representation of the current state
    pub fn to_plain(&self) -> PlainState {
        self.state.to_plain()
    }

    pub fn kind(&self) -> EngineKind {
        self.state.kind()
    }
}

impl<G: MutRand> RandomStream<G> {
    /// Stream taking ownership of `state`
    pub fn new(state: G) -> Self {
        Self { state }
    }

    /// Stream starting from a fork of `state`
    ///
    /// Drawing from the stream never changes `state`.
    pub fn from_state(state: &G) -> Self {
        Self::new(state.fork())
    }

    /// Current generator state
    pub fn state(&self) -> &G {
        &self.state
    }

    pub fn into_state(self) -> G {
        self.state
    }

    /// Draw one value from `distribution`
    pub fn sample<T, D: Distribution<T>>(&mut self, distribution: &D) -> T {
        distribution.sample_mut(&mut self.state)
    }

    /// Random unsigned 32-bit integer
    pub fn next_u32(&mut self) -> u32 {
        self.sample(&U32)
    }

    /// Random signed 32-bit integer
    pub fn next_i32(&mut self) -> i32 {
        self.sample(&I32)
    }

    /// Random safe integer (54 bits, sign included)
    pub fn next_i54(&mut self) -> i64 {
        self.sample(&I54)
    }

    /// Random float in [0, 1) with 32 significant bits
    pub fn next_fract32(&mut self) -> f64 {
        self.state.next_fract32()
    }

    /// Random float in [0, 1) with 53 significant bits
    pub fn next_fract53(&mut self) -> f64 {
        self.sample(&Fract53)
    }

    /// Random unsigned integer in `[low, exclusive_high)`
    ///
    /// # Panics
    /// Panics if `low >= exclusive_high`
    pub fn next_u32_between(&mut self, low: u32, exclusive_high: u32) -> u32 {
        assert!(low < exclusive_high, "low must be less than exclusive_high");
        fraction_to_bounded_u32(low, exclusive_high, self.state.next_fract32())
    }

    /// Random signed integer in `[low, exclusive_high)`
    ///
    /// # Panics
    /// Panics if `low >= exclusive_high`
    pub fn next_i32_between(&mut self, low: i32, exclusive_high: i32) -> i32 {
        assert!(low < exclusive_high, "low must be less than exclusive_high");
        fraction_to_bounded_i32(low, exclusive_high, self.state.next_fract32())
    }

    /// Random unsigned integer in `[low, exclusive_high)`, for bounds that
    /// come from data rather than code
    ///
    /// # Errors
    /// `EmptyRange` if `low >= exclusive_high`
    pub fn try_next_u32_between(
        &mut self,
        low: u32,
        exclusive_high: u32,
    ) -> Result<u32, DistribError> {
        Ok(self.sample(&U32Between::new(low, exclusive_high)?))
    }

    /// Signed counterpart of [`RandomStream::try_next_u32_between`]
    ///
    /// # Errors
    /// `EmptyRange` if `low >= exclusive_high`
    pub fn try_next_i32_between(
        &mut self,
        low: i32,
        exclusive_high: i32,
    ) -> Result<i32, DistribError> {
        Ok(self.sample(&I32Between::new(low, exclusive_high)?))
    }

    /// `n` random unsigned 32-bit integers
    pub fn next_u32_array(&mut self, n: usize) -> Vec<u32> {
        self.sample(&Fill::new(U32, n))
    }

    /// `n` random bytes
    pub fn next_bytes(&mut self, n: usize) -> Vec<u8> {
        self.sample(&Bytes::new(n))
    }
}

impl<G: MutRand> From<G> for RandomStream<G> {
    fn from(state: G) -> Self {
        Self::new(state)
    }
}

//! Distributions over a generator's raw bit stream
//!
//! Every distribution comes in two flavors:
//!
//! - **mutating** ([`Distribution::sample_mut`]): advances a caller-owned
//!   state in place
//! - **pure** ([`Distribution::sample`]): leaves the given state untouched
//!   and returns the value together with the next state
//!
//! The pure flavor forks the state and runs the mutating flavor on the
//! fork, so both always produce the same values.
//!
//! # Example
//! ```
//! use replayable_random_core_rs::distrib::{Distribution, Fill, U32Between};
//! use replayable_random_core_rs::{Alea, Engine};
//!
//! let g = Alea::from_seed("seed").unwrap();
//! let dice = Fill::new(U32Between::new(1, 7).unwrap(), 10);
//!
//! let (rolls, next): (Vec<u32>, _) = dice.sample(&g);
//! let (again, _): (Vec<u32>, _) = dice.sample(&g);
//! assert_eq!(rolls, again);
//! assert!(rolls.iter().all(|r| (1..7).contains(r)));
//! # let _ = next;
//! ```

mod bytes;
mod uniform;

pub use bytes::{Base64Bytes, Bytes};
pub use uniform::{Fract32, Fract53, I32Between, I32, I54, U32, U32Between};

use crate::generator::MutRand;
use thiserror::Error;

/// Errors raised when building a distribution
#[derive(Debug, Error, PartialEq)]
pub enum DistribError {
    #[error("Empty range: low ({low}) must be less than exclusive high ({high})")]
    EmptyRange { low: i64, high: i64 },
}

/// A way to draw values of type `T` from a generator
pub trait Distribution<T> {
    /// Draw a value, advancing `g`
    fn sample_mut<G: MutRand>(&self, g: &mut G) -> T;

    /// Draw a value from a fork of `g`, returning it with the advanced fork
    fn sample<G: MutRand>(&self, g: &G) -> (T, G) {
        g.derive(|forked| self.sample_mut(forked))
    }
}

/// Fixed-length array of independent draws
///
/// Element 0 is drawn first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill<D> {
    element: D,
    len: usize,
}

impl<D> Fill<D> {
    pub fn new(element: D, len: usize) -> Self {
        Self { element, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T, D: Distribution<T>> Distribution<Vec<T>> for Fill<D> {
    fn sample_mut<G: MutRand>(&self, g: &mut G) -> Vec<T> {
        (0..self.len).map(|_| self.element.sample_mut(g)).collect()
    }
}

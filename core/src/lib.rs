//! Replayable Random Core - Rust Engine
//!
//! Deterministic, seedable pseudo-random number generators and uniform
//! distributions for reproducible simulations, tests and procedural
//! generation. Not suitable for cryptography.
//!
//! # Architecture
//!
//! - **util**: Numeric conversions, seed hashing, seed validation
//! - **generator**: Engines (Alea, UHE, Kybos) and the `MutRand` interface
//! - **plain**: Plain-data representation of generator states
//! - **distrib**: Typed distributions, mutating and pure flavors
//! - **stream**: Sequential access wrapper around one generator
//! - **config**: Serde-driven stream configuration
//!
//! # Critical Invariants
//!
//! 1. Same engine + same seed → same sequence, on every platform
//! 2. Forking is copy-on-write: draws from a fork never affect the original
//! 3. Malformed persisted state is rejected whole, never half-loaded
//! 4. States are single-threaded (`!Send` for array-backed engines)

// Module declarations
pub mod config;
pub mod distrib;
pub mod generator;
pub mod plain;
pub mod stream;
pub mod util;

// Re-exports for convenience
pub use config::{ConfigError, Seed, StreamConfig};
pub use distrib::{DistribError, Distribution};
pub use generator::{
    Alea, Engine, EngineKind, Generator, Kybos, MutRand, Uhe, UnknownEngineError,
};
pub use plain::{InvalidStateError, PlainState};
pub use stream::RandomStream;
pub use util::seed::SeedError;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn replayable_random_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::stream::PyRandomStream>()?;
    Ok(())
}

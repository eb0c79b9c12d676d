//! Stateless helpers shared by every generator
//!
//! - **conversion**: fraction/word mappings and wide value packing
//! - **mash**: seed hashing
//! - **seed**: seed string validation
//! - **u4_set**: small bitset used by the Kybos shuffle

pub mod conversion;
pub mod mash;
pub mod seed;
pub mod u4_set;

//! Python bindings
//!
//! Only compiled with the `pyo3` feature. States are `!Send`, so the
//! exported classes are pinned to the thread that created them.

pub mod stream;

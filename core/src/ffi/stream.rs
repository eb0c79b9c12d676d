//! PyO3 wrapper for RandomStream
//!
//! Exposes seeded streams to Python. Plain states cross the boundary as
//! JSON text so that Python can store them anywhere.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde_json::Value;

use crate::generator::EngineKind;
use crate::stream::RandomStream as RustRandomStream;

fn value_error(message: String) -> PyErr {
    PyErr::new::<PyValueError, _>(message)
}

/// Python wrapper for a Rust RandomStream
///
/// # Example (from Python)
///
/// ```python
/// from replayable_random._core import RandomStream
///
/// stream = RandomStream.from_seed("seed", engine="kybos")
/// roll = stream.next_u32_between(1, 7)
/// saved = stream.to_plain()
/// resumed = RandomStream.from_plain(saved)
/// ```
#[pyclass(name = "RandomStream", unsendable)]
pub struct PyRandomStream {
    inner: RustRandomStream,
}

#[pymethods]
impl PyRandomStream {
    /// Create a stream from a printable ASCII seed
    ///
    /// # Errors
    ///
    /// Raises ValueError if the engine is unknown or the seed is not
    /// printable ASCII
    #[staticmethod]
    #[pyo3(signature = (seed, engine = "alea"))]
    fn from_seed(seed: &str, engine: &str) -> PyResult<Self> {
        let kind: EngineKind = engine
            .parse()
            .map_err(|e| value_error(format!("{}", e)))?;
        let inner = RustRandomStream::from_seed(kind, seed)
            .map_err(|e| value_error(format!("Failed to seed stream: {}", e)))?;
        Ok(PyRandomStream { inner })
    }

    /// Resume a stream from the JSON produced by `to_plain`
    #[staticmethod]
    fn from_plain(json: &str) -> PyResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| value_error(format!("Plain state is not JSON: {}", e)))?;
        RustRandomStream::from_plain(&value)
            .map(|inner| PyRandomStream { inner })
            .ok_or_else(|| value_error("Invalid plain state".to_string()))
    }

    /// Current state as JSON text
    fn to_plain(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner.to_plain())
            .map_err(|e| value_error(format!("State serialization failed: {}", e)))
    }

    fn engine(&self) -> &'static str {
        self.inner.kind().label()
    }

    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_i32(&mut self) -> i32 {
        self.inner.next_i32()
    }

    fn next_i54(&mut self) -> i64 {
        self.inner.next_i54()
    }

    fn next_fract32(&mut self) -> f64 {
        self.inner.next_fract32()
    }

    fn next_fract53(&mut self) -> f64 {
        self.inner.next_fract53()
    }

    fn next_u32_between(&mut self, low: u32, exclusive_high: u32) -> PyResult<u32> {
        self.inner
            .try_next_u32_between(low, exclusive_high)
            .map_err(|e| value_error(format!("{}", e)))
    }

    fn next_i32_between(&mut self, low: i32, exclusive_high: i32) -> PyResult<i32> {
        self.inner
            .try_next_i32_between(low, exclusive_high)
            .map_err(|e| value_error(format!("{}", e)))
    }

    fn next_u32_array(&mut self, n: usize) -> Vec<u32> {
        self.inner.next_u32_array(n)
    }

    fn next_bytes(&mut self, n: usize) -> Vec<u8> {
        self.inner.next_bytes(n)
    }
}

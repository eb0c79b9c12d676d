//! Stream configuration
//!
//! Describes which engine to use and how to seed it, so that a stream can
//! be set up from a configuration file or an FFI dictionary.
//!
//! # Example
//! ```
//! use replayable_random_core_rs::config::StreamConfig;
//! use replayable_random_core_rs::EngineKind;
//!
//! let config = StreamConfig::from_json(r#"{ "engine": "kybos", "seed": "seed" }"#).unwrap();
//! assert_eq!(config.engine, EngineKind::Kybos);
//!
//! let mut stream = config.build().unwrap();
//! let _ = stream.next_u32();
//! ```

use crate::generator::EngineKind;
use crate::stream::RandomStream;
use crate::util::seed::SeedError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while turning a configuration into a stream
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid seed: {0}")]
    InvalidSeed(#[from] SeedError),

    #[error("Config parse error: {0}")]
    ParseError(String),
}

/// Seed material: a printable ASCII string or raw bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Text(String),
    Bytes(Vec<u8>),
}

/// Configuration of a single stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Engine to instantiate (Alea when omitted)
    #[serde(default)]
    pub engine: EngineKind,

    pub seed: Seed,
}

impl StreamConfig {
    pub fn new(engine: EngineKind, seed: Seed) -> Self {
        Self { engine, seed }
    }

    /// Parse a configuration from JSON
    ///
    /// # Errors
    /// `ParseError` if the text is not a valid configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json)
            .map_err(|e| ConfigError::ParseError(format!("Stream config parsing failed: {}", e)))
    }

    /// Create the configured stream
    ///
    /// # Errors
    /// `InvalidSeed` if a text seed is not printable ASCII
    pub fn build(&self) -> Result<RandomStream, ConfigError> {
        let stream = match &self.seed {
            Seed::Text(text) => RandomStream::from_seed(self.engine, text)?,
            Seed::Bytes(bytes) => RandomStream::from_bytes(self.engine, bytes),
        };
        Ok(stream)
    }
}

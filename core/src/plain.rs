//! Plain-data representation of generator states
//!
//! Enables persisting a generator and resuming it later from exactly the
//! same point in its sequence.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored state produces the same sequence as the
//!   state it was taken from
//! - **No partial states**: malformed data is rejected as a whole (`None`),
//!   never patched up or half-applied
//! - **No panics**: untrusted data is probed routinely, so validation only
//!   ever returns `None`

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

// ============================================================================
// Schema
// ============================================================================

/// Plain state of any generator, tagged by its `"type"` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlainState {
    Alea(AleaPlain),
    Uhe(UhePlain),
    Kybos(KybosPlain),
}

/// `{ "type": "alea", carry, seed0, seed1, seed2 }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AleaPlain {
    pub carry: u32,
    pub seed0: f64,
    pub seed1: f64,
    pub seed2: f64,
}

/// `{ "type": "uhe", carry, seeds, phase }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UhePlain {
    pub carry: u32,
    pub seeds: Vec<u32>,
    pub phase: u32,
}

/// `{ "type": "kybos", subprng, seeds, phase, consumable }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KybosPlain {
    /// Plain state of the embedded Alea generator
    pub subprng: Box<PlainState>,
    pub seeds: Vec<f64>,
    pub phase: u32,
    pub consumable: u32,
}

impl PlainState {
    /// Value of the `"type"` tag
    pub fn label(&self) -> &'static str {
        match self {
            PlainState::Alea(_) => "alea",
            PlainState::Uhe(_) => "uhe",
            PlainState::Kybos(_) => "kybos",
        }
    }

    /// Decode untyped data, `None` if it does not follow any schema
    ///
    /// # Example
    /// ```
    /// use replayable_random_core_rs::plain::PlainState;
    /// use serde_json::json;
    ///
    /// assert!(PlainState::from_value(&json!(null)).is_none());
    /// assert!(PlainState::from_value(&json!({})).is_none());
    ///
    /// let plain = PlainState::from_value(&json!({
    ///     "type": "alea", "carry": 1, "seed0": 0.5, "seed1": 0.25, "seed2": 0
    /// }));
    /// assert_eq!(plain.map(|p| p.label()), Some("alea"));
    /// ```
    pub fn from_value(value: &Value) -> Option<PlainState> {
        match PlainState::deserialize(value) {
            Ok(plain) => Some(plain),
            Err(e) => {
                debug!("Rejected plain state: {}", e);
                None
            }
        }
    }

    /// Encode as untyped data
    ///
    /// Produces the same document as serializing through serde, but is
    /// built field by field so that no error path exists.
    pub fn to_value(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("type".to_string(), Value::from(self.label()));
        match self {
            PlainState::Alea(p) => {
                fields.insert("carry".to_string(), Value::from(p.carry));
                fields.insert("seed0".to_string(), Value::from(p.seed0));
                fields.insert("seed1".to_string(), Value::from(p.seed1));
                fields.insert("seed2".to_string(), Value::from(p.seed2));
            }
            PlainState::Uhe(p) => {
                fields.insert("carry".to_string(), Value::from(p.carry));
                fields.insert("seeds".to_string(), Value::from(p.seeds.clone()));
                fields.insert("phase".to_string(), Value::from(p.phase));
            }
            PlainState::Kybos(p) => {
                fields.insert("subprng".to_string(), p.subprng.to_value());
                fields.insert("seeds".to_string(), Value::from(p.seeds.clone()));
                fields.insert("phase".to_string(), Value::from(p.phase));
                fields.insert("consumable".to_string(), Value::from(p.consumable));
            }
        }
        Value::Object(fields)
    }
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Error returned when plain data does not describe a reachable state
#[derive(Debug, Error, PartialEq)]
#[error("Invalid {label} state")]
pub struct InvalidStateError {
    pub label: &'static str,
}

/// `Some(())` when `condition` holds, otherwise log `reason` and fail
pub(crate) fn require(condition: bool, label: &str, reason: &str) -> Option<()> {
    if condition {
        Some(())
    } else {
        debug!("Rejected plain {} state: {}", label, reason);
        None
    }
}

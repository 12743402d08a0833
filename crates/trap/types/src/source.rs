//! Read boundary between the evaluator and the observation store.
//!
//! The evaluator never holds a concrete store; it collects through this
//! trait so the call can fail the way a remote read would. Test doubles
//! simulate an absent, reverting, or garbage-returning store.

use thiserror::Error;

use crate::observation::Observation;

/// Faults a read can surface at the store boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadFault {
    #[error("no code deployed at the store address")]
    NoCode,

    #[error("store read reverted: {reason}")]
    Reverted { reason: String },

    #[error("store returned {len} bytes, not a valid observation")]
    MalformedReturn { len: usize },
}

/// Something an evaluator can collect an observation from.
pub trait ObservationSource {
    /// Existence check: is there deployed logic behind this source?
    /// Collection must not attempt a read when this is false.
    fn deployed(&self) -> bool;

    /// Read the current observation. Any fault is reported as a value,
    /// never a panic; the collector degrades it to an empty sample.
    fn read_observation(&self) -> Result<Observation, ReadFault>;
}

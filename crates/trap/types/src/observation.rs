use serde::{Deserialize, Serialize};

/// One detector reading: a signed delta and the store-captured timestamp
/// (seconds since Unix epoch).
///
/// The wire encoding carries the delta in a full signed 32-byte word and the
/// timestamp in an unsigned one; `i128`/`u64` are the value ranges the host
/// side works with inside those words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    /// Signed measurement delta reported by the detector.
    pub delta: i128,
    /// Capture time, assigned by the store at write time.
    pub timestamp: u64,
}

impl Observation {
    pub fn new(delta: i128, timestamp: u64) -> Self {
        Self { delta, timestamp }
    }

    /// The value a store holds before its first write.
    pub fn zero() -> Self {
        Self {
            delta: 0,
            timestamp: 0,
        }
    }

    /// Magnitude of the delta, saturating at `i128::MAX`.
    pub fn magnitude(&self) -> i128 {
        self.delta.saturating_abs()
    }
}

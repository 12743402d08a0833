//! Fault-injection observation sources.
//!
//! Each double simulates one way a deployed store can fail the evaluator's
//! read: nothing deployed at all, a reverting read, or a return that is not
//! a valid observation.

use trap_types::{Observation, ObservationSource, ReadFault};

/// An address with no deployed logic behind it.
pub struct AbsentStore;

impl ObservationSource for AbsentStore {
    fn deployed(&self) -> bool {
        false
    }

    fn read_observation(&self) -> Result<Observation, ReadFault> {
        Err(ReadFault::NoCode)
    }
}

/// A store whose read call reverts every time.
pub struct RevertingStore {
    pub reason: String,
}

impl Default for RevertingStore {
    fn default() -> Self {
        Self {
            reason: "storage slot unreadable".into(),
        }
    }
}

impl ObservationSource for RevertingStore {
    fn deployed(&self) -> bool {
        true
    }

    fn read_observation(&self) -> Result<Observation, ReadFault> {
        Err(ReadFault::Reverted {
            reason: self.reason.clone(),
        })
    }
}

/// A store whose read returns bytes that do not decode as an observation.
pub struct MalformedStore {
    pub returned_len: usize,
}

impl ObservationSource for MalformedStore {
    fn deployed(&self) -> bool {
        true
    }

    fn read_observation(&self) -> Result<Observation, ReadFault> {
        Err(ReadFault::MalformedReturn {
            len: self.returned_len,
        })
    }
}

use serde::{Deserialize, Serialize};

use crate::codec::encode_observation;
use crate::observation::Observation;

/// Outcome of one evaluation pass over a sample window.
///
/// When `should_act` is true the payload is the canonical encoding of the
/// alerting observation, byte-identical to what the response executor's
/// action call consumes. When false the payload is empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub should_act: bool,
    pub payload: Vec<u8>,
}

impl Decision {
    /// The inert decision: no action, empty payload.
    pub fn hold() -> Self {
        Self {
            should_act: false,
            payload: Vec::new(),
        }
    }

    /// A positive decision carrying the alerting observation.
    pub fn respond(obs: &Observation) -> Self {
        Self {
            should_act: true,
            payload: encode_observation(obs).to_vec(),
        }
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::AccountId;

/// Notification emitted by the observation store on every successful write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationWritten {
    pub delta: i128,
    pub timestamp: u64,
    pub writer: AccountId,
}

/// The externally observable effect of a positive decision.
///
/// Append-only: records are created by the response executor and never
/// mutated or deleted. `seq` is the append position within the executor's
/// ledger, starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub seq: u64,
    pub id: Uuid,
    pub delta: i128,
    pub timestamp: u64,
    /// Wall-clock time the executor recorded the alert (milliseconds).
    pub recorded_at_ms: u64,
}

use std::sync::RwLock;

use uuid::Uuid;

use trap_types::{decode_observation, AlertRecord};

/// Append-only alert recorder invoked by the orchestrator on a positive
/// decision.
///
/// No caller restriction: the orchestrator's identity is trusted by
/// protocol convention. A hardened variant would hold an allow-list of
/// orchestrator identities and reject everyone else.
///
/// No dedup either — repeated identical payloads append repeated records;
/// cooldown is the orchestrator's concern.
#[derive(Default)]
pub struct ResponseExecutor {
    ledger: RwLock<Vec<AlertRecord>>,
}

impl ResponseExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an alert for the given observation fields. Infallible;
    /// returns the appended record.
    pub fn act(&self, delta: i128, timestamp: u64) -> AlertRecord {
        let mut ledger = self.ledger.write().unwrap_or_else(|e| e.into_inner());
        let record = AlertRecord {
            seq: ledger.len() as u64 + 1,
            id: Uuid::new_v4(),
            delta,
            timestamp,
            recorded_at_ms: now_ms(),
        };
        ledger.push(record);
        drop(ledger);

        tracing::info!(seq = record.seq, delta = %delta, timestamp, "alert recorded");
        record
    }

    /// Record an alert from an encoded decision payload.
    ///
    /// The payload must be the canonical fixed-width sample encoding — the
    /// same bytes a positive decision carries. Returns `None` without
    /// recording anything if it is not.
    pub fn act_encoded(&self, payload: &[u8]) -> Option<AlertRecord> {
        let obs = decode_observation(payload)?;
        Some(self.act(obs.delta, obs.timestamp))
    }

    /// All records appended so far, in append order.
    pub fn records(&self) -> Vec<AlertRecord> {
        self.ledger
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.ledger.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use trap_types::{encode_observation, Decision, Observation};

    #[test]
    fn act_appends_sequenced_records() {
        let executor = ResponseExecutor::new();
        assert!(executor.is_empty());

        let first = executor.act(600, 10);
        let second = executor.act(-900, 11);

        assert_eq!(first.seq, 1);
        assert_eq!(second.seq, 2);
        assert_eq!(executor.records(), vec![first, second]);
    }

    #[test]
    fn repeated_identical_payloads_append_repeated_records() {
        let executor = ResponseExecutor::new();
        executor.act(600, 10);
        executor.act(600, 10);

        let records = executor.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].delta, records[1].delta);
        assert_ne!(records[0].seq, records[1].seq);
    }

    #[test]
    fn act_encoded_consumes_a_positive_decision_payload() {
        let executor = ResponseExecutor::new();
        let obs = Observation::new(1_000, 77);

        let decision = Decision::respond(&obs);
        let record = executor.act_encoded(&decision.payload).unwrap();

        assert_eq!(record.delta, 1_000);
        assert_eq!(record.timestamp, 77);
    }

    #[test]
    fn act_encoded_rejects_malformed_payloads() {
        let executor = ResponseExecutor::new();
        assert!(executor.act_encoded(&[]).is_none());
        assert!(executor.act_encoded(&[1, 2, 3]).is_none());

        let mut trailing = encode_observation(&Observation::new(600, 1)).to_vec();
        trailing.push(0);
        assert!(executor.act_encoded(&trailing).is_none());

        assert!(executor.is_empty());
    }
}

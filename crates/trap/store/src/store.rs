use std::sync::{Arc, RwLock};

use trap_types::{AccountId, Observation, ObservationSource, ObservationWritten, ReadFault};

use crate::clock::Clock;
use crate::error::StoreError;

/// In-memory observation store: one slot, one authorized writer, any number
/// of readers.
///
/// The slot starts at `Observation::zero()` and every successful write
/// overwrites it as a whole. Lock poisoning is recovered by taking the
/// inner value; a write either fully lands or (on authorization failure)
/// leaves the slot untouched, so a poisoned lock never exposes a partial
/// observation.
pub struct ObservationStore {
    owner: AccountId,
    clock: Arc<dyn Clock>,
    slot: RwLock<Observation>,
}

impl ObservationStore {
    pub fn new(owner: AccountId, clock: Arc<dyn Clock>) -> Self {
        Self {
            owner,
            clock,
            slot: RwLock::new(Observation::zero()),
        }
    }

    /// The identity allowed to write.
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// Overwrite the stored observation with a new delta, stamping it with
    /// the store's clock. Rejects every caller but the owner, leaving the
    /// slot unchanged.
    pub fn write(
        &self,
        caller: AccountId,
        delta: i128,
    ) -> Result<ObservationWritten, StoreError> {
        if caller != self.owner {
            tracing::warn!(caller = %caller, owner = %self.owner, "rejected unauthorized write");
            return Err(StoreError::Unauthorized { caller });
        }

        let observation = Observation::new(delta, self.clock.now_unix());
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = observation;
        drop(slot);

        tracing::info!(
            delta = %observation.delta,
            timestamp = observation.timestamp,
            "observation written"
        );

        Ok(ObservationWritten {
            delta: observation.delta,
            timestamp: observation.timestamp,
            writer: caller,
        })
    }

    /// Current stored observation; the zero observation before any write.
    pub fn read(&self) -> Observation {
        *self.slot.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl ObservationSource for ObservationStore {
    fn deployed(&self) -> bool {
        true
    }

    fn read_observation(&self) -> Result<Observation, ReadFault> {
        Ok(self.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn store_at(now: u64) -> ObservationStore {
        ObservationStore::new(AccountId::repeat(0x01), Arc::new(FixedClock(now)))
    }

    #[test]
    fn starts_at_zero_observation() {
        let store = store_at(100);
        assert_eq!(store.read(), Observation::zero());
    }

    #[test]
    fn owner_write_overwrites_slot() {
        let store = store_at(100);
        let owner = store.owner();

        let event = store.write(owner, 600).unwrap();
        assert_eq!(event.delta, 600);
        assert_eq!(event.timestamp, 100);
        assert_eq!(event.writer, owner);
        assert_eq!(store.read(), Observation::new(600, 100));

        store.write(owner, -400).unwrap();
        assert_eq!(store.read(), Observation::new(-400, 100));
    }

    #[test]
    fn non_owner_write_is_rejected_and_state_unchanged() {
        let store = store_at(100);
        store.write(store.owner(), 5).unwrap();

        let intruder = AccountId::repeat(0xee);
        let error = store.write(intruder, 9_999).unwrap_err();
        assert_eq!(error, StoreError::Unauthorized { caller: intruder });
        assert_eq!(store.read(), Observation::new(5, 100));
    }

    #[test]
    fn timestamp_comes_from_the_store_clock() {
        let store = ObservationStore::new(AccountId::repeat(0x01), Arc::new(FixedClock(777)));
        store.write(store.owner(), 1).unwrap();
        assert_eq!(store.read().timestamp, 777);
    }

    #[test]
    fn source_read_reports_current_slot() {
        let store = store_at(50);
        assert!(store.deployed());
        assert_eq!(store.read_observation(), Ok(Observation::zero()));

        store.write(store.owner(), 42).unwrap();
        assert_eq!(store.read_observation(), Ok(Observation::new(42, 50)));
    }
}

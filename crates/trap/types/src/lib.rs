//! Shared type definitions for the trap protocol.
//!
//! This crate provides:
//! - the `Observation` value type and the zero observation
//! - the fixed-width two-word sample codec shared by all three components
//! - the `ObservationSource` read boundary the evaluator collects through
//! - `Decision`, `AlertRecord`, and the store's notification event

pub mod codec;
pub mod decision;
pub mod identity;
pub mod observation;
pub mod records;
pub mod source;

// Re-export primary types at crate root for ergonomic use.
pub use codec::{decode_observation, encode_observation, SAMPLE_WIDTH, WORD_BYTES};
pub use decision::Decision;
pub use identity::AccountId;
pub use observation::Observation;
pub use records::{AlertRecord, ObservationWritten};
pub use source::{ObservationSource, ReadFault};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_observation_round_trips() {
        let zero = Observation::zero();
        let encoded = encode_observation(&zero);
        assert_eq!(decode_observation(&encoded), Some(zero));
    }
}

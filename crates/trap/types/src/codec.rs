//! Fixed-width sample codec shared by store, evaluator, and responder.
//!
//! A sample is exactly two packed big-endian 32-byte words: the signed delta
//! word followed by the unsigned timestamp word. All three components agree
//! on this layout at compile time; there is no version byte and no framing.

use crate::observation::Observation;

/// Width of one encoded word (the reference encoding's native word size).
pub const WORD_BYTES: usize = 32;

/// Total width of one encoded sample: delta word + timestamp word.
pub const SAMPLE_WIDTH: usize = 2 * WORD_BYTES;

/// Encode an observation into its canonical fixed-width form.
///
/// The delta is sign-extended into the first word, the timestamp
/// zero-extended into the second.
pub fn encode_observation(obs: &Observation) -> [u8; SAMPLE_WIDTH] {
    let mut out = [0u8; SAMPLE_WIDTH];
    if obs.delta < 0 {
        out[..WORD_BYTES].fill(0xff);
    }
    out[WORD_BYTES - 16..WORD_BYTES].copy_from_slice(&obs.delta.to_be_bytes());
    out[SAMPLE_WIDTH - 8..].copy_from_slice(&obs.timestamp.to_be_bytes());
    out
}

/// Decode a sample, gating on the exact encoded width.
///
/// Returns `None` for any other length, including longer inputs — a valid
/// prefix followed by trailing garbage must not pass. For inputs of the
/// right length decoding is total: every bit pattern yields a value, read
/// from the low bytes of each word.
pub fn decode_observation(bytes: &[u8]) -> Option<Observation> {
    if bytes.len() != SAMPLE_WIDTH {
        return None;
    }

    let mut delta = [0u8; 16];
    delta.copy_from_slice(&bytes[WORD_BYTES - 16..WORD_BYTES]);
    let mut timestamp = [0u8; 8];
    timestamp.copy_from_slice(&bytes[SAMPLE_WIDTH - 8..]);

    Some(Observation {
        delta: i128::from_be_bytes(delta),
        timestamp: u64::from_be_bytes(timestamp),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_width_is_two_words() {
        let encoded = encode_observation(&Observation::new(1, 2));
        assert_eq!(encoded.len(), SAMPLE_WIDTH);
        assert_eq!(SAMPLE_WIDTH, 64);
    }

    #[test]
    fn negative_delta_sign_extends() {
        let encoded = encode_observation(&Observation::new(-1, 0));
        assert!(encoded[..WORD_BYTES].iter().all(|&b| b == 0xff));
    }

    #[test]
    fn positive_delta_zero_extends() {
        let encoded = encode_observation(&Observation::new(600, 0));
        assert!(encoded[..WORD_BYTES - 2].iter().all(|&b| b == 0));
        assert_eq!(&encoded[WORD_BYTES - 2..WORD_BYTES], &[0x02, 0x58]);
    }

    #[test]
    fn round_trip_extremes() {
        for delta in [i128::MIN, -1, 0, 1, i128::MAX] {
            for timestamp in [0u64, 1, u64::MAX] {
                let obs = Observation::new(delta, timestamp);
                assert_eq!(decode_observation(&encode_observation(&obs)), Some(obs));
            }
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(decode_observation(&[]), None);
        assert_eq!(decode_observation(&[0u8; 10]), None);
        assert_eq!(decode_observation(&[0u8; SAMPLE_WIDTH - 1]), None);
        assert_eq!(decode_observation(&[0u8; SAMPLE_WIDTH + 1]), None);
    }

    #[test]
    fn any_conforming_pattern_decodes() {
        let garbage = [0xa5u8; SAMPLE_WIDTH];
        let decoded = decode_observation(&garbage).unwrap();
        // Low 16 bytes of the first word, low 8 of the second.
        assert_eq!(decoded.delta, i128::from_be_bytes([0xa5; 16]));
        assert_eq!(decoded.timestamp, u64::from_be_bytes([0xa5; 8]));
    }
}

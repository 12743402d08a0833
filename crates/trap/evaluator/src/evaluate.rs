use trap_types::{
    decode_observation, encode_observation, Decision, ObservationSource, SAMPLE_WIDTH,
};

/// Fixed magnitude boundary beyond which an observation is anomalous.
/// Strict inequality: a delta of exactly `±ALERT_THRESHOLD` does not alert.
pub const ALERT_THRESHOLD: i128 = 500;

/// Collect one sample from the store, defensively.
///
/// The orchestrator treats a thrown failure as a hard fault, a different
/// path from a negative result, so every upstream problem is converted to
/// an empty sample instead: a source with nothing deployed behind it, a
/// reverting read, a malformed return. On success the sample is the
/// canonical `SAMPLE_WIDTH` encoding of the current observation.
pub fn collect<S: ObservationSource + ?Sized>(source: &S) -> Vec<u8> {
    if !source.deployed() {
        tracing::debug!("collect: no code behind observation source");
        return Vec::new();
    }

    match source.read_observation() {
        Ok(obs) => encode_observation(&obs).to_vec(),
        Err(fault) => {
            tracing::debug!(%fault, "collect: store read degraded to empty sample");
            Vec::new()
        }
    }
}

/// Decide whether the sample window warrants an alert.
///
/// The window is ordered most recent first; only `samples[0]` is consulted.
/// Pure and total: identical inputs give byte-identical decisions, and no
/// input — empty window, wrong-length sample, arbitrary bit patterns —
/// produces an error. All bad data degrades to [`Decision::hold`].
pub fn should_respond(samples: &[Vec<u8>]) -> Decision {
    let Some(latest) = samples.first() else {
        return Decision::hold();
    };

    // Exact length match: a valid prefix with trailing bytes must not pass.
    if latest.len() != SAMPLE_WIDTH {
        return Decision::hold();
    }

    let Some(obs) = decode_observation(latest) else {
        return Decision::hold();
    };

    if obs.delta > ALERT_THRESHOLD || obs.delta < -ALERT_THRESHOLD {
        Decision::respond(&obs)
    } else {
        Decision::hold()
    }
}

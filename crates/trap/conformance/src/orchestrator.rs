use std::sync::Arc;

use trap_evaluator::{collect, should_respond};
use trap_responder::ResponseExecutor;
use trap_types::{AlertRecord, Decision, ObservationSource};

/// Simulation of the external polling actor.
///
/// Once per round it calls the evaluator's collection operation and pushes
/// the sample onto the front of its window (most recent is index 0). On
/// [`evaluate`](Orchestrator::evaluate) it hands the window to the decision
/// operation and, when the decision is positive, forwards the payload into
/// the response executor unchanged.
///
/// Dedup, cooldown, and scheduling are deliberately absent: the real
/// orchestrator owns those, and this simulation mirrors only its calling
/// contract.
pub struct Orchestrator {
    source: Arc<dyn ObservationSource>,
    executor: ResponseExecutor,
    window: Vec<Vec<u8>>,
    window_limit: usize,
}

impl Orchestrator {
    pub fn new(source: Arc<dyn ObservationSource>, window_limit: usize) -> Self {
        assert!(window_limit > 0, "window must hold at least one sample");
        Self {
            source,
            executor: ResponseExecutor::new(),
            window: Vec::new(),
            window_limit,
        }
    }

    /// One polling cycle: collect a sample and retire the oldest beyond the
    /// window limit. Returns the collected sample.
    pub fn run_round(&mut self) -> Vec<u8> {
        let sample = collect(self.source.as_ref());
        self.window.insert(0, sample.clone());
        self.window.truncate(self.window_limit);
        tracing::debug!(
            sample_len = sample.len(),
            window = self.window.len(),
            "round complete"
        );
        sample
    }

    /// Evaluate the accumulated window; a positive decision is forwarded to
    /// the executor with its exact payload.
    pub fn evaluate(&mut self) -> Decision {
        let decision = should_respond(&self.window);
        if decision.should_act {
            self.executor
                .act_encoded(&decision.payload)
                .expect("positive decision payloads are valid executor input");
        }
        decision
    }

    /// Samples accumulated so far, most recent first.
    pub fn window(&self) -> &[Vec<u8>] {
        &self.window
    }

    /// Alerts recorded by the executor, in append order.
    pub fn alerts(&self) -> Vec<AlertRecord> {
        self.executor.records()
    }
}

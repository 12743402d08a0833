//! Conformance suite for the trap protocol.
//!
//! Provides a simulation of the external orchestrator — the polling actor
//! that drives rounds, accumulates samples, and forwards positive decisions
//! into the response executor — plus fault-injection observation sources
//! for exercising the defensive collection path. The protocol crates never
//! depend on anything here; this crate exists to test them end to end.

pub mod doubles;
pub mod orchestrator;

pub use doubles::{AbsentStore, MalformedStore, RevertingStore};
pub use orchestrator::Orchestrator;

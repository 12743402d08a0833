//! Stateless trap evaluator.
//!
//! Two operations, both total:
//! - [`collect`] reads an observation source defensively and returns its
//!   fixed-width encoding, or empty bytes on any fault
//! - [`should_respond`] turns a window of collected samples into a
//!   [`Decision`], degrading every malformed input to the inert decision
//!
//! The evaluator holds no state and no configuration. The alert threshold
//! and the encoded width are compile-time constants so its behavior can be
//! audited independent of deployment history.

pub mod evaluate;

pub use evaluate::{collect, should_respond, ALERT_THRESHOLD};

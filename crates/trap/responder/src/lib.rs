//! Response executor: the externally visible end of the trap protocol.
//!
//! Appends an immutable [`AlertRecord`](trap_types::AlertRecord) per
//! invocation. Stateless with respect to the protocol itself — the record
//! ledger only grows and never feeds back into any decision.

pub mod executor;

pub use executor::ResponseExecutor;

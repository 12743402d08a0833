//! Single-slot observation store.
//!
//! Holds the one current observation, writable only by the owner identity
//! fixed at construction. Reads never fail and the slot is overwritten as a
//! whole, never partially.

pub mod clock;
pub mod error;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::StoreError;
pub use store::ObservationStore;

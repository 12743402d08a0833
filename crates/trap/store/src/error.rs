use thiserror::Error;
use trap_types::AccountId;

/// Errors surfaced by the observation store.
///
/// Only the write path fails loudly; its caller is the single trusted
/// writer. Reads are infallible by contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("unauthorized write from {caller}")]
    Unauthorized { caller: AccountId },
}

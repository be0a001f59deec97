//! Application error types.

use stipend_store::StoreError;

/// Errors surfaced to the operator as blocking alerts.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Operator input could not be parsed as an amount. Rejected before
    /// any write is attempted.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    /// The store refused or failed a write. No retry, no rollback.
    #[error(transparent)]
    Store(#[from] StoreError),
}

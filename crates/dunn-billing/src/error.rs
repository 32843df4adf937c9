//! Error types for the billing engine.

use dunn_store::StoreError;

/// Result type for billing operations.
pub type Result<T> = std::result::Result<T, BillingError>;

/// Errors that can abort a billing batch.
///
/// Gateway failures never appear here; they are classified into per-invoice
/// outcomes at the charge boundary. Only persistence failures abort a batch.
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    /// The persistence collaborator failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

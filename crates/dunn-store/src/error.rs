//! Error types for dunn storage.

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Record not found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity ("invoice", "customer").
        entity: &'static str,
        /// The identifier that missed.
        id: String,
    },

    /// Backend operation failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    /// A `NotFound` for an invoice id.
    #[must_use]
    pub fn invoice_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity: "invoice",
            id: id.to_string(),
        }
    }

    /// A `NotFound` for a customer id.
    #[must_use]
    pub fn customer_not_found(id: impl ToString) -> Self {
        Self::NotFound {
            entity: "customer",
            id: id.to_string(),
        }
    }
}

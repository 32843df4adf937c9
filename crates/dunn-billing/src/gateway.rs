//! Payment gateway collaborator contract.

use async_trait::async_trait;

use dunn_core::{CustomerId, Invoice, InvoiceId};

/// Failure modes of a charge attempt, as reported by the gateway.
///
/// This is the full taxonomy the engine classifies from; gateway errors never
/// propagate past classification.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChargeError {
    /// The invoice currency does not match the customer's billing currency.
    #[error("currency mismatch charging invoice {invoice_id} for customer {customer_id}")]
    CurrencyMismatch {
        /// The customer the charge was attempted for.
        customer_id: CustomerId,
        /// The invoice the charge was attempted from.
        invoice_id: InvoiceId,
    },

    /// The gateway has no record of the customer.
    #[error("customer not found: {customer_id}")]
    CustomerNotFound {
        /// The unknown customer.
        customer_id: CustomerId,
    },

    /// The gateway could not be reached.
    #[error("network failure reaching payment gateway")]
    Network,

    /// Any other gateway failure.
    #[error("payment gateway failure: {0}")]
    Other(String),
}

/// External payment gateway.
///
/// One call is one externally observable charge attempt; callers must not
/// duplicate it outside explicit recovery logic.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge the customer's account for the invoice amount.
    ///
    /// Returns `Ok(true)` when the charge went through and `Ok(false)` when
    /// the customer's balance did not cover the amount.
    ///
    /// # Errors
    ///
    /// Returns a [`ChargeError`] describing why the charge could not be
    /// attempted.
    async fn charge(&self, invoice: &Invoice) -> Result<bool, ChargeError>;
}

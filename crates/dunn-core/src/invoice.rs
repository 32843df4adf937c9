//! Invoice model.

use serde::{Deserialize, Serialize};

use crate::ids::{CustomerId, InvoiceId};
use crate::money::Money;

/// Durable lifecycle status of an invoice.
///
/// Only `Pending` invoices are eligible for a billing run. The transient
/// per-attempt outcome of a charge lives in the billing engine, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Awaiting collection; picked up by the next billing run.
    Pending,
    /// Successfully charged.
    Paid,
    /// Charge declined for insufficient balance; superseded by an
    /// interest-accrued successor invoice.
    Unpaid,
    /// Charging gave up after exhausting network retries.
    NetworkError,
    /// Reserved for operator-marked failures; never set by the engine.
    Error,
}

/// An invoice owed by a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Immutable, unique invoice identity.
    pub id: InvoiceId,
    /// The owning customer.
    pub customer_id: CustomerId,
    /// Amount due.
    pub amount: Money,
    /// Durable lifecycle status.
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Whether this invoice is eligible for a billing run.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == InvoiceStatus::Pending
    }

    /// Copy of this invoice with a different status.
    #[must_use]
    pub fn with_status(&self, status: InvoiceStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Copy of this invoice with a different amount.
    #[must_use]
    pub fn with_amount(&self, amount: Money) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }
}

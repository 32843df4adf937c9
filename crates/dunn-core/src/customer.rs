//! Customer model.

use serde::{Deserialize, Serialize};

use crate::ids::CustomerId;
use crate::money::Currency;

/// A customer whose invoices are collected by the billing engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identity.
    pub id: CustomerId,
    /// The currency the customer is billed in.
    ///
    /// A charge attempted in any other currency comes back as a currency
    /// mismatch from the payment gateway.
    pub currency: Currency,
}

//! Persistence layer for dunn.
//!
//! This crate defines the `InvoiceStore` trait the billing engine runs
//! against, plus an in-memory reference backend. Storage engine internals are
//! deliberately out of scope for the billing core; the trait is the contract.
//!
//! # Example
//!
//! ```
//! use dunn_store::{InvoiceStore, MemoryStore};
//! use dunn_core::{Currency, Money};
//! use rust_decimal::Decimal;
//!
//! let store = MemoryStore::new();
//! let customer = store.create_customer(Currency::Usd).unwrap();
//! let amount = Money::new(Decimal::new(1000, 2), Currency::Usd);
//! let invoice = store.create_invoice(amount, &customer).unwrap();
//! assert!(invoice.is_pending());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod memory;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;

use dunn_core::{Currency, Customer, CustomerId, Invoice, InvoiceId, Money};

/// The persistence contract consumed by the billing engine.
///
/// Implementations must return the canonical persisted value from every
/// mutating operation; the engine tracks invoices by that returned snapshot.
/// The engine issues no locking of its own, so concurrent billing batches may
/// interleave updates; each individual operation must be atomic.
pub trait InvoiceStore: Send + Sync {
    /// Fetch every invoice, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn fetch_invoices(&self) -> Result<Vec<Invoice>>;

    /// Fetch one invoice by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the invoice doesn't exist.
    fn fetch_invoice(&self, id: &InvoiceId) -> Result<Invoice>;

    /// Fetch every customer, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn fetch_customers(&self) -> Result<Vec<Customer>>;

    /// Fetch one customer by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the customer doesn't exist.
    fn fetch_customer(&self, id: &CustomerId) -> Result<Customer>;

    /// Persist a new status/amount for an existing invoice.
    ///
    /// Returns the canonical persisted value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the invoice doesn't exist.
    fn update_invoice(&self, invoice: &Invoice) -> Result<Invoice>;

    /// Create a new `Pending` invoice for a customer.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn create_invoice(&self, amount: Money, customer: &Customer) -> Result<Invoice>;

    /// Create a new customer billed in the given currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn create_customer(&self, currency: Currency) -> Result<Customer>;
}

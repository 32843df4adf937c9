//! In-memory storage implementation.
//!
//! Backs the service in development and the engine in tests. A single
//! `RwLock` keeps each operation atomic; batches are not serialized against
//! each other, matching the `InvoiceStore` contract.

use std::collections::HashMap;
use std::sync::RwLock;

use dunn_core::{Currency, Customer, CustomerId, Invoice, InvoiceId, InvoiceStatus, Money};

use crate::error::{Result, StoreError};
use crate::InvoiceStore;

#[derive(Default)]
struct Tables {
    invoices: HashMap<InvoiceId, Invoice>,
    customers: HashMap<CustomerId, Customer>,
}

/// In-memory `InvoiceStore` backend.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))
    }
}

impl InvoiceStore for MemoryStore {
    fn fetch_invoices(&self) -> Result<Vec<Invoice>> {
        Ok(self.read()?.invoices.values().cloned().collect())
    }

    fn fetch_invoice(&self, id: &InvoiceId) -> Result<Invoice> {
        self.read()?
            .invoices
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::invoice_not_found(id))
    }

    fn fetch_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.read()?.customers.values().cloned().collect())
    }

    fn fetch_customer(&self, id: &CustomerId) -> Result<Customer> {
        self.read()?
            .customers
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::customer_not_found(id))
    }

    fn update_invoice(&self, invoice: &Invoice) -> Result<Invoice> {
        let mut tables = self.write()?;
        if !tables.invoices.contains_key(&invoice.id) {
            return Err(StoreError::invoice_not_found(invoice.id));
        }
        tables.invoices.insert(invoice.id, invoice.clone());
        Ok(invoice.clone())
    }

    fn create_invoice(&self, amount: Money, customer: &Customer) -> Result<Invoice> {
        let invoice = Invoice {
            id: InvoiceId::generate(),
            customer_id: customer.id,
            amount,
            status: InvoiceStatus::Pending,
        };
        self.write()?.invoices.insert(invoice.id, invoice.clone());
        tracing::debug!(invoice_id = %invoice.id, customer_id = %customer.id, "Created invoice");
        Ok(invoice)
    }

    fn create_customer(&self, currency: Currency) -> Result<Customer> {
        let customer = Customer {
            id: CustomerId::generate(),
            currency,
        };
        self.write()?.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usd(value: rust_decimal::Decimal) -> Money {
        Money::new(value, Currency::Usd)
    }

    #[test]
    fn created_invoice_is_pending_and_fetchable() {
        let store = MemoryStore::new();
        let customer = store.create_customer(Currency::Usd).unwrap();
        let invoice = store.create_invoice(usd(dec!(10.00)), &customer).unwrap();

        let fetched = store.fetch_invoice(&invoice.id).unwrap();
        assert_eq!(fetched.status, InvoiceStatus::Pending);
        assert_eq!(fetched.customer_id, customer.id);
    }

    #[test]
    fn update_replaces_status_and_amount() {
        let store = MemoryStore::new();
        let customer = store.create_customer(Currency::Eur).unwrap();
        let invoice = store.create_invoice(usd(dec!(5.00)), &customer).unwrap();

        let paid = store
            .update_invoice(&invoice.with_status(InvoiceStatus::Paid))
            .unwrap();
        assert_eq!(paid.status, InvoiceStatus::Paid);
        assert_eq!(
            store.fetch_invoice(&invoice.id).unwrap().status,
            InvoiceStatus::Paid
        );
    }

    #[test]
    fn update_of_unknown_invoice_is_not_found() {
        let store = MemoryStore::new();
        let orphan = Invoice {
            id: InvoiceId::generate(),
            customer_id: CustomerId::generate(),
            amount: usd(dec!(1.00)),
            status: InvoiceStatus::Pending,
        };
        assert!(matches!(
            store.update_invoice(&orphan),
            Err(StoreError::NotFound { entity: "invoice", .. })
        ));
    }

    #[test]
    fn missing_customer_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.fetch_customer(&CustomerId::generate()),
            Err(StoreError::NotFound { entity: "customer", .. })
        ));
    }
}

//! Development stand-ins for the external collaborators.
//!
//! The payment gateway and exchange-rate services are external systems; until
//! real integrations are wired in, these stubs let the service run end to end
//! against seeded data.

use async_trait::async_trait;
use rust_decimal::Decimal;

use dunn_billing::{ChargeError, ExchangeRates, PaymentGateway, RateError};
use dunn_core::{Currency, Invoice, Money};
use dunn_store::{InvoiceStore, StoreError};

/// Gateway stand-in that approves every charge.
pub struct ApprovingGateway;

#[async_trait]
impl PaymentGateway for ApprovingGateway {
    async fn charge(&self, invoice: &Invoice) -> Result<bool, ChargeError> {
        tracing::debug!(invoice_id = %invoice.id, amount = %invoice.amount, "Stub charge approved");
        Ok(true)
    }
}

/// Exchange-rate stand-in with a flat 1:1 rate for every pair.
pub struct FlatRates;

#[async_trait]
impl ExchangeRates for FlatRates {
    async fn multiplier(&self, _from: Currency, _to: Currency) -> Result<Decimal, RateError> {
        Ok(Decimal::ONE)
    }
}

const CURRENCIES: [Currency; 5] = [
    Currency::Eur,
    Currency::Usd,
    Currency::Dkk,
    Currency::Sek,
    Currency::Gbp,
];

/// Seed demo customers with pending invoices.
///
/// Amounts are deterministic so repeated startups against a fresh store look
/// the same.
///
/// # Errors
///
/// Returns an error if the store rejects a write.
pub fn seed_demo_data(
    store: &dyn InvoiceStore,
    customers: usize,
    invoices_per_customer: usize,
) -> Result<(), StoreError> {
    for c in 0..customers {
        let customer = store.create_customer(CURRENCIES[c % CURRENCIES.len()])?;
        for i in 0..invoices_per_customer {
            let cents = i64::try_from((c + 1) * 1900 + (i + 1) * 775).unwrap_or(1000);
            let amount = Money::new(Decimal::new(cents, 2), customer.currency);
            store.create_invoice(amount, &customer)?;
        }
    }
    tracing::info!(
        customers,
        invoices = customers * invoices_per_customer,
        "Seeded demo data"
    );
    Ok(())
}

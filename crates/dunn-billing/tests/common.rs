//! Common test doubles for billing engine tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dunn_billing::{
    BillingConfig, BillingEngine, ChargeError, ExchangeRates, PaymentGateway, RateError,
};
use dunn_core::{Currency, Customer, Invoice, InvoiceId, Money};
use dunn_store::{InvoiceStore, MemoryStore};

/// One scripted gateway response.
#[derive(Debug, Clone)]
pub enum Step {
    Approve,
    Decline,
    Network,
    Mismatch,
    CustomerMissing,
    Fail,
}

/// Scripted payment gateway double.
///
/// Per-invoice scripts are consumed call by call; once a script runs out (or
/// none was set) the fallback applies. Every call is counted.
pub struct MockGateway {
    scripts: Mutex<HashMap<InvoiceId, VecDeque<Step>>>,
    fallback: Step,
    calls: AtomicUsize,
}

impl MockGateway {
    pub fn always(fallback: Step) -> Self {
        Self {
            scripts: Mutex::new(HashMap::new()),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue responses for one invoice; later calls fall back.
    pub fn script(&self, invoice_id: InvoiceId, steps: impl IntoIterator<Item = Step>) {
        self.scripts
            .lock()
            .unwrap()
            .insert(invoice_id, steps.into_iter().collect());
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn charge(&self, invoice: &Invoice) -> Result<bool, ChargeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(&invoice.id)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| self.fallback.clone());

        match step {
            Step::Approve => Ok(true),
            Step::Decline => Ok(false),
            Step::Network => Err(ChargeError::Network),
            Step::Mismatch => Err(ChargeError::CurrencyMismatch {
                customer_id: invoice.customer_id,
                invoice_id: invoice.id,
            }),
            Step::CustomerMissing => Err(ChargeError::CustomerNotFound {
                customer_id: invoice.customer_id,
            }),
            Step::Fail => Err(ChargeError::Other("gateway exploded".into())),
        }
    }
}

/// Exchange-rate double returning one fixed multiplier for every pair.
pub struct FixedRates(pub Decimal);

#[async_trait]
impl ExchangeRates for FixedRates {
    async fn multiplier(&self, _from: Currency, _to: Currency) -> Result<Decimal, RateError> {
        Ok(self.0)
    }
}

/// Exchange-rate double that never has a rate.
pub struct NoRates;

#[async_trait]
impl ExchangeRates for NoRates {
    async fn multiplier(&self, from: Currency, to: Currency) -> Result<Decimal, RateError> {
        Err(RateError::Unavailable { from, to })
    }
}

/// Engine wired over a fresh memory store with the given doubles.
pub struct Fixture {
    pub store: Arc<MemoryStore>,
    pub gateway: Arc<MockGateway>,
    pub engine: Arc<BillingEngine>,
    pub customer: Customer,
}

impl Fixture {
    pub fn new(fallback: Step) -> Self {
        Self::with_config(fallback, BillingConfig::default())
    }

    pub fn with_config(fallback: Step, config: BillingConfig) -> Self {
        Self::build(fallback, config, Arc::new(FixedRates(dec!(1))))
    }

    pub fn with_rates(fallback: Step, rates: Arc<dyn ExchangeRates>) -> Self {
        Self::build(fallback, BillingConfig::default(), rates)
    }

    fn build(fallback: Step, config: BillingConfig, rates: Arc<dyn ExchangeRates>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let gateway = Arc::new(MockGateway::always(fallback));
        let customer = store.create_customer(Currency::Usd).unwrap();
        let engine = Arc::new(BillingEngine::new(
            store.clone(),
            gateway.clone(),
            rates,
            config,
        ));
        Self {
            store,
            gateway,
            engine,
            customer,
        }
    }

    /// Create a pending USD invoice for the fixture customer.
    pub fn pending_invoice(&self, value: Decimal) -> Invoice {
        self.store
            .create_invoice(Money::new(value, Currency::Usd), &self.customer)
            .unwrap()
    }
}

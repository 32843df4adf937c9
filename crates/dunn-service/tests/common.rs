//! Common test utilities for dunn-service integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use dunn_billing::{ChargeError, PaymentGateway};
use dunn_core::{Currency, Customer, Invoice, Money};
use dunn_service::demo::FlatRates;
use dunn_service::{create_router, AppState, ServiceConfig};
use dunn_store::{InvoiceStore, MemoryStore};

/// Fixed behavior for the test gateway.
#[derive(Debug, Clone, Copy)]
pub enum GatewayMode {
    /// Every charge goes through.
    Approve,
    /// Every charge is declined for insufficient balance.
    Decline,
}

struct TestGateway(GatewayMode);

#[async_trait]
impl PaymentGateway for TestGateway {
    async fn charge(&self, _invoice: &Invoice) -> Result<bool, ChargeError> {
        match self.0 {
            GatewayMode::Approve => Ok(true),
            GatewayMode::Decline => Ok(false),
        }
    }
}

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Direct handle on the store for seeding and assertions.
    pub store: Arc<MemoryStore>,
}

impl TestHarness {
    /// Create a new test harness with a fresh store and an approving gateway.
    pub fn new() -> Self {
        Self::with_gateway(GatewayMode::Approve)
    }

    /// Create a test harness with the given gateway behavior.
    pub fn with_gateway(mode: GatewayMode) -> Self {
        let store = Arc::new(MemoryStore::new());

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            seed_demo_data: false,
            ..ServiceConfig::default()
        };

        let state = AppState::new(
            store.clone(),
            Arc::new(TestGateway(mode)),
            Arc::new(FlatRates),
            config,
        );
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, store }
    }

    /// Seed one customer with one pending USD invoice of the given value.
    pub fn seed_invoice(&self, value: Decimal) -> (Customer, Invoice) {
        let customer = self.store.create_customer(Currency::Usd).unwrap();
        let invoice = self
            .store
            .create_invoice(Money::new(value, Currency::Usd), &customer)
            .unwrap();
        (customer, invoice)
    }

    /// Seed one customer with one 10.00 USD pending invoice.
    pub fn seed_default_invoice(&self) -> (Customer, Invoice) {
        self.seed_invoice(dec!(10.00))
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

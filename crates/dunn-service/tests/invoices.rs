//! Invoice and customer endpoint integration tests.

mod common;

use common::TestHarness;
use dunn_core::CustomerId;

// ============================================================================
// Invoices
// ============================================================================

#[tokio::test]
async fn list_invoices_empty() {
    let harness = TestHarness::new();

    let response = harness.server.get("/v1/invoices").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_invoices_returns_seeded() {
    let harness = TestHarness::new();
    harness.seed_default_invoice();

    let response = harness.server.get("/v1/invoices").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["status"], "pending");
}

#[tokio::test]
async fn get_invoice_by_id() {
    let harness = TestHarness::new();
    let (_, invoice) = harness.seed_default_invoice();

    let response = harness
        .server
        .get(&format!("/v1/invoices/{}", invoice.id))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], invoice.id.to_string());
    assert_eq!(body["amount"]["currency"], "USD");
}

#[tokio::test]
async fn get_unknown_invoice_is_not_found() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get(&format!("/v1/invoices/{}", uuid_like()))
        .await;

    response.assert_status_not_found();
}

// ============================================================================
// Customers
// ============================================================================

#[tokio::test]
async fn get_customer_by_id() {
    let harness = TestHarness::new();
    let (customer, _) = harness.seed_default_invoice();

    let response = harness
        .server
        .get(&format!("/v1/customers/{}", customer.id))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["currency"], "USD");
}

#[tokio::test]
async fn get_unknown_customer_is_not_found() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get(&format!("/v1/customers/{}", uuid_like()))
        .await;

    response.assert_status_not_found();
}

fn uuid_like() -> String {
    CustomerId::generate().to_string()
}

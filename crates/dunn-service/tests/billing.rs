//! Billing endpoint integration tests.

mod common;

use common::{GatewayMode, TestHarness};
use dunn_store::InvoiceStore;
use serde_json::json;

// ============================================================================
// Trigger now
// ============================================================================

#[tokio::test]
async fn billing_do_charges_pending_invoices() {
    let harness = TestHarness::new();
    let (_, invoice) = harness.seed_default_invoice();

    let response = harness.server.post("/v1/billing/do").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body[invoice.id.to_string()]["outcome"], "success");

    let invoices: serde_json::Value = harness.server.get("/v1/invoices").await.json();
    assert_eq!(invoices[0]["status"], "paid");
}

#[tokio::test]
async fn billing_do_with_nothing_pending_returns_empty_mapping() {
    let harness = TestHarness::new();

    let response = harness.server.post("/v1/billing/do").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body.as_object().unwrap().is_empty());
}

#[tokio::test]
async fn declined_invoice_gets_unpaid_and_a_successor() {
    let harness = TestHarness::with_gateway(GatewayMode::Decline);
    let (customer, invoice) = harness.seed_default_invoice();

    let response = harness.server.post("/v1/billing/do").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body[invoice.id.to_string()]["outcome"],
        "insufficient_balance"
    );

    let invoices = harness.store.fetch_invoices().unwrap();
    assert_eq!(invoices.len(), 2);
    let successor = invoices.iter().find(|i| i.id != invoice.id).unwrap();
    assert_eq!(successor.customer_id, customer.id);
    assert!(successor.is_pending());
}

// ============================================================================
// Recurring schedule lifecycle
// ============================================================================

#[tokio::test]
async fn start_requires_interval_for_custom_period() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/v1/billing/start")
        .json(&json!({ "period": "custom" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn start_rejects_unrecognized_period() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/v1/billing/start")
        .json(&json!({ "period": "fortnightly" }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn start_twice_conflicts() {
    let harness = TestHarness::new();

    harness
        .server
        .post("/v1/billing/start")
        .json(&json!({ "period": "daily" }))
        .await
        .assert_status_ok();

    let response = harness
        .server
        .post("/v1/billing/start")
        .json(&json!({ "period": "weekly" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn stop_without_active_schedule_conflicts() {
    let harness = TestHarness::new();

    let response = harness.server.post("/v1/billing/stop").await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn start_then_stop_then_restart() {
    let harness = TestHarness::new();

    harness
        .server
        .post("/v1/billing/start")
        .json(&json!({ "period": "custom", "interval_ms": 60_000 }))
        .await
        .assert_status_ok();

    let stopped: serde_json::Value = harness
        .server
        .post("/v1/billing/stop")
        .await
        .json();
    assert_eq!(stopped["status"], "stopped");

    // Stopping frees the slot for a new schedule.
    harness
        .server
        .post("/v1/billing/start")
        .json(&json!({ "period": "monthly" }))
        .await
        .assert_status_ok();
}

//! Invoice read handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use dunn_core::{Invoice, InvoiceId};

use crate::error::ApiError;
use crate::state::AppState;

/// List all invoices.
pub async fn list_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Invoice>>, ApiError> {
    Ok(Json(state.store.fetch_invoices()?))
}

/// Fetch one invoice by id.
pub async fn get_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<InvoiceId>,
) -> Result<Json<Invoice>, ApiError> {
    Ok(Json(state.store.fetch_invoice(&id)?))
}

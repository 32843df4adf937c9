//! Customer read handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use dunn_core::{Customer, CustomerId};

use crate::error::ApiError;
use crate::state::AppState;

/// List all customers.
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(state.store.fetch_customers()?))
}

/// Fetch one customer by id.
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<CustomerId>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.store.fetch_customer(&id)?))
}

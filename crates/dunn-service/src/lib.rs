//! Dunn HTTP API service.
//!
//! This crate provides the HTTP boundary over the billing engine:
//!
//! - Invoice and customer lookups
//! - On-demand billing runs
//! - Starting and stopping the recurring billing schedule
//!
//! The payment gateway and exchange-rate collaborators are wired in at
//! startup; [`demo`] provides development stand-ins.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Read-only handlers stay async for consistency

pub mod config;
pub mod demo;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

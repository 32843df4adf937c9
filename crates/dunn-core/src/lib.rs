//! Core types for the dunn billing platform.
//!
//! This crate provides the foundational types used throughout dunn:
//!
//! - **Identifiers**: `InvoiceId`, `CustomerId`
//! - **Money**: `Money`, `Currency`
//! - **Invoices**: `Invoice`, `InvoiceStatus`
//! - **Customers**: `Customer`
//!
//! # Amounts
//!
//! Invoice amounts are `rust_decimal::Decimal` values, never floats. Interest
//! accrual and currency conversion round to two decimal places.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod customer;
pub mod ids;
pub mod invoice;
pub mod money;

pub use customer::Customer;
pub use ids::{CustomerId, IdError, InvoiceId};
pub use invoice::{Invoice, InvoiceStatus};
pub use money::{Currency, Money};

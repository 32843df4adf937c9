//! HTTP request handlers.

pub mod billing;
pub mod customers;
pub mod health;
pub mod invoices;

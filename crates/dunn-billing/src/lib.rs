//! Billing orchestration engine for dunn.
//!
//! One billing run selects every `Pending` invoice, charges it through the
//! payment gateway, classifies the result, and drives each invoice through a
//! bounded recovery workflow until it reaches a terminal persisted state:
//!
//! - a currency mismatch gets exactly one corrective re-attempt after
//!   converting the amount into the customer's currency;
//! - network failures are retried with linear backoff, bounded by attempt
//!   count and by an absolute wall-clock timeout;
//! - an insufficient balance marks the invoice unpaid and accrues 5%
//!   late-payment interest into a successor invoice;
//! - successful charges are finalized as paid.
//!
//! The [`scheduler`] module triggers runs on a recurring cadence until
//! cancelled.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod rates;
pub mod run;
pub mod scheduler;

pub use config::BillingConfig;
pub use engine::BillingEngine;
pub use error::BillingError;
pub use gateway::{ChargeError, PaymentGateway};
pub use rates::{ExchangeRates, RateError};
pub use run::{BillingOutcome, BillingRun, RunEntry};
pub use scheduler::{start_recurring, BillingPeriod, ScheduleError, ScheduleHandle};

//! Application state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use dunn_billing::{
    start_recurring, BillingEngine, BillingPeriod, ExchangeRates, PaymentGateway, ScheduleError,
    ScheduleHandle,
};
use dunn_store::InvoiceStore;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
///
/// Owns the single recurring-schedule slot: at most one schedule is active
/// at a time, and the start/stop endpoints flip it under a lock.
pub struct AppState {
    /// The persistence collaborator.
    pub store: Arc<dyn InvoiceStore>,

    /// The billing engine.
    pub engine: Arc<BillingEngine>,

    /// Service configuration.
    pub config: ServiceConfig,

    schedule: Mutex<Option<ScheduleHandle>>,
}

impl AppState {
    /// Create application state over the given collaborators.
    #[must_use]
    pub fn new(
        store: Arc<dyn InvoiceStore>,
        gateway: Arc<dyn PaymentGateway>,
        rates: Arc<dyn ExchangeRates>,
        config: ServiceConfig,
    ) -> Self {
        let engine = Arc::new(BillingEngine::new(
            store.clone(),
            gateway,
            rates,
            config.billing.clone(),
        ));
        Self {
            store,
            engine,
            config,
            schedule: Mutex::new(None),
        }
    }

    /// Start the recurring schedule.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::AlreadyRunning` when a schedule is active, or
    /// `ScheduleError::MissingInterval` for a custom period without an
    /// interval, in both cases before any run executes.
    pub async fn start_recurring(
        &self,
        period: BillingPeriod,
        interval: Option<Duration>,
    ) -> Result<(), ScheduleError> {
        let mut slot = self.schedule.lock().await;
        // A finished task (panicked run) is stale, not active; let a new
        // start replace it.
        if slot.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return Err(ScheduleError::AlreadyRunning);
        }
        *slot = Some(start_recurring(self.engine.clone(), period, interval)?);
        Ok(())
    }

    /// Cancel the active recurring schedule.
    ///
    /// Future runs stop; a run already in progress completes normally.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::NotRunning` when no schedule is active.
    pub async fn stop_recurring(&self) -> Result<(), ScheduleError> {
        let mut slot = self.schedule.lock().await;
        match slot.take() {
            Some(handle) => {
                handle.cancel();
                Ok(())
            }
            None => Err(ScheduleError::NotRunning),
        }
    }
}

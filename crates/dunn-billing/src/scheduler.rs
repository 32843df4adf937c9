//! Recurring billing scheduler.
//!
//! A single long-lived background task runs one batch, waits out the cadence,
//! and repeats until cancelled. Cancellation is cooperative: the flag is
//! checked before each new run, and a run already in flight completes
//! normally.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::engine::BillingEngine;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Cadence of recurring billing runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    /// Every 24 hours.
    Daily,
    /// Every 7 days.
    Weekly,
    /// At the end of each calendar month; the wait is recomputed each cycle.
    Monthly,
    /// A caller-supplied fixed interval.
    Custom,
}

/// Errors from scheduling setup and lifecycle.
///
/// These are caller/config errors reported synchronously to the triggering
/// request; they never abort an in-progress batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// `Custom` period given without an interval value.
    #[error("custom period requires an interval")]
    MissingInterval,

    /// A recurring schedule is already active.
    #[error("recurring billing is already running")]
    AlreadyRunning,

    /// No recurring schedule is active.
    #[error("recurring billing is not running")]
    NotRunning,
}

/// Resolved wait policy between runs.
#[derive(Debug, Clone, Copy)]
enum Cadence {
    Fixed(Duration),
    EndOfMonth,
}

impl Cadence {
    fn resolve(period: BillingPeriod, interval: Option<Duration>) -> Result<Self, ScheduleError> {
        match period {
            BillingPeriod::Daily => Ok(Self::Fixed(Duration::from_secs(SECS_PER_DAY))),
            BillingPeriod::Weekly => Ok(Self::Fixed(Duration::from_secs(7 * SECS_PER_DAY))),
            BillingPeriod::Monthly => Ok(Self::EndOfMonth),
            BillingPeriod::Custom => interval
                .map(Self::Fixed)
                .ok_or(ScheduleError::MissingInterval),
        }
    }

    fn next_delay(self, now: DateTime<Utc>) -> Duration {
        match self {
            Self::Fixed(interval) => interval,
            Self::EndOfMonth => until_end_of_month(now),
        }
    }
}

/// Time remaining until the start of the next calendar month.
fn until_end_of_month(now: DateTime<Utc>) -> Duration {
    let (year, month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    // First day of a month at midnight is always a valid UTC instant.
    let Some(next_month) = Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single() else {
        return Duration::from_secs(SECS_PER_DAY);
    };
    (next_month - now).to_std().unwrap_or(Duration::ZERO)
}

/// Handle to an active recurring schedule.
///
/// Owned state with a defined lifecycle: created by [`start_recurring`],
/// invalidated by [`ScheduleHandle::cancel`]. Dropping the handle without
/// cancelling leaves the schedule running detached.
pub struct ScheduleHandle {
    cancel: watch::Sender<bool>,
    task: tokio::task::JoinHandle<()>,
}

impl ScheduleHandle {
    /// Stop future runs. A run already executing completes normally.
    pub fn cancel(&self) {
        let _ = self.cancel.send(true);
    }

    /// Whether the background task has exited.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Start recurring billing on the given cadence.
///
/// Runs one batch immediately, then waits out the cadence between runs. The
/// waits are non-blocking suspensions; independent work (such as a manual
/// billing trigger) proceeds concurrently.
///
/// # Errors
///
/// Returns [`ScheduleError::MissingInterval`] when `period` is `Custom` and
/// no interval is supplied; the check happens before any run executes.
pub fn start_recurring(
    engine: Arc<BillingEngine>,
    period: BillingPeriod,
    interval: Option<Duration>,
) -> Result<ScheduleHandle, ScheduleError> {
    let cadence = Cadence::resolve(period, interval)?;
    let (cancel, mut cancelled) = watch::channel(false);

    let task = tokio::spawn(async move {
        tracing::info!(?period, "Recurring billing started");
        loop {
            // Checked before each run; cancellation never interrupts a run
            // in flight.
            if *cancelled.borrow() {
                break;
            }

            match engine.bill().await {
                Ok(run) => {
                    tracing::info!(invoices = run.len(), "Scheduled billing run complete");
                }
                Err(err) => {
                    tracing::error!(error = %err, "Scheduled billing run failed");
                }
            }

            let delay = cadence.next_delay(Utc::now());
            tokio::select! {
                () = tokio::time::sleep(delay) => {}
                _ = cancelled.changed() => {}
            }
        }
        tracing::info!("Recurring billing stopped");
    });

    Ok(ScheduleHandle { cancel, task })
}

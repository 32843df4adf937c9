//! Billing engine configuration.

use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Maximum network retry rounds per batch.
pub const DEFAULT_RETRY_LIMIT: u32 = 5;

/// Base delay for linear retry backoff.
pub const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Absolute wall-clock budget for the whole retry loop.
pub const DEFAULT_RETRY_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Knobs for one billing engine.
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Maximum network retry rounds; the loop stops once the attempt counter
    /// exceeds this.
    pub retry_limit: u32,

    /// Base delay for linear backoff; round `n` waits `n × retry_base_delay`.
    pub retry_base_delay: Duration,

    /// Absolute timeout over the whole retry loop, independent of the
    /// attempt/delay schedule. Guards against a misconfigured backoff factor;
    /// whichever of limit and timeout fires first stops the loop.
    pub retry_timeout: Duration,

    /// Multiplier applied to an unpaid invoice's amount when accruing
    /// late-payment interest into its successor.
    pub interest_multiplier: Decimal,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            retry_limit: DEFAULT_RETRY_LIMIT,
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
            retry_timeout: DEFAULT_RETRY_TIMEOUT,
            interest_multiplier: dec!(1.05),
        }
    }
}

//! Service configuration.

use std::time::Duration;

use dunn_billing::BillingConfig;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Billing engine knobs (retry limit, backoff, timeout, interest).
    pub billing: BillingConfig,

    /// Seed demo customers and invoices into the store at startup.
    pub seed_demo_data: bool,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = BillingConfig::default();
        let billing = BillingConfig {
            retry_limit: env_parse("BILLING_RETRY_LIMIT", defaults.retry_limit),
            retry_base_delay: Duration::from_millis(env_parse(
                "BILLING_RETRY_BASE_DELAY_MS",
                u64::try_from(defaults.retry_base_delay.as_millis()).unwrap_or(1000),
            )),
            retry_timeout: Duration::from_secs(env_parse(
                "BILLING_RETRY_TIMEOUT_SECONDS",
                defaults.retry_timeout.as_secs(),
            )),
            interest_multiplier: defaults.interest_multiplier,
        };

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            max_body_bytes: env_parse("MAX_BODY_BYTES", 1024 * 1024),
            request_timeout_seconds: env_parse("REQUEST_TIMEOUT_SECONDS", 30),
            billing,
            seed_demo_data: env_parse("SEED_DEMO_DATA", true),
        }
    }
}

/// Parse an environment variable, falling back to a default.
fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
            billing: BillingConfig::default(),
            seed_demo_data: true,
        }
    }
}

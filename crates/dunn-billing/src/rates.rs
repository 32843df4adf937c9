//! Exchange-rate collaborator contract.

use async_trait::async_trait;
use rust_decimal::Decimal;

use dunn_core::Currency;

/// Errors from the exchange-rate lookup.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RateError {
    /// No rate is available for the currency pair.
    #[error("no exchange rate for {from} -> {to}")]
    Unavailable {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },
}

/// External exchange-rate lookup.
#[async_trait]
pub trait ExchangeRates: Send + Sync {
    /// The multiplier that converts an amount in `from` into `to`.
    ///
    /// # Errors
    ///
    /// Returns [`RateError`] when no rate is available for the pair.
    async fn multiplier(&self, from: Currency, to: Currency) -> Result<Decimal, RateError>;
}

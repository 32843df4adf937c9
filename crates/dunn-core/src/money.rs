//! Monetary amounts and currencies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places kept on derived amounts (interest, conversion).
const AMOUNT_SCALE: u32 = 2;

/// Billing currencies supported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Euro.
    Eur,
    /// US dollar.
    Usd,
    /// Danish krone.
    Dkk,
    /// Swedish krona.
    Sek,
    /// Pound sterling.
    Gbp,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::Eur => "EUR",
            Self::Usd => "USD",
            Self::Dkk => "DKK",
            Self::Sek => "SEK",
            Self::Gbp => "GBP",
        };
        f.write_str(code)
    }
}

/// A monetary amount in a specific currency.
///
/// All arithmetic is decimal; floating point never touches an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The decimal amount.
    pub value: Decimal,
    /// The currency of the amount.
    pub currency: Currency,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(value: Decimal, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// Convert this amount into another currency using a rate multiplier.
    ///
    /// The result is rounded to two decimal places.
    #[must_use]
    pub fn convert(&self, rate: Decimal, to: Currency) -> Self {
        Self {
            value: (self.value * rate).round_dp(AMOUNT_SCALE),
            currency: to,
        }
    }

    /// Apply a multiplier to this amount, keeping the currency.
    ///
    /// Used for late-payment interest accrual; the result is rounded to two
    /// decimal places.
    #[must_use]
    pub fn scaled(&self, multiplier: Decimal) -> Self {
        Self {
            value: (self.value * multiplier).round_dp(AMOUNT_SCALE),
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

//! Domain primitives: Currency.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reporting currency for display and export formatting.
///
/// Purely a label: no conversion is performed anywhere in the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    /// ISO 4217 code used as a display prefix.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error for unrecognized currency codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyParseError(pub String);

impl std::fmt::Display for CurrencyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unrecognized currency code: {}", self.0)
    }
}

impl std::error::Error for CurrencyParseError {}

impl FromStr for Currency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            other => Err(CurrencyParseError(other.to_string())),
        }
    }
}

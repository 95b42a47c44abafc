//! Exchange-rate quotes

use std::collections::HashMap;
use serde::{Serialize, Deserialize};
use crate::CurrencyCode;

/// Snapshot of rates for one base currency, valid only for the instant it was fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateQuote {
    /// Currency the rates are relative to
    pub base: CurrencyCode,
    /// Whether the upstream reported success
    pub success: bool,
    /// Units of target currency per one unit of base
    pub rates: HashMap<String, f64>,
    /// Upstream error type on failure (e.g. "unsupported-code", "invalid-key")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Upstream last-update time, seconds since the Unix epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
}

impl ExchangeRateQuote {
    /// Successful quote with the given rates
    pub fn success(base: CurrencyCode, rates: impl IntoIterator<Item = (String, f64)>) -> Self {
        ExchangeRateQuote {
            base,
            success: true,
            rates: rates.into_iter().collect(),
            error_type: None,
            last_updated: None,
        }
    }

    /// Upstream answered with a non-success result
    pub fn rejected(base: CurrencyCode, error_type: Option<String>) -> Self {
        ExchangeRateQuote {
            base,
            success: false,
            rates: HashMap::new(),
            error_type,
            last_updated: None,
        }
    }

    /// Exact, case-sensitive rate lookup
    pub fn rate(&self, target: &CurrencyCode) -> Option<f64> {
        self.rates.get(target.as_str()).copied()
    }
}

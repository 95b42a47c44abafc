//! Exchange-rate provider as configured by the environment

use tracing::{debug, info};
use traveler::{CurrencyCode, ExchangeRateQuote, FetchError, HttpRateProvider, RateProvider, RatesConfig};

/// The HTTP provider, or the reason it could not be built
///
/// A missing API key must not stop length or temperature conversions, so the
/// configuration error only surfaces when a currency conversion needs rates.
pub enum Rates {
    Http(HttpRateProvider),
    Unconfigured(String),
}

impl Rates {
    pub fn from_env() -> Self {
        match RatesConfig::from_env().and_then(HttpRateProvider::new) {
            Ok(provider) => {
                info!(config = ?provider.config(), "exchange-rate provider ready");
                Rates::Http(provider)
            }
            Err(e) => {
                debug!(error = %e, "exchange-rate provider unavailable");
                Rates::Unconfigured(e.to_string())
            }
        }
    }
}

impl RateProvider for Rates {
    fn fetch_rates(&self, base: &CurrencyCode) -> Result<ExchangeRateQuote, FetchError> {
        match self {
            Rates::Http(provider) => provider.fetch_rates(base),
            Rates::Unconfigured(reason) => Err(FetchError::NotConfigured(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_reports_reason() {
        let rates = Rates::Unconfigured("no exchange-rate API key configured".to_string());
        let base = CurrencyCode::parse("USD").unwrap();
        assert_eq!(
            rates.fetch_rates(&base),
            Err(FetchError::NotConfigured("no exchange-rate API key configured".to_string()))
        );
    }
}

//! The exchange-rate collaborator seam

use traveler_core::FetchError;
use crate::{CurrencyCode, ExchangeRateQuote};

/// Fetches a fresh quote for a base currency
///
/// One call is one upstream request. Implementations neither cache nor retry.
pub trait RateProvider {
    fn fetch_rates(&self, base: &CurrencyCode) -> Result<ExchangeRateQuote, FetchError>;
}

impl<F> RateProvider for F
where
    F: Fn(&CurrencyCode) -> Result<ExchangeRateQuote, FetchError>,
{
    fn fetch_rates(&self, base: &CurrencyCode) -> Result<ExchangeRateQuote, FetchError> {
        self(base)
    }
}

//! Currency conversion against a freshly fetched quote

use tracing::{debug, warn};
use traveler_core::{ConvertError, ensure_non_negative, ensure_representable};
use crate::{CurrencyCode, RateProvider};

/// Convert `amount` of `base` into `target`
///
/// The amount is validated before the provider is touched; otherwise exactly
/// one fetch is made. The result is full precision; round for display only.
pub fn convert_currency<P>(
    base: &CurrencyCode,
    target: &CurrencyCode,
    amount: f64,
    provider: &P,
) -> Result<f64, ConvertError>
where
    P: RateProvider + ?Sized,
{
    let amount = ensure_non_negative(amount, "amount")?;

    let quote = provider.fetch_rates(base).map_err(|e| {
        warn!(base = %base, error = %e, "exchange rate fetch failed");
        ConvertError::UpstreamUnavailable(e)
    })?;

    if !quote.success {
        let reason = quote.error_type.unwrap_or_else(|| "upstream reported failure".to_string());
        warn!(base = %base, reason = %reason, "exchange rate request rejected");
        return Err(ConvertError::UpstreamRejected(reason));
    }

    let rate = quote.rate(target)
        .ok_or_else(|| ConvertError::UnsupportedCurrency(target.to_string()))?;

    debug!(base = %base, target = %target, rate, "currency conversion");
    ensure_representable(amount * rate)
}

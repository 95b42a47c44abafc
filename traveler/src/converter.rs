//! The conversion facade

use tracing::debug;
use traveler_core::{ConvertError, ensure_finite, ensure_representable};
use traveler_currency::{RateProvider, convert_currency};
use traveler_units::{convert, convert_temperature};
use crate::{Category, ConversionRequest};

/// Single entry point for every conversion
///
/// Holds nothing but the exchange-rate provider; each call is independent.
pub struct Converter<P> {
    provider: P,
}

impl<P: RateProvider> Converter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Dispatch a parsed request to its converter
    pub fn convert(&self, request: &ConversionRequest) -> Result<Conversion, ConvertError> {
        debug!(category = %request.category(), input = request.input(), "conversion requested");

        let result = match request {
            ConversionRequest::Linear { category, value, from, to } => {
                convert(*category, *value, from, to)?
            }
            ConversionRequest::Temperature { value, from, to } => {
                let value = ensure_finite(*value, "temperature")?;
                ensure_representable(convert_temperature(value, *from, *to))?
            }
            ConversionRequest::Currency { amount, base, target } => {
                convert_currency(base, target, *amount, &self.provider)?
            }
        };

        Ok(Conversion { request: request.clone(), result })
    }

    /// Parse raw form fields and convert
    pub fn convert_fields(&self, selector: &str, value: f64, from: &str, to: &str) -> Result<Conversion, ConvertError> {
        let request = ConversionRequest::parse(selector, value, from, to)?;
        self.convert(&request)
    }
}

/// A successful conversion: what was asked and the full-precision answer
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub request: ConversionRequest,
    pub result: f64,
}

impl Conversion {
    pub fn category(&self) -> Category {
        self.request.category()
    }
}

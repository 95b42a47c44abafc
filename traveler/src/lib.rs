//! Traveler - Travelers' unit converter
//!
//! One stateless entry point, [`Converter`], dispatching a
//! [`ConversionRequest`] to the linear, temperature or currency converter.
//!
//! ```ignore
//! let converter = Converter::new(HttpRateProvider::new(RatesConfig::from_env()?)?);
//! let conversion = converter.convert_fields("Length", 10.0, "in", "cm")?;
//! assert_eq!(conversion.to_string(), "10 in = 25.4000 cm");
//! ```

mod request;
mod converter;
mod render;
mod catalog;

pub use request::{Category, ConversionRequest};
pub use converter::{Converter, Conversion};
pub use render::{Rendered, Response};
pub use catalog::{CategoryListing, UnitListing, catalog, list_units};

pub use traveler_core::{ConvertError, ErrorReport, FetchError};
pub use traveler_currency::{
    CurrencyCode, ExchangeRateQuote, HttpRateProvider, RateProvider, RatesConfig, ConfigError,
};
pub use traveler_units::{TemperatureScale, UnitCategory};

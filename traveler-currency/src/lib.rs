//! Traveler Currency - Exchange-rate conversion
//!
//! The rate lookup is an external collaborator behind [`RateProvider`]:
//! given a base currency it returns a fresh [`ExchangeRateQuote`] or a
//! typed [`FetchError`](traveler_core::FetchError). Quotes are never cached.
//!
//! [`HttpRateProvider`] talks to an exchangerate-api v6 compatible endpoint;
//! anything implementing `Fn(&CurrencyCode) -> Result<ExchangeRateQuote, FetchError>`
//! works as a provider too.

mod code;
mod quote;
mod provider;
mod http;
mod config;
mod convert;

pub use code::CurrencyCode;
pub use quote::ExchangeRateQuote;
pub use provider::RateProvider;
pub use http::{HttpRateProvider, decode_response};
pub use config::{RatesConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use convert::convert_currency;

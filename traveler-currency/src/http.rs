//! HTTP rate provider for exchangerate-api v6 compatible endpoints

use std::collections::HashMap;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use traveler_core::FetchError;
use crate::{ConfigError, CurrencyCode, ExchangeRateQuote, RateProvider, RatesConfig};

const RESULT_SUCCESS: &str = "success";

/// Wire format of `GET {base_url}/{key}/latest/{BASE}`
#[derive(Debug, Deserialize)]
struct RatesResponse {
    result: String,
    #[serde(default)]
    base_code: Option<String>,
    #[serde(default)]
    conversion_rates: Option<HashMap<String, f64>>,
    #[serde(default, rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    time_last_update_unix: Option<i64>,
}

impl RatesResponse {
    fn into_quote(self, requested: &CurrencyCode) -> Result<ExchangeRateQuote, FetchError> {
        if let Some(ref echoed) = self.base_code {
            if echoed != requested.as_str() {
                warn!(requested = %requested, echoed = %echoed, "upstream answered for a different base");
            }
        }

        if self.result != RESULT_SUCCESS {
            return Ok(ExchangeRateQuote::rejected(requested.clone(), self.error_type));
        }

        let rates = self.conversion_rates
            .ok_or_else(|| FetchError::MalformedResponse("missing conversion_rates".to_string()))?
            .into_iter()
            .filter(|(code, rate)| {
                let usable = rate.is_finite() && *rate > 0.0;
                if !usable {
                    debug!(code = %code, rate, "dropping non-positive rate");
                }
                usable
            });
        let mut quote = ExchangeRateQuote::success(requested.clone(), rates);
        quote.last_updated = self.time_last_update_unix;
        Ok(quote)
    }
}

/// Turn an HTTP status and body into a quote
///
/// A body that decodes as a rates document wins over the status: upstream
/// error documents (`"result": "error"`) arrive with 4xx codes and become
/// rejected quotes. Otherwise a failing status is [`FetchError::Http`] and an
/// undecodable 2xx body, or a success document without rates, is
/// [`FetchError::MalformedResponse`].
pub fn decode_response(base: &CurrencyCode, status: u16, body: &str) -> Result<ExchangeRateQuote, FetchError> {
    let ok_status = (200..300).contains(&status);

    match serde_json::from_str::<RatesResponse>(body) {
        Ok(resp) if ok_status || resp.result != RESULT_SUCCESS => resp.into_quote(base),
        Ok(_) => Err(FetchError::Http { status }),
        Err(e) if ok_status => Err(FetchError::MalformedResponse(e.to_string())),
        Err(_) => Err(FetchError::Http { status }),
    }
}

/// Blocking HTTP provider, one request per fetch, bounded by the configured timeout
pub struct HttpRateProvider {
    client: Client,
    config: RatesConfig,
}

impl HttpRateProvider {
    pub fn new(config: RatesConfig) -> Result<Self, ConfigError> {
        if config.api_key.is_none() {
            return Err(ConfigError::MissingApiKey);
        }

        let client = Client::builder()
            .user_agent(concat!("traveler/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RatesConfig {
        &self.config
    }

    fn url(&self, base: &CurrencyCode) -> String {
        format!(
            "{}/{}/latest/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.api_key.as_deref().unwrap_or_default(),
            base
        )
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        // without_url: the URL embeds the API key
        let err = err.without_url();
        if err.is_timeout() {
            FetchError::Timeout { secs: self.config.timeout.as_secs() }
        } else if let Some(status) = err.status() {
            FetchError::Http { status: status.as_u16() }
        } else if err.is_decode() || err.is_body() {
            FetchError::MalformedResponse(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl RateProvider for HttpRateProvider {
    fn fetch_rates(&self, base: &CurrencyCode) -> Result<ExchangeRateQuote, FetchError> {
        debug!(base = %base, endpoint = %self.config.base_url, "fetching exchange rates");

        let response = self.client.get(self.url(base)).send()
            .map_err(|e| self.classify(e))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| self.classify(e))?;

        debug!(base = %base, status, bytes = body.len(), "exchange rates received");
        decode_response(base, status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn usd() -> CurrencyCode {
        CurrencyCode::parse("USD").unwrap()
    }

    const SUCCESS_BODY: &str = r#"{
        "result": "success",
        "documentation": "https://www.exchangerate-api.com/docs",
        "time_last_update_unix": 1735689601,
        "base_code": "USD",
        "conversion_rates": { "USD": 1, "EUR": 0.9612, "JPY": 157.2, "XXX": 0 }
    }"#;

    #[test]
    fn test_decode_success() {
        let quote = decode_response(&usd(), 200, SUCCESS_BODY).unwrap();
        assert!(quote.success);
        assert_eq!(quote.base, usd());
        assert_eq!(quote.rates.get("EUR"), Some(&0.9612));
        assert_eq!(quote.rates.get("USD"), Some(&1.0));
        assert_eq!(quote.last_updated, Some(1735689601));
    }

    #[test]
    fn test_decode_drops_zero_rates() {
        let quote = decode_response(&usd(), 200, SUCCESS_BODY).unwrap();
        assert!(!quote.rates.contains_key("XXX"));
    }

    #[test]
    fn test_decode_upstream_error_document() {
        let body = r#"{"result": "error", "error-type": "unsupported-code"}"#;
        let quote = decode_response(&usd(), 404, body).unwrap();
        assert!(!quote.success);
        assert_eq!(quote.error_type.as_deref(), Some("unsupported-code"));

        let quote = decode_response(&usd(), 200, r#"{"result": "error", "error-type": "quota-reached"}"#).unwrap();
        assert!(!quote.success);
    }

    #[test]
    fn test_decode_http_error_without_document() {
        assert_eq!(
            decode_response(&usd(), 502, "<html>Bad Gateway</html>"),
            Err(FetchError::Http { status: 502 })
        );
    }

    #[test]
    fn test_decode_malformed_success_body() {
        assert!(matches!(
            decode_response(&usd(), 200, "not json"),
            Err(FetchError::MalformedResponse(_))
        ));
        assert!(matches!(
            decode_response(&usd(), 200, r#"{"conversion_rates": {}}"#),
            Err(FetchError::MalformedResponse(_))
        ));
        assert!(matches!(
            decode_response(&usd(), 200, r#"{"result": "success"}"#),
            Err(FetchError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_decode_success_with_empty_rates() {
        let body = r#"{"result": "success", "conversion_rates": {}}"#;
        let quote = decode_response(&usd(), 200, body).unwrap();
        assert!(quote.success);
        assert!(quote.rates.is_empty());
    }

    #[test]
    fn test_new_requires_api_key() {
        assert!(matches!(
            HttpRateProvider::new(RatesConfig::default()),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_url_layout() {
        let config = RatesConfig::default()
            .with_base_url("http://localhost:9/v6/")
            .with_api_key("k3y")
            .with_timeout(Duration::from_secs(1));
        let provider = HttpRateProvider::new(config).unwrap();
        assert_eq!(provider.url(&usd()), "http://localhost:9/v6/k3y/latest/USD");
    }

    #[test]
    fn test_classify_builder_error_as_transport() {
        let config = RatesConfig::default()
            .with_api_key("k3y")
            .with_timeout(Duration::from_secs(1));
        let provider = HttpRateProvider::new(config).unwrap();
        // An unparseable URL fails before any socket is opened
        let err = provider.client.get("http://[::1/k3y/latest/USD").send().unwrap_err();
        let err = provider.classify(err);
        assert!(matches!(err, FetchError::Transport(_)));
        assert!(!err.to_string().contains("k3y"));
    }

    #[test]
    #[ignore = "needs a closed loopback port"]
    fn test_unreachable_endpoint_is_unavailable() {
        let config = RatesConfig::default()
            .with_base_url("http://127.0.0.1:9/v6")
            .with_api_key("k3y")
            .with_timeout(Duration::from_secs(1));
        let provider = HttpRateProvider::new(config).unwrap();
        let err = provider.fetch_rates(&usd()).unwrap_err();
        assert!(matches!(err, FetchError::Transport(_) | FetchError::Timeout { .. }));
        assert!(!err.to_string().contains("k3y"));
    }
}

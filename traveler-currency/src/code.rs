//! ISO 4217 style currency codes

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use traveler_core::ConvertError;

/// Three upper-case ASCII letters, e.g. "USD"
///
/// Entry is case-insensitive; the stored code is always upper case, so
/// lookups against a quote are exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(s: &str) -> Result<Self, ConvertError> {
        let code = s.trim().to_ascii_uppercase();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ConvertError::invalid_input(format!(
                "currency code must be three letters, got '{}'",
                s.trim()
            )));
        }
        Ok(CurrencyCode(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ConvertError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercases_on_entry() {
        assert_eq!(CurrencyCode::parse(" eur ").unwrap().as_str(), "EUR");
        assert_eq!("Usd".parse::<CurrencyCode>().unwrap().to_string(), "USD");
    }

    #[test]
    fn test_rejects_bad_shapes() {
        for bad in ["", "US", "USDT", "U$D", "12A", "ÉUR"] {
            assert!(
                matches!(CurrencyCode::parse(bad), Err(ConvertError::InvalidInput(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_serde_validates() {
        let code: CurrencyCode = serde_json::from_str("\"jpy\"").unwrap();
        assert_eq!(code.as_str(), "JPY");
        assert!(serde_json::from_str::<CurrencyCode>("\"yen\"").is_ok());
        assert!(serde_json::from_str::<CurrencyCode>("\"dollar\"").is_err());
    }
}

//! Structured conversion errors
//!
//! Errors never crash the converter. They are values recovered at the call
//! boundary, each with a machine-readable code and a human-readable message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
    pub const UNSUPPORTED_CONVERSION: &str = "UNSUPPORTED_CONVERSION";
    pub const UNSUPPORTED_CURRENCY: &str = "UNSUPPORTED_CURRENCY";
    pub const UPSTREAM_UNAVAILABLE: &str = "UPSTREAM_UNAVAILABLE";
    pub const UPSTREAM_REJECTED: &str = "UPSTREAM_REJECTED";
}

/// Failure of a single exchange-rate fetch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP status {status}")]
    Http { status: u16 },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// No provider could be built (missing key, bad client settings)
    #[error("rate provider not configured: {0}")]
    NotConfigured(String),
}

/// Failure of a single conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Negative or non-finite amount, unknown selector, unparsable unit/scale/code
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unit pair has no entry in the unit table
    #[error("Unsupported {category} conversion: {from} to {to}")]
    UnsupportedConversion {
        category: String,
        from: String,
        to: String,
    },

    /// Target currency missing from the fetched quote
    #[error("Unsupported target currency: {0}")]
    UnsupportedCurrency(String),

    /// Rate lookup failed before a quote was obtained
    #[error("Error fetching exchange rates: {0}")]
    UpstreamUnavailable(#[from] FetchError),

    /// Upstream answered but reported non-success
    #[error("Failed to fetch exchange rate data: {0}")]
    UpstreamRejected(String),
}

impl ConvertError {
    // ========== Common Error Constructors ==========

    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::InvalidInput(details.into())
    }

    pub fn unsupported_conversion(
        category: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::UnsupportedConversion {
            category: category.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => codes::INVALID_INPUT,
            Self::UnsupportedConversion { .. } => codes::UNSUPPORTED_CONVERSION,
            Self::UnsupportedCurrency(_) => codes::UNSUPPORTED_CURRENCY,
            Self::UpstreamUnavailable(_) => codes::UPSTREAM_UNAVAILABLE,
            Self::UpstreamRejected(_) => codes::UPSTREAM_REJECTED,
        }
    }

    /// Suggestion for fixing the error, when one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InvalidInput(_) => None,
            Self::UnsupportedConversion { category, .. } => Some(format!(
                "Use `traveler units {}` to list supported units",
                category.to_lowercase()
            )),
            Self::UnsupportedCurrency(_) => {
                Some("Check the three-letter ISO 4217 code of the target currency".to_string())
            }
            Self::UpstreamUnavailable(FetchError::Timeout { .. })
            | Self::UpstreamUnavailable(FetchError::Transport(_)) => {
                Some("Check your network connection and try again".to_string())
            }
            Self::UpstreamUnavailable(FetchError::NotConfigured(_)) => {
                Some("Set TRAVELER_API_KEY to enable currency conversion".to_string())
            }
            Self::UpstreamUnavailable(_) => None,
            Self::UpstreamRejected(_) => {
                Some("Check the base currency code and the API key".to_string())
            }
        }
    }

    /// Serializable form for the presentation boundary
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            message: self.to_string(),
            suggestion: self.suggestion(),
        }
    }
}

/// Structured error as shown to the user or written as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl From<ConvertError> for ErrorReport {
    fn from(err: ConvertError) -> Self {
        err.report()
    }
}

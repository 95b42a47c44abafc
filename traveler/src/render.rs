//! Result rendering
//!
//! Rounding happens here and only here: conversions keep full precision.
//! Linear results show 4 decimals; temperatures and money show 2.

use std::fmt;
use serde::Serialize;
use traveler_core::{ConvertError, ErrorReport};
use traveler_units::UNITS;
use crate::{Category, Conversion, ConversionRequest};

impl Conversion {
    /// Source unit label as displayed
    pub fn from_label(&self) -> String {
        match &self.request {
            ConversionRequest::Linear { category, from, .. } => UNITS.canonical(*category, from).to_string(),
            ConversionRequest::Temperature { from, .. } => from.symbol().to_string(),
            ConversionRequest::Currency { base, .. } => base.to_string(),
        }
    }

    /// Target unit label as displayed
    pub fn to_label(&self) -> String {
        match &self.request {
            ConversionRequest::Linear { category, to, .. } => UNITS.canonical(*category, to).to_string(),
            ConversionRequest::Temperature { to, .. } => to.symbol().to_string(),
            ConversionRequest::Currency { target, .. } => target.to_string(),
        }
    }

    /// Decimal places used when displaying the result
    pub fn decimals(&self) -> usize {
        match self.request {
            ConversionRequest::Linear { .. } => 4,
            ConversionRequest::Temperature { .. } | ConversionRequest::Currency { .. } => 2,
        }
    }

    /// Machine-readable form
    pub fn rendered(&self) -> Rendered {
        Rendered {
            category: self.category(),
            input: self.request.input(),
            from: self.from_label(),
            to: self.to_label(),
            result: self.result,
            display: self.to_string(),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {:.*} {}",
            self.request.input(),
            self.from_label(),
            self.decimals(),
            self.result,
            self.to_label()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    pub category: Category,
    pub input: f64,
    pub from: String,
    pub to: String,
    /// Full precision
    pub result: f64,
    /// Rounded, human-readable line
    pub display: String,
}

/// One line of output for a request: either a conversion or an error report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion: Option<Rendered>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Response {
    pub fn success(conversion: &Conversion) -> Self {
        Response { ok: true, conversion: Some(conversion.rendered()), error: None }
    }

    pub fn failure(report: ErrorReport) -> Self {
        Response { ok: false, conversion: None, error: Some(report) }
    }
}

impl From<Result<Conversion, ConvertError>> for Response {
    fn from(result: Result<Conversion, ConvertError>) -> Self {
        match result {
            Ok(conversion) => Response::success(&conversion),
            Err(e) => Response::failure(e.report()),
        }
    }
}

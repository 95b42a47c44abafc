//! Conversion requests and the category selector
//!
//! Everything stringly typed is parsed here, at the boundary; past this
//! point requests carry closed enums and validated codes.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use traveler_core::ConvertError;
use traveler_currency::CurrencyCode;
use traveler_units::{TemperatureScale, UnitCategory};

/// Which converter a request is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Currency,
    Length,
    Speed,
    Volume,
    Mass,
    Temperature,
}

impl Category {
    /// All converters, in menu order
    pub const ALL: [Category; 6] = [
        Category::Currency,
        Category::Length,
        Category::Speed,
        Category::Volume,
        Category::Mass,
        Category::Temperature,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Currency => "Currency",
            Category::Length => "Length",
            Category::Speed => "Speed",
            Category::Volume => "Volume",
            Category::Mass => "Mass",
            Category::Temperature => "Temperature",
        }
    }

    /// The unit-table category behind a linear converter
    pub fn unit_category(&self) -> Option<UnitCategory> {
        match self {
            Category::Length => Some(UnitCategory::Length),
            Category::Speed => Some(UnitCategory::Speed),
            Category::Volume => Some(UnitCategory::Volume),
            Category::Mass => Some(UnitCategory::Mass),
            Category::Currency | Category::Temperature => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL.iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConvertError::invalid_input(format!("unknown converter type: {}", s.trim())))
    }
}

impl From<UnitCategory> for Category {
    fn from(category: UnitCategory) -> Self {
        match category {
            UnitCategory::Length => Category::Length,
            UnitCategory::Speed => Category::Speed,
            UnitCategory::Volume => Category::Volume,
            UnitCategory::Mass => Category::Mass,
        }
    }
}

/// A single, fully parsed conversion
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawRequest")]
pub enum ConversionRequest {
    Linear {
        category: UnitCategory,
        value: f64,
        from: String,
        to: String,
    },
    Temperature {
        value: f64,
        from: TemperatureScale,
        to: TemperatureScale,
    },
    Currency {
        amount: f64,
        base: CurrencyCode,
        target: CurrencyCode,
    },
}

impl ConversionRequest {
    /// Build a request from the form's raw fields
    ///
    /// `from`/`to` are unit symbols, temperature scales, or currency codes
    /// depending on `selector`. Currency codes are upper-cased here.
    pub fn parse(selector: &str, value: f64, from: &str, to: &str) -> Result<Self, ConvertError> {
        let category: Category = selector.parse()?;

        let request = match category {
            Category::Currency => ConversionRequest::Currency {
                amount: value,
                base: from.parse()?,
                target: to.parse()?,
            },
            Category::Temperature => ConversionRequest::Temperature {
                value,
                from: from.parse()?,
                to: to.parse()?,
            },
            Category::Length => Self::linear(UnitCategory::Length, value, from, to),
            Category::Speed => Self::linear(UnitCategory::Speed, value, from, to),
            Category::Volume => Self::linear(UnitCategory::Volume, value, from, to),
            Category::Mass => Self::linear(UnitCategory::Mass, value, from, to),
        };
        Ok(request)
    }

    fn linear(category: UnitCategory, value: f64, from: &str, to: &str) -> Self {
        ConversionRequest::Linear {
            category,
            value,
            from: from.trim().to_string(),
            to: to.trim().to_string(),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ConversionRequest::Linear { category, .. } => (*category).into(),
            ConversionRequest::Temperature { .. } => Category::Temperature,
            ConversionRequest::Currency { .. } => Category::Currency,
        }
    }

    /// The input magnitude (value or amount)
    pub fn input(&self) -> f64 {
        match self {
            ConversionRequest::Linear { value, .. } => *value,
            ConversionRequest::Temperature { value, .. } => *value,
            ConversionRequest::Currency { amount, .. } => *amount,
        }
    }
}

/// Wire shape: `{"category": "length", "value": 10, "from": "in", "to": "cm"}`
#[derive(Debug, Deserialize)]
struct RawRequest {
    category: String,
    #[serde(alias = "amount")]
    value: f64,
    from: String,
    to: String,
}

impl TryFrom<RawRequest> for ConversionRequest {
    type Error = ConvertError;

    fn try_from(raw: RawRequest) -> Result<Self, Self::Error> {
        ConversionRequest::parse(&raw.category, raw.value, &raw.from, &raw.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("length".parse::<Category>(), Ok(Category::Length));
        assert_eq!("TEMPERATURE".parse::<Category>(), Ok(Category::Temperature));
        assert_eq!(" Currency".parse::<Category>(), Ok(Category::Currency));
    }

    #[test]
    fn test_unknown_selector() {
        let err = "Pressure".parse::<Category>().unwrap_err();
        assert_eq!(err, ConvertError::InvalidInput("unknown converter type: Pressure".to_string()));
        assert!(ConversionRequest::parse("Pressure", 1.0, "bar", "psi").is_err());
    }

    #[test]
    fn test_parse_linear() {
        let req = ConversionRequest::parse("Length", 10.0, " in ", "cm").unwrap();
        assert_eq!(req, ConversionRequest::Linear {
            category: UnitCategory::Length,
            value: 10.0,
            from: "in".to_string(),
            to: "cm".to_string(),
        });
        assert_eq!(req.category(), Category::Length);
    }

    #[test]
    fn test_parse_temperature() {
        let req = ConversionRequest::parse("temperature", -5.0, "c", "kelvin").unwrap();
        assert_eq!(req, ConversionRequest::Temperature {
            value: -5.0,
            from: TemperatureScale::Celsius,
            to: TemperatureScale::Kelvin,
        });
    }

    #[test]
    fn test_parse_unknown_scale() {
        assert!(matches!(
            ConversionRequest::parse("Temperature", 1.0, "C", "X"),
            Err(ConvertError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_currency_uppercases() {
        let req = ConversionRequest::parse("currency", 20.0, "usd", "eur").unwrap();
        match req {
            ConversionRequest::Currency { amount, base, target } => {
                assert_eq!(amount, 20.0);
                assert_eq!(base.as_str(), "USD");
                assert_eq!(target.as_str(), "EUR");
            }
            other => panic!("expected currency request, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_json() {
        let req: ConversionRequest =
            serde_json::from_str(r#"{"category": "mass", "value": 1, "from": "kg", "to": "lb"}"#).unwrap();
        assert_eq!(req.category(), Category::Mass);
        assert_eq!(req.input(), 1.0);

        let req: ConversionRequest =
            serde_json::from_str(r#"{"category": "currency", "amount": 5.5, "from": "gbp", "to": "usd"}"#).unwrap();
        assert_eq!(req.category(), Category::Currency);
        assert_eq!(req.input(), 5.5);
    }

    #[test]
    fn test_deserialize_rejects_unknown_category() {
        let err = serde_json::from_str::<ConversionRequest>(
            r#"{"category": "time", "value": 1, "from": "h", "to": "min"}"#,
        ).unwrap_err();
        assert!(err.to_string().contains("unknown converter type"));
    }
}

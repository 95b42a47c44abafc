//! Linear conversion: value × factor, with identity short-circuit

use tracing::debug;
use traveler_core::{ConvertError, ensure_non_negative, ensure_representable};
use crate::{UnitCategory, UnitTable, UNITS};

impl UnitTable {
    /// Convert `value` between two units of `category` using this table
    ///
    /// Negative values are rejected before anything else. Equal units (after
    /// alias resolution) return `value` untouched without consulting the
    /// factors, provided the unit belongs to `category`.
    pub fn convert(&self, category: UnitCategory, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
        let value = ensure_non_negative(value, "value")?;

        let from = self.canonical(category, from);
        let to = self.canonical(category, to);
        if from == to {
            if self.resolve(category, from).is_none() {
                debug!(%category, unit = from, "unknown unit");
                return Err(ConvertError::unsupported_conversion(category.name(), from, to));
            }
            return Ok(value);
        }

        match self.factor(category, from, to) {
            Some(factor) => {
                debug!(%category, from, to, factor, "linear conversion");
                ensure_representable(value * factor)
            }
            None => {
                debug!(%category, from, to, "no factor for unit pair");
                Err(ConvertError::unsupported_conversion(category.name(), from, to))
            }
        }
    }
}

/// Convert using the global unit table
pub fn convert(category: UnitCategory, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    UNITS.convert(category, value, from, to)
}

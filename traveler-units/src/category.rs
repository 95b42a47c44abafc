//! Linear unit categories

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use traveler_core::ConvertError;

/// A family of units related by a pure multiplicative factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Speed,
    Volume,
    Mass,
}

impl UnitCategory {
    /// All categories, in menu order
    pub const ALL: [UnitCategory; 4] = [
        UnitCategory::Length,
        UnitCategory::Speed,
        UnitCategory::Volume,
        UnitCategory::Mass,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Speed => "Speed",
            UnitCategory::Volume => "Volume",
            UnitCategory::Mass => "Mass",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for UnitCategory {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(UnitCategory::Length),
            "speed" => Ok(UnitCategory::Speed),
            "volume" => Ok(UnitCategory::Volume),
            "mass" => Ok(UnitCategory::Mass),
            _ => Err(ConvertError::invalid_input(format!("unknown unit category: {}", s))),
        }
    }
}

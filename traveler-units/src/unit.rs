//! Unit representation

use std::fmt;
use serde::Serialize;
use crate::UnitCategory;

/// A unit the converter knows by symbol
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// The canonical symbol (e.g., "in", "km/h", "L")
    pub symbol: &'static str,
    /// The unit name (e.g., "inch", "kilometers per hour", "liter")
    pub name: &'static str,
    /// Category the unit belongs to
    pub category: UnitCategory,
    /// Alternative spellings accepted on input
    pub aliases: &'static [&'static str],
}

impl Unit {
    pub const fn new(
        symbol: &'static str,
        name: &'static str,
        category: UnitCategory,
        aliases: &'static [&'static str],
    ) -> Self {
        Unit { symbol, name, category, aliases }
    }

    /// Does `s` name this unit? Symbols and aliases match case-insensitively.
    pub fn matches(&self, s: &str) -> bool {
        let s = s.trim();
        self.symbol.eq_ignore_ascii_case(s) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn liter() -> Unit {
        Unit::new("L", "liter", UnitCategory::Volume, &["liter", "liters", "litre"])
    }

    #[test]
    fn test_matches_symbol_and_alias() {
        let l = liter();
        assert!(l.matches("L"));
        assert!(l.matches("l"));
        assert!(l.matches(" Litre "));
        assert!(!l.matches("gal"));
    }

    #[test]
    fn test_display_is_symbol() {
        assert_eq!(format!("{}", liter()), "L");
    }
}

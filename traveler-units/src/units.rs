//! Unit definitions and the conversion-factor table

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Unit, UnitCategory};

/// Global unit table, built on first use and never mutated
pub static UNITS: LazyLock<UnitTable> = LazyLock::new(UnitTable::new);

/// Units per category plus factors per ordered unit pair
///
/// Each unordered pair is registered once with a canonical factor; the
/// reverse direction is stored as its reciprocal so the two can never drift.
/// There is no entry for `(X, X)`: identity is the converter's business.
pub struct UnitTable {
    units: HashMap<UnitCategory, Vec<Unit>>,
    aliases: HashMap<(UnitCategory, String), &'static str>,
    factors: HashMap<UnitCategory, FactorMap>,
}

/// from → to → factor
type FactorMap = HashMap<&'static str, HashMap<&'static str, f64>>;

impl UnitTable {
    /// The standard table
    pub fn new() -> Self {
        let mut table = UnitTable::empty();
        table.register_all_units();
        table
    }

    /// A table with no units, for building custom tables
    pub fn empty() -> Self {
        UnitTable {
            units: HashMap::new(),
            aliases: HashMap::new(),
            factors: HashMap::new(),
        }
    }

    /// Resolve a symbol or alias within a category
    pub fn resolve(&self, category: UnitCategory, s: &str) -> Option<&Unit> {
        let key = (category, s.trim().to_lowercase());
        let symbol = self.aliases.get(&key)?;
        self.units(category).iter().find(|u| u.symbol == *symbol)
    }

    /// Canonical symbol for `s`, or `s` itself (trimmed) when unknown
    pub fn canonical<'a>(&self, category: UnitCategory, s: &'a str) -> &'a str {
        match self.resolve(category, s) {
            Some(unit) => unit.symbol,
            None => s.trim(),
        }
    }

    /// Units of a category in registration order
    pub fn units(&self, category: UnitCategory) -> &[Unit] {
        self.units.get(&category).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Raw factor lookup by canonical symbols
    pub fn factor(&self, category: UnitCategory, from: &str, to: &str) -> Option<f64> {
        self.factors.get(&category)?.get(from)?.get(to).copied()
    }

    /// All ordered pairs of a category with their factors
    pub fn pairs(&self, category: UnitCategory) -> Vec<(&'static str, &'static str, f64)> {
        self.factors.get(&category)
            .map(|m| {
                m.iter()
                    .flat_map(|(from, targets)| targets.iter().map(move |(to, factor)| (*from, *to, *factor)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Add a unit; its symbol and aliases become resolvable
    pub fn register(&mut self, unit: Unit) {
        let category = unit.category;
        self.aliases.insert((category, unit.symbol.to_lowercase()), unit.symbol);
        for alias in unit.aliases {
            self.aliases.insert((category, alias.to_lowercase()), unit.symbol);
        }
        self.units.entry(category).or_default().push(unit);
    }

    /// Register `from → to` with `factor` and `to → from` with its reciprocal
    pub fn register_pair(&mut self, category: UnitCategory, from: &'static str, to: &'static str, factor: f64) {
        debug_assert!(factor.is_finite() && factor > 0.0, "factor must be positive: {from} → {to}");
        debug_assert!(from != to, "identity pairs are not stored");
        let pairs = self.factors.entry(category).or_default();
        pairs.entry(from).or_default().insert(to, factor);
        pairs.entry(to).or_default().insert(from, 1.0 / factor);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_speed_units();
        self.register_volume_units();
        self.register_mass_units();
    }

    fn register_length_units(&mut self) {
        use UnitCategory::Length;

        self.register(Unit::new("in", "inch", Length, &["inch", "inches"]));
        self.register(Unit::new("cm", "centimeter", Length, &["centimeter", "centimeters", "centimetre", "centimetres"]));
        self.register(Unit::new("m", "meter", Length, &["meter", "meters", "metre", "metres"]));
        self.register(Unit::new("ft", "foot", Length, &["foot", "feet"]));

        self.register_pair(Length, "in", "cm", 2.54);
        self.register_pair(Length, "in", "m", 0.0254);
        self.register_pair(Length, "ft", "in", 12.0);
        self.register_pair(Length, "m", "cm", 100.0);
        self.register_pair(Length, "ft", "cm", 30.48);
        self.register_pair(Length, "ft", "m", 0.3048);
    }

    fn register_speed_units(&mut self) {
        use UnitCategory::Speed;

        self.register(Unit::new("km/h", "kilometers per hour", Speed, &["kmh", "kph", "km/hr", "kilometers per hour"]));
        self.register(Unit::new("mph", "miles per hour", Speed, &["mi/h", "miles per hour"]));

        self.register_pair(Speed, "mph", "km/h", 1.60934);
    }

    fn register_volume_units(&mut self) {
        use UnitCategory::Volume;

        self.register(Unit::new("gal", "US gallon", Volume, &["gallon", "gallons"]));
        self.register(Unit::new("L", "liter", Volume, &["liter", "liters", "litre", "litres"]));

        self.register_pair(Volume, "gal", "L", 3.78541);
    }

    fn register_mass_units(&mut self) {
        use UnitCategory::Mass;

        self.register(Unit::new("lb", "pound", Mass, &["lbs", "pound", "pounds"]));
        self.register(Unit::new("oz", "ounce", Mass, &["ounce", "ounces"]));
        self.register(Unit::new("kg", "kilogram", Mass, &["kilo", "kilos", "kilogram", "kilograms"]));

        self.register_pair(Mass, "lb", "oz", 16.0);
        self.register_pair(Mass, "kg", "lb", 2.20462);
        self.register_pair(Mass, "oz", "kg", 0.0283495);
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::new()
    }
}

//! What can be converted: categories with their units and accepted aliases

use serde::Serialize;
use traveler_units::{TemperatureScale, UNITS};
use crate::Category;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryListing {
    pub category: Category,
    pub units: Vec<UnitListing>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitListing {
    pub symbol: String,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

/// Units accepted by `category`. Currency lists nothing: its codes come from the provider.
pub fn list_units(category: Category) -> CategoryListing {
    let units = match category.unit_category() {
        Some(unit_category) => UNITS.units(unit_category).iter()
            .map(|u| UnitListing {
                symbol: u.symbol.to_string(),
                name: u.name.to_string(),
                aliases: u.aliases.iter().map(|a| a.to_string()).collect(),
            })
            .collect(),
        None if category == Category::Temperature => TemperatureScale::ALL.iter()
            .map(|s| UnitListing {
                symbol: s.symbol().to_string(),
                name: s.name().to_string(),
                aliases: vec![s.name().to_lowercase()],
            })
            .collect(),
        None => Vec::new(),
    };
    CategoryListing { category, units }
}

/// Every category, in menu order
pub fn catalog() -> Vec<CategoryListing> {
    Category::ALL.iter().map(|c| list_units(*c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_categories() {
        let listing = catalog();
        assert_eq!(listing.len(), 6);
        assert_eq!(listing[0].category, Category::Currency);
        assert!(listing[0].units.is_empty());
    }

    #[test]
    fn test_length_units() {
        let symbols: Vec<_> = list_units(Category::Length).units.into_iter().map(|u| u.symbol).collect();
        assert_eq!(symbols, vec!["in", "cm", "m", "ft"]);
    }

    #[test]
    fn test_temperature_scales() {
        let listing = list_units(Category::Temperature);
        assert_eq!(listing.units.len(), 3);
        assert_eq!(listing.units[2].symbol, "K");
        assert_eq!(listing.units[2].aliases, vec!["kelvin".to_string()]);
    }
}

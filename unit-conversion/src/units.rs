//! Unit groupings offered to callers for selection lists.
//!
//! This listing is descriptive and is not derived from the conversion table,
//! so a listed unit can lack a table path to another unit of its category.

use serde::Serialize;

/// Measurement category of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UnitCategory {
    Volume,
    Weight,
    Temperature,
}

impl UnitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Volume => "Volume",
            UnitCategory::Weight => "Weight",
            UnitCategory::Temperature => "Temperature",
        }
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category and its unit tokens, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitGroup {
    pub category: UnitCategory,
    pub units: &'static [&'static str],
}

const SUPPORTED_UNITS: &[UnitGroup] = &[
    UnitGroup {
        category: UnitCategory::Volume,
        units: &["ml", "cups", "tbsp", "tsp"],
    },
    UnitGroup {
        category: UnitCategory::Weight,
        units: &["g", "oz", "lb"],
    },
    UnitGroup {
        category: UnitCategory::Temperature,
        units: &["C", "F"],
    },
];

/// Units grouped by category, in display order.
pub fn supported_units() -> &'static [UnitGroup] {
    SUPPORTED_UNITS
}

/// Category of a listed unit, matched case-insensitively.
pub fn unit_category(unit: &str) -> Option<UnitCategory> {
    SUPPORTED_UNITS
        .iter()
        .find(|group| group.units.iter().any(|u| u.eq_ignore_ascii_case(unit)))
        .map(|group| group.category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        let categories: Vec<_> = supported_units().iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec![
                UnitCategory::Volume,
                UnitCategory::Weight,
                UnitCategory::Temperature
            ]
        );
    }

    #[test]
    fn test_volume_units_in_order() {
        assert_eq!(supported_units()[0].units, &["ml", "cups", "tbsp", "tsp"]);
    }

    #[test]
    fn test_unit_category() {
        assert_eq!(unit_category("cups"), Some(UnitCategory::Volume));
        assert_eq!(unit_category("LB"), Some(UnitCategory::Weight));
        assert_eq!(unit_category("c"), Some(UnitCategory::Temperature));
        assert_eq!(unit_category("pinch"), None);
    }

    #[test]
    fn test_serializes_category_names() {
        let json = serde_json::to_value(supported_units()).unwrap();
        assert_eq!(json[2]["category"], "Temperature");
        assert_eq!(json[2]["units"], serde_json::json!(["C", "F"]));
    }
}

//! Fixed conversion table for recipe measurements.
//!
//! Each relation is stored once, in one direction. `convert` resolves the
//! opposite direction by inverting the stored entry.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::ConversionError;

/// Millilitres in one US cup.
pub const ML_PER_CUP: f64 = 236.588;
pub const ML_PER_TBSP: f64 = 14.7868;
pub const ML_PER_TSP: f64 = 4.92892;
pub const GRAMS_PER_OZ: f64 = 28.3495;
pub const GRAMS_PER_LB: f64 = 453.592;

// =============================================================================
// Data structures
// =============================================================================

/// How a value moves from one unit to another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conversion {
    /// `value * ratio`
    Linear { ratio: f64 },
    /// `value * scale + offset`
    Affine { scale: f64, offset: f64 },
}

impl Conversion {
    /// Apply the conversion in its stored direction.
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Conversion::Linear { ratio } => value * ratio,
            Conversion::Affine { scale, offset } => value * scale + offset,
        }
    }

    /// Apply the conversion in the opposite direction.
    pub fn invert(&self, value: f64) -> f64 {
        match *self {
            Conversion::Linear { ratio } => value / ratio,
            Conversion::Affine { scale, offset } => (value - offset) / scale,
        }
    }
}

/// One row of the table: `from` converts to `to` via `conversion`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableEntry {
    pub from: &'static str,
    pub to: &'static str,
    pub conversion: Conversion,
}

/// Stored rows, lowercase unit tokens.
const ENTRIES: &[TableEntry] = &[
    // Volume
    TableEntry {
        from: "cups",
        to: "ml",
        conversion: Conversion::Linear { ratio: ML_PER_CUP },
    },
    TableEntry {
        from: "tbsp",
        to: "ml",
        conversion: Conversion::Linear { ratio: ML_PER_TBSP },
    },
    TableEntry {
        from: "tsp",
        to: "ml",
        conversion: Conversion::Linear { ratio: ML_PER_TSP },
    },
    // Weight
    TableEntry {
        from: "oz",
        to: "g",
        conversion: Conversion::Linear {
            ratio: GRAMS_PER_OZ,
        },
    },
    TableEntry {
        from: "lb",
        to: "g",
        conversion: Conversion::Linear {
            ratio: GRAMS_PER_LB,
        },
    },
    // Temperature
    TableEntry {
        from: "c",
        to: "f",
        conversion: Conversion::Affine {
            scale: 9.0 / 5.0,
            offset: 32.0,
        },
    },
];

/// Direction in which a table entry was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Lookup index over the stored rows, keyed by `"{from}_to_{to}"`.
pub struct ConversionTable {
    index: HashMap<String, Conversion>,
}

static TABLE: LazyLock<ConversionTable> = LazyLock::new(|| ConversionTable {
    index: ENTRIES
        .iter()
        .map(|entry| (lookup_key(entry.from, entry.to), entry.conversion))
        .collect(),
});

fn lookup_key(from: &str, to: &str) -> String {
    format!("{}_to_{}", from.to_lowercase(), to.to_lowercase())
}

// =============================================================================
// Public API
// =============================================================================

impl ConversionTable {
    /// The process-wide table.
    pub fn global() -> &'static ConversionTable {
        &TABLE
    }

    /// Stored rows in declaration order.
    pub fn entries(&self) -> &'static [TableEntry] {
        ENTRIES
    }

    /// Find the stored conversion for a pair, trying the reverse key when the
    /// direct one is absent. Unit tokens are matched case-insensitively.
    pub fn lookup(&self, from_unit: &str, to_unit: &str) -> Option<(Conversion, Direction)> {
        if let Some(conversion) = self.index.get(&lookup_key(from_unit, to_unit)) {
            return Some((*conversion, Direction::Forward));
        }
        self.index
            .get(&lookup_key(to_unit, from_unit))
            .map(|conversion| (*conversion, Direction::Reverse))
    }

    /// Convert `value` from `from_unit` to `to_unit`.
    pub fn convert(
        &self,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Result<f64, ConversionError> {
        if from_unit.eq_ignore_ascii_case(to_unit) {
            return Ok(value);
        }

        match self.lookup(from_unit, to_unit) {
            Some((conversion, Direction::Forward)) => Ok(conversion.apply(value)),
            Some((conversion, Direction::Reverse)) => {
                tracing::debug!(from_unit, to_unit, "Using reverse conversion entry");
                Ok(conversion.invert(value))
            }
            None => {
                tracing::debug!(from_unit, to_unit, "No conversion entry");
                Err(ConversionError::ConversionNotFound {
                    from: from_unit.to_string(),
                    to: to_unit.to_string(),
                })
            }
        }
    }
}

/// Convert `value` between two units using the global table.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConversionError> {
    ConversionTable::global().convert(value, from_unit, to_unit)
}

//! Unit conversion for recipe measurements.
//!
//! A fixed table of linear (volume, weight) and affine (temperature)
//! conversions. Each relation is stored in one direction only; the opposite
//! direction is inferred by inverting the stored entry.
//!
//! # Example
//!
//! ```
//! use unit_conversion::{convert, supported_units};
//!
//! let fahrenheit = convert(100.0, "C", "F").unwrap();
//! assert_eq!(fahrenheit, 212.0);
//!
//! let cups = convert(236.588, "ml", "cups").unwrap();
//! assert!((cups - 1.0).abs() < 1e-3);
//!
//! assert!(convert(5.0, "xyz", "abc").is_err());
//! assert_eq!(supported_units().len(), 3);
//! ```

mod conversion_table;
mod error;
mod units;

pub use conversion_table::{
    convert, Conversion, ConversionTable, Direction, TableEntry, GRAMS_PER_LB, GRAMS_PER_OZ,
    ML_PER_CUP, ML_PER_TBSP, ML_PER_TSP,
};
pub use error::ConversionError;
pub use units::{supported_units, unit_category, UnitCategory, UnitGroup};

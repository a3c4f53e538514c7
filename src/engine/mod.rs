//! Conversion engine.
//!
//! Dispatches by category: the Temperature category uses the explicit
//! affine formula table, every other category goes through the unit
//! registry and expression parser. Failures are a typed [`ConversionError`]
//! rather than a caught-and-stringified exception.

pub mod expression;
pub mod format;
pub mod registry;
pub mod temperature;

use thiserror::Error;

use crate::catalog;

pub use format::format_magnitude;

/// A successful conversion: the numeric magnitude and the unit it is
/// expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub magnitude: f64,
    pub unit_label: String,
}

/// Why a conversion could not be performed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConversionError {
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
    #[error("cannot parse unit expression '{0}'")]
    InvalidExpression(String),
    #[error("cannot convert '{from}' to '{to}': incompatible dimensions")]
    IncompatibleDimensions { from: String, to: String },
}

/// Convert `value` from `from_unit` to `to_unit` within `category`.
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    category: &str,
) -> Result<Conversion, ConversionError> {
    if catalog::is_temperature(category) {
        let (magnitude, unit_label) = temperature::convert(value, from_unit, to_unit);
        return Ok(Conversion { magnitude, unit_label });
    }

    let from = expression::parse(from_unit)?;
    let to = expression::parse(to_unit)?;

    if from.dimension != to.dimension {
        return Err(ConversionError::IncompatibleDimensions {
            from: from_unit.to_string(),
            to: to_unit.to_string(),
        });
    }

    Ok(Conversion {
        magnitude: value * from.factor / to.factor,
        unit_label: to_unit.trim().to_string(),
    })
}

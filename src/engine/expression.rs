//! Unit expression parsing.
//!
//! Grammar, small on purpose — it covers every unit string the catalog
//! offers plus obvious combinations of the same atoms:
//!
//! - `meter` — a single atom
//! - `square meter`, `cubic inch` — power words applied to the next atom
//! - `watt hour` — space-separated atoms multiply
//! - `kilometer/hour`, `mile/gallon` — `/` divides; chains fold left

use super::ConversionError;
use super::registry::{self, Dimension};

/// A parsed unit expression: overall dimension and factor to base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedUnit {
    pub dimension: Dimension,
    pub factor: f64,
}

/// Parse a unit expression into its dimension and base-unit factor.
pub fn parse(expr: &str) -> Result<ParsedUnit, ConversionError> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::InvalidExpression(expr.to_string()));
    }

    let mut parts = trimmed.split('/');
    // split always yields at least one element
    let mut result = parse_product(parts.next().unwrap_or_default(), expr)?;

    for denominator in parts {
        let den = parse_product(denominator, expr)?;
        result = ParsedUnit {
            dimension: result.dimension.divide(den.dimension),
            factor: result.factor / den.factor,
        };
    }

    Ok(result)
}

/// Parse a product of atoms: whitespace-separated names, with `square` and
/// `cubic` raising the following atom to a power.
fn parse_product(product: &str, original: &str) -> Result<ParsedUnit, ConversionError> {
    let mut dimension = Dimension::DIMENSIONLESS;
    let mut factor = 1.0;
    let mut exponent: i8 = 1;
    let mut saw_atom = false;

    for token in product.split_whitespace() {
        match token {
            "square" => exponent = 2,
            "cubic" => exponent = 3,
            name => {
                let atom = registry::lookup(name)
                    .ok_or_else(|| ConversionError::UnknownUnit(name.to_string()))?;
                dimension = dimension.multiply(atom.dimension.pow(exponent));
                factor *= atom.factor.powi(exponent as i32);
                exponent = 1;
                saw_atom = true;
            }
        }
    }

    // A dangling power word ("square /") or an empty side of a slash
    if !saw_atom || exponent != 1 {
        return Err(ConversionError::InvalidExpression(original.to_string()));
    }

    Ok(ParsedUnit { dimension, factor })
}

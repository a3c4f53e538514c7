//! Temperature conversion table.
//!
//! Temperature scales are affine (scale plus offset), so they do not fit the
//! multiplicative registry. The six ordered pairs below are the complete
//! table; any pair not listed — including same-unit pairs — falls back to
//! identity, returning the input value labelled with the source unit.

/// Look up the formula for an ordered (from, to) pair.
fn formula(from_unit: &str, to_unit: &str) -> Option<fn(f64) -> f64> {
    match (from_unit, to_unit) {
        ("celsius", "fahrenheit") => Some(|x| x * 9.0 / 5.0 + 32.0),
        ("fahrenheit", "celsius") => Some(|x| (x - 32.0) * 5.0 / 9.0),
        ("celsius", "kelvin") => Some(|x| x + 273.15),
        ("kelvin", "celsius") => Some(|x| x - 273.15),
        ("fahrenheit", "kelvin") => Some(|x| (x - 32.0) * 5.0 / 9.0 + 273.15),
        ("kelvin", "fahrenheit") => Some(|x| (x - 273.15) * 9.0 / 5.0 + 32.0),
        _ => None,
    }
}

/// Convert a temperature value. Returns the magnitude and the unit label it
/// is expressed in: the destination unit when the pair is in the table, the
/// source unit for the identity fallback.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> (f64, String) {
    match formula(from_unit, to_unit) {
        Some(f) => (f(value), to_unit.to_string()),
        None => (value, from_unit.to_string()),
    }
}

//! Static catalog of unit categories.
//!
//! Maps each of the 14 supported categories to its ordered list of unit
//! names. The catalog is fixed at compile time; selectors must only ever
//! offer units from the selected category's list.

/// Ordered list of supported categories, in display order.
pub const CATEGORIES: [&str; 14] = [
    "Length",
    "Weight",
    "Temperature",
    "Speed",
    "Area",
    "Data Transfer Rate",
    "Digital Storage",
    "Energy",
    "Frequency",
    "Fuel Economy",
    "Plane Angle",
    "Pressure",
    "Time",
    "Volume",
];

/// Return the ordered unit names for a category, or `None` if the category
/// is not one of the 14 supported ones.
pub fn units_for(category: &str) -> Option<&'static [&'static str]> {
    let units: &[&str] = match category {
        "Length" => &["meter", "kilometer", "mile", "yard", "foot", "inch"],
        "Weight" => &["gram", "kilogram", "pound", "ounce", "ton"],
        "Temperature" => &["celsius", "fahrenheit", "kelvin"],
        "Speed" => &["meter/second", "kilometer/hour", "mile/hour", "knot"],
        "Area" => {
            &["square meter", "square kilometer", "square mile", "square foot", "square inch"]
        }
        "Data Transfer Rate" => {
            &["bit/second", "kilobit/second", "megabit/second", "gigabit/second", "terabit/second"]
        }
        "Digital Storage" => &["bit", "byte", "kilobyte", "megabyte", "gigabyte", "terabyte"],
        "Energy" => &["joule", "kilojoule", "calorie", "kilocalorie", "watt hour"],
        "Frequency" => &["hertz", "kilohertz", "megahertz", "gigahertz"],
        "Fuel Economy" => &["kilometer/liter", "mile/gallon"],
        "Plane Angle" => &["degree", "radian"],
        "Pressure" => &["pascal", "bar", "psi"],
        "Time" => &["second", "minute", "hour", "day", "week", "month", "year"],
        "Volume" => &["liter", "milliliter", "cubic meter", "cubic inch", "gallon"],
        _ => return None,
    };
    Some(units)
}

/// Whether a category uses the dedicated temperature formula table instead
/// of the general unit registry.
pub fn is_temperature(category: &str) -> bool {
    category == "Temperature"
}

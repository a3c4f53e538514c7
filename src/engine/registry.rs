//! Static unit registry.
//!
//! Every unit atom is defined by a dimension vector (exponents over the five
//! base dimensions: length, mass, time, data, angle) and a scale factor to
//! the base unit of that dimension (meter, kilogram, second, bit, radian).
//! Compound units like "kilometer/hour" are built from these atoms by the
//! expression parser, never stored here.

use std::collections::HashMap;
use std::f64::consts::PI;

use once_cell::sync::Lazy;

/// Exponents over the base dimensions. Two units are convertible exactly
/// when their dimensions are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
    pub data: i8,
    pub angle: i8,
}

impl Dimension {
    pub const fn new(length: i8, mass: i8, time: i8, data: i8, angle: i8) -> Self {
        Self { length, mass, time, data, angle }
    }

    pub const DIMENSIONLESS: Dimension = Dimension::new(0, 0, 0, 0, 0);
    pub const LENGTH: Dimension = Dimension::new(1, 0, 0, 0, 0);
    pub const MASS: Dimension = Dimension::new(0, 1, 0, 0, 0);
    pub const TIME: Dimension = Dimension::new(0, 0, 1, 0, 0);
    pub const DATA: Dimension = Dimension::new(0, 0, 0, 1, 0);
    pub const ANGLE: Dimension = Dimension::new(0, 0, 0, 0, 1);
    /// Mass * length^2 / time^2 (joule).
    pub const ENERGY: Dimension = Dimension::new(2, 1, -2, 0, 0);
    /// Mass * length^2 / time^3 (watt).
    pub const POWER: Dimension = Dimension::new(2, 1, -3, 0, 0);
    /// Mass / (length * time^2) (pascal).
    pub const PRESSURE: Dimension = Dimension::new(-1, 1, -2, 0, 0);
    /// 1 / time (hertz).
    pub const FREQUENCY: Dimension = Dimension::new(0, 0, -1, 0, 0);
    /// Length / time.
    pub const SPEED: Dimension = Dimension::new(1, 0, -1, 0, 0);

    /// Combine with another dimension under multiplication.
    pub fn multiply(self, other: Dimension) -> Dimension {
        Dimension {
            length: self.length + other.length,
            mass: self.mass + other.mass,
            time: self.time + other.time,
            data: self.data + other.data,
            angle: self.angle + other.angle,
        }
    }

    /// Combine with another dimension under division.
    pub fn divide(self, other: Dimension) -> Dimension {
        Dimension {
            length: self.length - other.length,
            mass: self.mass - other.mass,
            time: self.time - other.time,
            data: self.data - other.data,
            angle: self.angle - other.angle,
        }
    }

    /// Raise every exponent to a power ("square", "cubic").
    pub fn pow(self, exp: i8) -> Dimension {
        Dimension {
            length: self.length * exp,
            mass: self.mass * exp,
            time: self.time * exp,
            data: self.data * exp,
            angle: self.angle * exp,
        }
    }
}

/// A single unit atom: its dimension and its factor to base units.
#[derive(Debug, Clone, Copy)]
pub struct UnitDef {
    pub dimension: Dimension,
    pub factor: f64,
}

const fn unit(dimension: Dimension, factor: f64) -> UnitDef {
    UnitDef { dimension, factor }
}

/// Registry of unit atoms, initialized once on first use.
static REGISTRY: Lazy<HashMap<&'static str, UnitDef>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Length (base: meter)
    m.insert("meter", unit(Dimension::LENGTH, 1.0));
    m.insert("kilometer", unit(Dimension::LENGTH, 1000.0));
    m.insert("mile", unit(Dimension::LENGTH, 1609.344));
    m.insert("yard", unit(Dimension::LENGTH, 0.9144));
    m.insert("foot", unit(Dimension::LENGTH, 0.3048));
    m.insert("inch", unit(Dimension::LENGTH, 0.0254));

    // Mass (base: kilogram)
    m.insert("gram", unit(Dimension::MASS, 1e-3));
    m.insert("kilogram", unit(Dimension::MASS, 1.0));
    m.insert("pound", unit(Dimension::MASS, 0.453_592_37));
    m.insert("ounce", unit(Dimension::MASS, 0.028_349_523_125));
    m.insert("ton", unit(Dimension::MASS, 907.184_74)); // US short ton

    // Time (base: second)
    m.insert("second", unit(Dimension::TIME, 1.0));
    m.insert("minute", unit(Dimension::TIME, 60.0));
    m.insert("hour", unit(Dimension::TIME, 3600.0));
    m.insert("day", unit(Dimension::TIME, 86_400.0));
    m.insert("week", unit(Dimension::TIME, 604_800.0));
    // Julian year and one twelfth of it
    m.insert("year", unit(Dimension::TIME, 31_557_600.0));
    m.insert("month", unit(Dimension::TIME, 2_629_800.0));

    // Speed atoms (compound speeds come from the expression parser)
    m.insert("knot", unit(Dimension::SPEED, 1852.0 / 3600.0));

    // Data (base: bit)
    m.insert("bit", unit(Dimension::DATA, 1.0));
    m.insert("byte", unit(Dimension::DATA, 8.0));
    m.insert("kilobit", unit(Dimension::DATA, 1e3));
    m.insert("megabit", unit(Dimension::DATA, 1e6));
    m.insert("gigabit", unit(Dimension::DATA, 1e9));
    m.insert("terabit", unit(Dimension::DATA, 1e12));
    m.insert("kilobyte", unit(Dimension::DATA, 8e3));
    m.insert("megabyte", unit(Dimension::DATA, 8e6));
    m.insert("gigabyte", unit(Dimension::DATA, 8e9));
    m.insert("terabyte", unit(Dimension::DATA, 8e12));

    // Energy (base: joule) and power, so "watt hour" composes to 3600 J
    m.insert("joule", unit(Dimension::ENERGY, 1.0));
    m.insert("kilojoule", unit(Dimension::ENERGY, 1e3));
    m.insert("calorie", unit(Dimension::ENERGY, 4.184));
    m.insert("kilocalorie", unit(Dimension::ENERGY, 4184.0));
    m.insert("watt", unit(Dimension::POWER, 1.0));

    // Frequency (base: hertz)
    m.insert("hertz", unit(Dimension::FREQUENCY, 1.0));
    m.insert("kilohertz", unit(Dimension::FREQUENCY, 1e3));
    m.insert("megahertz", unit(Dimension::FREQUENCY, 1e6));
    m.insert("gigahertz", unit(Dimension::FREQUENCY, 1e9));

    // Plane angle (base: radian)
    m.insert("radian", unit(Dimension::ANGLE, 1.0));
    m.insert("degree", unit(Dimension::ANGLE, PI / 180.0));

    // Pressure (base: pascal)
    m.insert("pascal", unit(Dimension::PRESSURE, 1.0));
    m.insert("bar", unit(Dimension::PRESSURE, 1e5));
    m.insert("psi", unit(Dimension::PRESSURE, 6894.757_293_168));

    // Volume (base: cubic meter); "cubic meter" itself composes from length
    m.insert("liter", unit(Dimension::LENGTH.pow(3), 1e-3));
    m.insert("milliliter", unit(Dimension::LENGTH.pow(3), 1e-6));
    m.insert("gallon", unit(Dimension::LENGTH.pow(3), 3.785_411_784e-3)); // US gallon

    m
});

/// Look up a unit atom by name.
pub fn lookup(name: &str) -> Option<UnitDef> {
    REGISTRY.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_atoms() {
        let meter = lookup("meter").unwrap();
        assert_eq!(meter.dimension, Dimension::LENGTH);
        assert_eq!(meter.factor, 1.0);

        let mile = lookup("mile").unwrap();
        assert_eq!(mile.factor, 1609.344);
    }

    #[test]
    fn test_lookup_unknown_atom() {
        assert!(lookup("parsec").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_temperature_atoms_are_not_in_registry() {
        // Temperature is affine and handled by its own formula table
        assert!(lookup("celsius").is_none());
        assert!(lookup("fahrenheit").is_none());
        assert!(lookup("kelvin").is_none());
    }

    #[test]
    fn test_dimension_algebra() {
        let speed = Dimension::LENGTH.divide(Dimension::TIME);
        assert_eq!(speed, Dimension::SPEED);

        let area = Dimension::LENGTH.pow(2);
        assert_eq!(area, Dimension::new(2, 0, 0, 0, 0));

        let energy = Dimension::POWER.multiply(Dimension::TIME);
        assert_eq!(energy, Dimension::ENERGY);
    }

    #[test]
    fn test_watt_hour_composes_to_joules() {
        let watt = lookup("watt").unwrap();
        let hour = lookup("hour").unwrap();
        assert_eq!(watt.dimension.multiply(hour.dimension), Dimension::ENERGY);
        assert_eq!(watt.factor * hour.factor, 3600.0);
    }

    #[test]
    fn test_byte_is_eight_bits() {
        let byte = lookup("byte").unwrap();
        let bit = lookup("bit").unwrap();
        assert_eq!(byte.dimension, bit.dimension);
        assert_eq!(byte.factor / bit.factor, 8.0);
    }
}

//! Static table of recognised unit symbols.
//!
//! Every entry belongs to a [`Category`] and carries a linear factor to that
//! category's canonical unit. Symbols missing from the table are opaque: they
//! only ever match themselves.

use phf::phf_map;
use std::f64::consts::PI;

/// A conversion family sharing one canonical unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Length,
    Mass,
    Duration,
    Angle,
}

impl Category {
    /// Symbol of the unit whose factor is exactly one.
    pub fn canonical_symbol(self) -> &'static str {
        match self {
            Category::Length => "m",
            Category::Mass => "kg",
            Category::Duration => "s",
            Category::Angle => "rad",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitDef {
    /// Preferred short symbol; aliases point at the same symbol.
    pub symbol: &'static str,
    pub category: Category,
    pub factor: f64,
}

const fn def(symbol: &'static str, category: Category, factor: f64) -> UnitDef {
    UnitDef {
        symbol,
        category,
        factor,
    }
}

static UNITS: phf::Map<&'static str, UnitDef> = phf_map! {
    // Length, canonical metre
    "m" => def("m", Category::Length, 1.0),
    "cm" => def("cm", Category::Length, 0.01),
    "mm" => def("mm", Category::Length, 0.001),
    "km" => def("km", Category::Length, 1000.0),
    "dm" => def("dm", Category::Length, 0.1),
    "ft" => def("ft", Category::Length, 0.3048),
    "in" => def("in", Category::Length, 0.0254),
    "yd" => def("yd", Category::Length, 0.9144),
    "mile" => def("mile", Category::Length, 1609.344),
    "meter" => def("m", Category::Length, 1.0),
    "meters" => def("m", Category::Length, 1.0),
    "metre" => def("m", Category::Length, 1.0),
    "metres" => def("m", Category::Length, 1.0),
    "centimeter" => def("cm", Category::Length, 0.01),
    "centimeters" => def("cm", Category::Length, 0.01),
    "millimeter" => def("mm", Category::Length, 0.001),
    "millimeters" => def("mm", Category::Length, 0.001),
    "kilometer" => def("km", Category::Length, 1000.0),
    "kilometers" => def("km", Category::Length, 1000.0),
    "foot" => def("ft", Category::Length, 0.3048),
    "feet" => def("ft", Category::Length, 0.3048),
    "inch" => def("in", Category::Length, 0.0254),
    "inches" => def("in", Category::Length, 0.0254),
    "yard" => def("yd", Category::Length, 0.9144),
    "yards" => def("yd", Category::Length, 0.9144),
    "miles" => def("mile", Category::Length, 1609.344),

    // Mass, canonical kilogram
    "kg" => def("kg", Category::Mass, 1.0),
    "g" => def("g", Category::Mass, 0.001),
    "mg" => def("mg", Category::Mass, 0.000001),
    "kilogram" => def("kg", Category::Mass, 1.0),
    "kilograms" => def("kg", Category::Mass, 1.0),
    "gram" => def("g", Category::Mass, 0.001),
    "grams" => def("g", Category::Mass, 0.001),

    // Duration, canonical second
    "s" => def("s", Category::Duration, 1.0),
    "ms" => def("ms", Category::Duration, 0.001),
    "min" => def("min", Category::Duration, 60.0),
    "h" => def("h", Category::Duration, 3600.0),
    "d" => def("d", Category::Duration, 86400.0),
    "second" => def("s", Category::Duration, 1.0),
    "seconds" => def("s", Category::Duration, 1.0),
    "minute" => def("min", Category::Duration, 60.0),
    "minutes" => def("min", Category::Duration, 60.0),
    "hour" => def("h", Category::Duration, 3600.0),
    "hours" => def("h", Category::Duration, 3600.0),

    // Angle, canonical radian
    "rad" => def("rad", Category::Angle, 1.0),
    "deg" => def("deg", Category::Angle, PI / 180.0),
    "radian" => def("rad", Category::Angle, 1.0),
    "radians" => def("rad", Category::Angle, 1.0),
    "degree" => def("deg", Category::Angle, PI / 180.0),
    "degrees" => def("deg", Category::Angle, PI / 180.0),
};

/// Looks up a registered symbol or alias. Case-sensitive.
pub fn lookup(symbol: &str) -> Option<&'static UnitDef> {
    UNITS.get(symbol)
}

/// All registered symbols and aliases, in no particular order.
pub fn symbols() -> impl Iterator<Item = &'static str> {
    UNITS.keys().copied()
}

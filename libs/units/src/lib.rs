#![forbid(unsafe_code)]
//! Units for dimensioned quantities.
//!
//! A [`Unit`] is a small structural tree: registered or opaque atomic symbols
//! combined through products, quotients, integer powers and square roots.
//! Conversion between two units is only defined between structurally
//! congruent trees whose atomic leaves share a registry [`Category`].

mod error;
mod parser;
mod quantity;
mod registry;
mod unit;

pub use error::{Error, Result};
pub use quantity::{format_magnitude, Quantity};
pub use registry::{lookup, symbols, Category, UnitDef};
pub use unit::Unit;

/// Converts a bare value between two unit texts.
///
/// Both texts are read with [`Unit::parse`], so compound targets such as
/// `km/h` work as long as both sides have the same shape.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64> {
    let from_unit = Unit::parse(from)?;
    let to_unit = Unit::parse(to)?;
    let factor = from_unit
        .conversion_factor(&to_unit)
        .ok_or_else(|| Error::IncompatibleUnits {
            from: from.into(),
            to: to.into(),
        })?;
    Ok(value * factor)
}

/// Returns `true` when a quantity in `from` can be expressed in `to`.
pub fn convertible(from: &str, to: &str) -> Result<bool> {
    Ok(Unit::parse(from)?.is_compatible(&Unit::parse(to)?))
}

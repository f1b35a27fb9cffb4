use crate::error::{Error, Result};
use crate::unit::Unit;
use std::fmt;

/// A magnitude with an optional unit.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    pub fn unitless(magnitude: f64) -> Self {
        Self::new(magnitude, Unit::None)
    }

    pub fn is_unitless(&self) -> bool {
        self.unit.is_none()
    }

    /// Re-expresses the quantity in `target`, which must be compatible.
    pub fn convert_to(&self, target: &Unit) -> Result<Quantity> {
        let factor = self
            .unit
            .conversion_factor(target)
            .ok_or_else(|| Error::IncompatibleUnits {
                from: self.unit.to_string(),
                to: target.to_string(),
            })?;
        Ok(Quantity::new(self.magnitude * factor, target.clone()))
    }
}

/// Quoted literal form: `'3.03716 m'`, or `'0.6'` without a unit.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}", format_magnitude(self.magnitude))?;
        if !self.unit.is_none() {
            write!(f, " {}", self.unit)?;
        }
        f.write_str("'")
    }
}

/// Shortest decimal text that reads back to the same `f64`.
///
/// Never uses exponent notation. Negative zero prints as `0`.
pub fn format_magnitude(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_without_trailing_zeros() {
        assert_eq!(format_magnitude(15.0), "15");
        assert_eq!(format_magnitude(3.048), "3.048");
        assert_eq!(format_magnitude(-0.5), "-0.5");
        assert_eq!(format_magnitude(-0.0), "0");
    }

    #[test]
    fn formats_small_and_large_values_in_plain_notation() {
        assert_eq!(format_magnitude(0.000001), "0.000001");
        assert_eq!(format_magnitude(1_000_000.0), "1000000");
    }

    #[test]
    fn display_omits_space_for_unitless() {
        assert_eq!(Quantity::unitless(0.6).to_string(), "'0.6'");
        assert_eq!(Quantity::new(2.3, Unit::atomic("m")).to_string(), "'2.3 m'");
    }
}

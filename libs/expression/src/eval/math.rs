//! power, sqrt

use crate::error::{Error, Result};
use semio_units::{Quantity, Unit};

/// `a ^ b` where `b` must be unitless. The unit exponent is `b` rounded.
pub fn power(a: &Quantity, b: &Quantity) -> Result<Quantity> {
    if !b.is_unitless() {
        return Err(Error::IncompatibleUnits {
            from: b.unit.to_string(),
            to: String::new(),
        });
    }

    let rounded = b.magnitude.round();
    if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&rounded) {
        return Err(Error::EvaluationError(format!(
            "exponent {} out of range",
            b.magnitude
        )));
    }
    let exponent = rounded as i32;

    let magnitude = if b.magnitude == rounded {
        a.magnitude.powi(exponent)
    } else {
        a.magnitude.powf(b.magnitude)
    };
    let unit = if a.is_unitless() {
        Unit::None
    } else {
        Unit::power(a.unit.clone(), exponent)
    };
    Ok(Quantity::new(magnitude, unit))
}

pub fn sqrt(a: &Quantity) -> Result<Quantity> {
    if a.magnitude < 0.0 {
        return Err(Error::EvaluationError(format!(
            "square root of negative value {}",
            a.magnitude
        )));
    }
    let unit = if a.is_unitless() {
        Unit::None
    } else {
        Unit::root(a.unit.clone())
    };
    Ok(Quantity::new(a.magnitude.sqrt(), unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_of_unitless_stays_unitless() {
        let result = power(&Quantity::unitless(2.0), &Quantity::unitless(10.0)).unwrap();
        assert_eq!(result, Quantity::unitless(1024.0));
    }

    #[test]
    fn test_fractional_exponent_rounds_unit_only() {
        let a = Quantity::new(4.0, Unit::atomic("m"));
        let result = power(&a, &Quantity::unitless(0.5)).unwrap();
        assert_eq!(result.magnitude, 2.0);
        // 0.5 rounds away from zero
        assert_eq!(result.unit.to_string(), "(m)^1");
    }

    #[test]
    fn test_dimensioned_exponent_is_rejected() {
        let a = Quantity::unitless(2.0);
        let b = Quantity::new(2.0, Unit::atomic("m"));
        assert!(matches!(power(&a, &b), Err(Error::IncompatibleUnits { .. })));
    }

    #[test]
    fn test_sqrt_of_negative() {
        assert!(sqrt(&Quantity::unitless(-4.0)).is_err());
    }
}

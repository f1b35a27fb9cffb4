//! sum, subtract, mod, multiply, divide, negate, abs

use super::{aligned, magnitude_in, natural_unit};
use crate::error::{Error, Result};
use semio_units::{Quantity, Unit};

pub fn sum(operands: &[Quantity]) -> Result<Quantity> {
    let (unit, magnitudes) = aligned(operands)?;
    Ok(Quantity::new(magnitudes.iter().sum(), unit))
}

pub fn subtract(a: &Quantity, b: &Quantity) -> Result<Quantity> {
    let (unit, lhs, rhs) = pair(a, b)?;
    Ok(Quantity::new(lhs - rhs, unit))
}

/// Remainder with the sign of the dividend, as `%` on floats.
pub fn modulo(a: &Quantity, b: &Quantity) -> Result<Quantity> {
    let (unit, lhs, rhs) = pair(a, b)?;
    if rhs == 0.0 {
        return Err(Error::EvaluationError("mod by zero".into()));
    }
    Ok(Quantity::new(lhs % rhs, unit))
}

fn pair(a: &Quantity, b: &Quantity) -> Result<(Unit, f64, f64)> {
    let operands = [a.clone(), b.clone()];
    let unit = natural_unit(&operands);
    Ok((unit.clone(), magnitude_in(a, &unit)?, magnitude_in(b, &unit)?))
}

/// Product of magnitudes. Units are never converted here: two dimensioned
/// operands always form a product unit, folded left to right.
pub fn multiply(operands: &[Quantity]) -> Result<Quantity> {
    let Some((first, rest)) = operands.split_first() else {
        return Err(Error::EvaluationError("multiply needs operands".into()));
    };
    let mut result = first.clone();
    for operand in rest {
        result.magnitude *= operand.magnitude;
        result.unit = match (result.unit, &operand.unit) {
            (left, Unit::None) => left,
            (Unit::None, right) => right.clone(),
            (left, right) => Unit::product(left, right.clone()),
        };
    }
    Ok(result)
}

pub fn divide(a: &Quantity, b: &Quantity) -> Result<Quantity> {
    if b.magnitude == 0.0 {
        return Err(Error::EvaluationError("division by zero".into()));
    }
    let unit = if b.is_unitless() {
        a.unit.clone()
    } else {
        Unit::quotient(a.unit.clone(), b.unit.clone())
    };
    Ok(Quantity::new(a.magnitude / b.magnitude, unit))
}

pub fn negate(a: &Quantity) -> Quantity {
    Quantity::new(-a.magnitude, a.unit.clone())
}

pub fn abs(a: &Quantity) -> Quantity {
    Quantity::new(a.magnitude.abs(), a.unit.clone())
}

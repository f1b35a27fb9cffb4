//! min, max, average

use super::aligned;
use crate::error::Result;
use semio_units::Quantity;

pub fn min(operands: &[Quantity]) -> Result<Quantity> {
    let (unit, magnitudes) = aligned(operands)?;
    let value = magnitudes.into_iter().fold(f64::INFINITY, f64::min);
    Ok(Quantity::new(value, unit))
}

pub fn max(operands: &[Quantity]) -> Result<Quantity> {
    let (unit, magnitudes) = aligned(operands)?;
    let value = magnitudes.into_iter().fold(f64::NEG_INFINITY, f64::max);
    Ok(Quantity::new(value, unit))
}

pub fn average(operands: &[Quantity]) -> Result<Quantity> {
    let (unit, magnitudes) = aligned(operands)?;
    let total: f64 = magnitudes.iter().sum();
    Ok(Quantity::new(total / magnitudes.len() as f64, unit))
}

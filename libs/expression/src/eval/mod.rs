//! Tree-walking evaluator
//!
//! Children are reduced first, then the operator combines the resulting
//! quantities. Operators that add or compare operands share one unit rule:
//! every operand is converted into the natural unit, which is the unit of
//! the first operand that has one. Unitless operands are taken as already
//! being in that unit.

mod aggregate;
mod arithmetic;
mod math;

use crate::ast::{Node, Operator};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::functions;
use crate::parser::DEFAULT_MAX_DEPTH;
use semio_units::{Quantity, Unit};
use tracing::trace;

/// Evaluates trees against a context
pub struct Evaluator<'a> {
    context: &'a dyn Context,
    max_depth: usize,
}

impl<'a> Evaluator<'a> {
    pub fn new(context: &'a dyn Context) -> Self {
        Self {
            context,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The context handed to this evaluator
    pub fn context(&self) -> &'a dyn Context {
        self.context
    }

    pub fn evaluate(&self, node: &Node) -> Result<Quantity> {
        self.evaluate_at(node, 0)
    }

    fn evaluate_at(&self, node: &Node, depth: usize) -> Result<Quantity> {
        match node {
            Node::Literal(quantity) => Ok(quantity.clone()),
            Node::Call {
                operator,
                arguments,
            } => {
                if depth >= self.max_depth {
                    return Err(Error::TooDeep(self.max_depth));
                }
                let operands = arguments
                    .iter()
                    .map(|argument| self.evaluate_at(argument, depth + 1))
                    .collect::<Result<Vec<_>>>()?;
                let result = apply(*operator, &operands)?;
                if !result.magnitude.is_finite() {
                    return Err(Error::EvaluationError(format!(
                        "{} produced a non-finite magnitude",
                        operator.name()
                    )));
                }
                trace!(operator = operator.name(), depth, result = %result, "evaluated call");
                Ok(result)
            }
        }
    }
}

/// Evaluate `node` with default limits
pub fn evaluate(node: &Node, context: &dyn Context) -> Result<Quantity> {
    Evaluator::new(context).evaluate(node)
}

/// Apply one operator to already evaluated operands
pub fn apply(operator: Operator, operands: &[Quantity]) -> Result<Quantity> {
    functions::check_arity(operator, operands.len())?;
    match operator {
        Operator::Sum => arithmetic::sum(operands),
        Operator::Subtract => arithmetic::subtract(&operands[0], &operands[1]),
        Operator::Multiply => arithmetic::multiply(operands),
        Operator::Divide => arithmetic::divide(&operands[0], &operands[1]),
        Operator::Mod => arithmetic::modulo(&operands[0], &operands[1]),
        Operator::Negate => Ok(arithmetic::negate(&operands[0])),
        Operator::Abs => Ok(arithmetic::abs(&operands[0])),
        Operator::Min => aggregate::min(operands),
        Operator::Max => aggregate::max(operands),
        Operator::Average => aggregate::average(operands),
        Operator::Power => math::power(&operands[0], &operands[1]),
        Operator::Sqrt => math::sqrt(&operands[0]),
    }
}

/// Unit of the first operand that has one
fn natural_unit(operands: &[Quantity]) -> Unit {
    operands
        .iter()
        .find(|q| !q.is_unitless())
        .map(|q| q.unit.clone())
        .unwrap_or_default()
}

/// Magnitude of `quantity` expressed in `unit`
fn magnitude_in(quantity: &Quantity, unit: &Unit) -> Result<f64> {
    if quantity.is_unitless() {
        return Ok(quantity.magnitude);
    }
    let factor = quantity
        .unit
        .conversion_factor(unit)
        .ok_or_else(|| Error::IncompatibleUnits {
            from: quantity.unit.to_string(),
            to: unit.to_string(),
        })?;
    Ok(quantity.magnitude * factor)
}

/// Natural unit plus every operand's magnitude converted into it
fn aligned(operands: &[Quantity]) -> Result<(Unit, Vec<f64>)> {
    let unit = natural_unit(operands);
    let magnitudes = operands
        .iter()
        .map(|q| magnitude_in(q, &unit))
        .collect::<Result<Vec<_>>>()?;
    Ok((unit, magnitudes))
}

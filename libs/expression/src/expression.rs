//! Parsed expression value

use crate::ast::Node;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::eval::Evaluator;
use crate::parser::{ParseOptions, Parser, DEFAULT_MAX_DEPTH};
use semio_units::{Quantity, Unit};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A parsed expression tree
///
/// Immutable once built: parsing new text yields a new `Expression`, so a
/// value can be shared between threads and evaluated concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    root: Node,
    max_depth: usize,
}

impl Expression {
    pub fn new(root: Node) -> Self {
        Self {
            root,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Parse expression text such as `sum ( '2.3 m' '0.45 ft' )`
    pub fn deserialize(text: &str) -> Result<Self> {
        Self::deserialize_with_options(text, &ParseOptions::default())
    }

    pub fn deserialize_with_options(text: &str, options: &ParseOptions) -> Result<Self> {
        let root = Parser::with_options(text.to_string(), options).parse()?;
        debug!(
            nodes = root.node_count(),
            depth = root.depth(),
            "parsed expression"
        );
        Ok(Self {
            root,
            max_depth: options.max_depth,
        })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Canonical text form; parses back to an equal expression
    pub fn serialize(&self) -> String {
        crate::format::serialize(&self.root)
    }

    /// Evaluate the tree and optionally express the result in `target_unit`.
    ///
    /// An empty target keeps the natural unit of the result. A target whose
    /// text equals the result unit is kept as is; anything else is parsed
    /// and must be compatible with the result unit.
    pub fn calculate(&self, context: &dyn Context, target_unit: &str) -> Result<Quantity> {
        let result = Evaluator::new(context)
            .with_max_depth(self.max_depth)
            .evaluate(&self.root)?;

        let target = target_unit.trim();
        if target.is_empty() || result.unit.to_string() == target {
            return Ok(result);
        }

        let unit = Unit::parse(target)?;
        let converted = result.convert_to(&unit)?;
        if !converted.magnitude.is_finite() {
            return Err(Error::EvaluationError(format!(
                "{} overflows when expressed in '{}'",
                result, unit
            )));
        }
        debug!(from = %result.unit, to = %unit, "converted result");
        Ok(converted)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

impl FromStr for Expression {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::deserialize(s)
    }
}

impl From<Node> for Expression {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

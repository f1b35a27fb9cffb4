//! Operator registry
//!
//! Maps operator names to [`Operator`] and records the argument counts each
//! one accepts. Name lookups go through a compile-time perfect hash map (phf).

use crate::ast::Operator;
use crate::error::{Error, Result};
use phf::phf_map;

/// Operator metadata
#[derive(Debug, Clone, Copy)]
pub struct OperatorMetadata {
    pub operator: Operator,
    pub name: &'static str,
    pub min_args: usize,
    pub max_args: Option<usize>, // None = unbounded
}

const fn meta(
    operator: Operator,
    name: &'static str,
    min_args: usize,
    max_args: Option<usize>,
) -> OperatorMetadata {
    OperatorMetadata {
        operator,
        name,
        min_args,
        max_args,
    }
}

/// Indexed by `Operator as usize`
static OPERATORS: [OperatorMetadata; 12] = [
    meta(Operator::Sum, "sum", 1, None),
    meta(Operator::Subtract, "subtract", 2, Some(2)),
    meta(Operator::Multiply, "multiply", 2, None),
    meta(Operator::Divide, "divide", 2, Some(2)),
    meta(Operator::Mod, "mod", 2, Some(2)),
    meta(Operator::Power, "power", 2, Some(2)),
    meta(Operator::Sqrt, "sqrt", 1, Some(1)),
    meta(Operator::Min, "min", 1, None),
    meta(Operator::Max, "max", 1, None),
    meta(Operator::Average, "average", 1, None),
    meta(Operator::Negate, "negate", 1, Some(1)),
    meta(Operator::Abs, "abs", 1, Some(1)),
];

static OPERATORS_BY_NAME: phf::Map<&'static str, Operator> = phf_map! {
    "sum" => Operator::Sum,
    "subtract" => Operator::Subtract,
    "multiply" => Operator::Multiply,
    "divide" => Operator::Divide,
    "mod" => Operator::Mod,
    "power" => Operator::Power,
    "sqrt" => Operator::Sqrt,
    "min" => Operator::Min,
    "max" => Operator::Max,
    "average" => Operator::Average,
    "negate" => Operator::Negate,
    "abs" => Operator::Abs,
};

/// Look up an operator by name. Names are case-sensitive.
pub fn lookup(name: &str) -> Option<&'static OperatorMetadata> {
    OPERATORS_BY_NAME.get(name).map(|op| metadata(*op))
}

pub fn metadata(operator: Operator) -> &'static OperatorMetadata {
    &OPERATORS[operator as usize]
}

/// All operators in declaration order
pub fn operators() -> impl Iterator<Item = &'static OperatorMetadata> {
    OPERATORS.iter()
}

/// Fails with [`Error::Arity`] if `found` arguments is not acceptable.
pub fn check_arity(operator: Operator, found: usize) -> Result<()> {
    let meta = metadata(operator);
    let too_many = meta.max_args.is_some_and(|max| found > max);
    if found < meta.min_args || too_many {
        let expected = match meta.max_args {
            Some(max) if max == meta.min_args => max.to_string(),
            Some(max) => format!("{}..={}", meta.min_args, max),
            None => format!("at least {}", meta.min_args),
        };
        return Err(Error::Arity {
            operator: meta.name,
            expected,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_enum_order() {
        for (index, meta) in operators().enumerate() {
            assert_eq!(meta.operator as usize, index, "{}", meta.name);
            assert_eq!(lookup(meta.name).unwrap().operator, meta.operator);
        }
        assert_eq!(operators().count(), OPERATORS_BY_NAME.len());
    }

    #[test]
    fn test_unknown_names() {
        assert!(lookup("Sum").is_none());
        assert!(lookup("pow").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_arity() {
        assert!(check_arity(Operator::Sum, 1).is_ok());
        assert!(check_arity(Operator::Sum, 40).is_ok());
        assert!(check_arity(Operator::Multiply, 1).is_err());
        assert!(check_arity(Operator::Sqrt, 2).is_err());

        let err = check_arity(Operator::Divide, 3).unwrap_err();
        assert_eq!(
            err,
            Error::Arity {
                operator: "divide",
                expected: "2".into(),
                found: 3
            }
        );
        assert_eq!(
            err.to_string(),
            "Operator 'divide' expects 2 argument(s), got 3"
        );
    }
}

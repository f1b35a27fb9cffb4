//! Dimensioned quantity expressions
//!
//! Parses function-call expressions over quantity literals, evaluates them
//! with unit-aware arithmetic and renders them back to canonical text.
//!
//! ```text
//! Expression String
//!      |
//!   Lexer -> Tokens
//!      |
//!   Parser -> Node tree (operators resolved, arity checked)
//!      |
//!   Evaluator -> Quantity (natural unit)
//!      |
//!   Optional conversion to a target unit
//! ```
//!
//! ```rust
//! use semio_expression::{EmptyContext, Expression};
//!
//! let expr = Expression::deserialize("sum ( '2.3 m' '0.45 ft' '0.6' )").unwrap();
//! let result = expr.calculate(&EmptyContext, "m").unwrap();
//! assert_eq!(result.to_string(), "'3.03716 m'");
//! assert_eq!(expr.serialize(), "sum ( '2.3 m' '0.45 ft' '0.6' )");
//! ```

pub mod ast;
pub mod context;
pub mod engine;
pub mod error;
pub mod eval;
pub mod expression;
pub mod format;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod token;

// Re-export main types
pub use ast::{Node, Operator};
pub use context::{Context, EmptyContext};
pub use engine::{Engine, EngineOptions};
pub use error::{Error, Result};
pub use eval::{evaluate, Evaluator};
pub use expression::Expression;
pub use parser::{parse, ParseOptions, Parser};
pub use semio_units::{Quantity, Unit};

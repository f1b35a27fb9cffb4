//! Evaluation context
//!
//! Callers hand a context to evaluation so that expressions can later refer
//! to externally named values. The language has no syntax for such references
//! yet: the evaluator carries the context through without consulting it.

use semio_units::Quantity;

/// Capability for resolving externally named values
///
/// # Example
///
/// ```rust
/// use semio_expression::{Context, Expression};
/// use semio_units::{Quantity, Unit};
///
/// struct Dimensions;
///
/// impl Context for Dimensions {
///     fn resolve(&self, name: &str) -> Option<Quantity> {
///         (name == "width").then(|| Quantity::new(1.2, Unit::atomic("m")))
///     }
/// }
///
/// let expr = Expression::deserialize("negate ( '2 m' )").unwrap();
/// assert_eq!(expr.calculate(&Dimensions, "").unwrap().to_string(), "'-2 m'");
/// ```
pub trait Context: Send + Sync {
    /// Resolve a named value, if the context knows it
    fn resolve(&self, _name: &str) -> Option<Quantity> {
        None
    }
}

/// Context that knows no names
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyContext;

impl Context for EmptyContext {}

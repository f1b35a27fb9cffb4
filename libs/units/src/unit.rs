use crate::error::Result;
use crate::registry::lookup;
use std::fmt;

/// Structural unit of a quantity.
///
/// Atomic symbols are kept verbatim. A symbol the registry does not know
/// (for instance `m²` typed into a literal) is opaque and is never split.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    #[default]
    None,
    Atomic(String),
    Product(Box<Unit>, Box<Unit>),
    Quotient(Box<Unit>, Box<Unit>),
    Power(Box<Unit>, i32),
    Root(Box<Unit>),
}

impl Unit {
    /// Builds an atomic unit; empty text yields [`Unit::None`].
    pub fn atomic(symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        if symbol.is_empty() {
            Unit::None
        } else {
            Unit::Atomic(symbol)
        }
    }

    pub fn product(left: Unit, right: Unit) -> Self {
        Unit::Product(Box::new(left), Box::new(right))
    }

    pub fn quotient(numerator: Unit, denominator: Unit) -> Self {
        Unit::Quotient(Box::new(numerator), Box::new(denominator))
    }

    pub fn power(base: Unit, exponent: i32) -> Self {
        Unit::Power(Box::new(base), exponent)
    }

    pub fn root(inner: Unit) -> Self {
        Unit::Root(Box::new(inner))
    }

    /// Parses rendered unit text such as `km/h` or `(m)^2`.
    ///
    /// Blank text is [`Unit::None`]. Quantity literals never go through this:
    /// their unit text is always taken as a single opaque atom.
    pub fn parse(text: &str) -> Result<Self> {
        crate::parser::parse(text)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Unit::None)
    }

    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.conversion_factor(other).is_some()
    }

    /// Factor that turns a magnitude in `self` into a magnitude in `to`.
    ///
    /// `None` means the two units cannot be combined.
    pub fn conversion_factor(&self, to: &Unit) -> Option<f64> {
        match (self, to) {
            (Unit::None, Unit::None) => Some(1.0),
            (Unit::Atomic(a), Unit::Atomic(b)) => match (lookup(a), lookup(b)) {
                (Some(from), Some(into)) if from.category == into.category => {
                    Some(from.factor / into.factor)
                }
                _ if a == b => Some(1.0),
                _ => None,
            },
            (Unit::Quotient(n1, d1), Unit::Quotient(n2, d2)) => {
                Some(n1.conversion_factor(n2)? / d1.conversion_factor(d2)?)
            }
            (Unit::Product(a1, b1), Unit::Product(a2, b2)) => {
                Some(a1.conversion_factor(a2)? * b1.conversion_factor(b2)?)
            }
            // Powers and roots only match their exact rendering.
            (Unit::Power(..) | Unit::Root(..), _) | (_, Unit::Power(..) | Unit::Root(..)) => {
                (self.to_string() == to.to_string()).then_some(1.0)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::None => Ok(()),
            Unit::Atomic(symbol) => f.write_str(symbol),
            Unit::Product(left, right) => write!(f, "{left}·{right}"),
            Unit::Quotient(numerator, denominator) => write!(f, "{numerator}/{denominator}"),
            Unit::Power(base, exponent) => write!(f, "({base})^{exponent}"),
            Unit::Root(inner) => write!(f, "√({inner})"),
        }
    }
}

impl From<&str> for Unit {
    fn from(symbol: &str) -> Self {
        Unit::atomic(symbol)
    }
}

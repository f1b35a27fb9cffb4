//! Canonical text form of expression trees
//!
//! Literals render through [`semio_units::Quantity`]'s `Display`; calls as
//! `name ( child child … )` with single spaces.

use crate::ast::Node;
use std::fmt;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(quantity) => write!(f, "{quantity}"),
            Node::Call {
                operator,
                arguments,
            } => {
                write!(f, "{} (", operator.name())?;
                for argument in arguments {
                    write!(f, " {argument}")?;
                }
                f.write_str(" )")
            }
        }
    }
}

/// Canonical text for a tree. Re-parsing the text of a parsed tree yields an
/// equal tree.
pub fn serialize(node: &Node) -> String {
    node.to_string()
}

//! Expression tree
//!
//! ```text
//! expr     := literal | call
//! call     := identifier "(" expr (whitespace expr)* ")"
//! literal  := "'" ["-"] digits ["." digits] [" " unit_text] "'"
//! ```

use semio_units::Quantity;

/// The closed set of functions the language knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Sum,
    Subtract,
    Multiply,
    Divide,
    Mod,
    Power,
    Sqrt,
    Min,
    Max,
    Average,
    Negate,
    Abs,
}

impl Operator {
    /// Name as written in expression text
    pub fn name(self) -> &'static str {
        crate::functions::metadata(self).name
    }
}

/// Node of a parsed expression. Children are owned by their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Quantity),
    Call {
        operator: Operator,
        arguments: Vec<Node>,
    },
}

impl Node {
    pub fn literal(quantity: Quantity) -> Self {
        Node::Literal(quantity)
    }

    pub fn call(operator: Operator, arguments: Vec<Node>) -> Self {
        Node::Call {
            operator,
            arguments,
        }
    }

    /// Number of nodes in the tree, this one included
    pub fn node_count(&self) -> usize {
        match self {
            Node::Literal(_) => 1,
            Node::Call { arguments, .. } => {
                1 + arguments.iter().map(Node::node_count).sum::<usize>()
            }
        }
    }

    /// Nesting depth of calls; a bare literal has depth 0
    pub fn depth(&self) -> usize {
        match self {
            Node::Literal(_) => 0,
            Node::Call { arguments, .. } => {
                1 + arguments.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }
}

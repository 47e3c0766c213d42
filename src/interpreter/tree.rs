use crate::{
    error::LineError,
    interpreter::{
        postfix::Postfix,
        registry::{Operation, OperatorDescriptor, Registry},
        stack::Stack,
    },
};

/// An expression tree rebuilt from a postfix stream.
///
/// Built with the same stack discipline as the evaluator: for a binary
/// operator the first popped subtree is the right child. It displays as
/// fully parenthesised infix, which makes the grouping chosen by the
/// converter visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprTree {
    /// A literal or a variable name.
    Operand(String),
    /// A unary operator applied to one subtree.
    Unary {
        op:      &'static OperatorDescriptor,
        operand: Box<ExprTree>,
    },
    /// A binary operator with its two subtrees.
    Binary {
        op:    &'static OperatorDescriptor,
        left:  Box<ExprTree>,
        right: Box<ExprTree>,
    },
}

impl ExprTree {
    /// Builds the tree of `postfix`, or `None` for an empty stream.
    ///
    /// # Errors
    /// Returns the same [`LineError`]s the evaluator would report for the
    /// stream's structure: invalid operands and operand/operator mismatches.
    ///
    /// # Example
    /// ```
    /// use infixer::{
    ///     grammar::Grammar,
    ///     interpreter::{postfix::Postfix, registry::Registry, tree::ExprTree},
    /// };
    ///
    /// let registry = Registry::build(Grammar::Arithmetic);
    /// let tree = ExprTree::from_postfix(&Postfix::from("3 4 2 * + ~"), &registry).unwrap();
    /// assert_eq!(tree.unwrap().to_string(), "~(3 + (4 * 2))");
    /// ```
    pub fn from_postfix(postfix: &Postfix, registry: &Registry) -> Result<Option<Self>, LineError> {
        let mut nodes: Stack<Self> = Stack::new();

        for token in postfix.tokens() {
            let Some(op) = registry.get(token) else {
                registry.grammar().classify_operand(token)?;
                nodes.push(Self::Operand(token.to_string()));
                continue;
            };

            let mut pop = || {
                nodes.pop().map(Box::new).map_err(|_| {
                                              LineError::operations(format!("not enough operands for '{}'",
                                                                            op.symbol))
                                          })
            };
            let node = match op.operation {
                Operation::Unary(_) => Self::Unary { op,
                                                     operand: pop()? },
                Operation::Binary(_) => {
                    let right = pop()?;
                    let left = pop()?;
                    Self::Binary { op, left, right }
                },
            };
            nodes.push(node);
        }

        let root = nodes.pop().ok();
        if nodes.is_empty() {
            Ok(root)
        } else {
            Err(LineError::operations(format!("{} values left without an operator", nodes.len() + 1)))
        }
    }

    /// Number of nodes on the longest path from the root to a leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Operand(_) => 1,
            Self::Unary { operand, .. } => 1 + operand.depth(),
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl std::fmt::Display for ExprTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operand(token) => f.write_str(token),
            Self::Unary { op, operand } => write!(f, "{}{operand}", op.symbol),
            Self::Binary { op, left, right } => write!(f, "({left} {} {right})", op.symbol),
        }
    }
}

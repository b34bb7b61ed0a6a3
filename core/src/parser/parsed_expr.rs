use crate::parser::{Operator, Span};

/// A parsed expression: the frozen tree plus the source it was built from.
#[derive(Debug)]
pub struct ParsedExpr<'a> {
    pub source: &'a str,
    pub expr: &'a Expr<'a>,
    /// Number of operand and operator tokens consumed from the source.
    pub token_count: usize,
}

/// Frozen expression tree node.
///
/// Children stay optional so that the evaluator, not the type system, decides
/// what a malformed tree means.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Operand(Literal<'a>),
    Operator {
        op: Option<Operator>,
        span: Span,
        left: Option<&'a Expr<'a>>,
        right: Option<&'a Expr<'a>>,
    },
}

impl<'a> Expr<'a> {
    /// True for operands and for operator nodes that never received a child.
    pub fn is_leaf(&self) -> bool {
        match self {
            Expr::Operand(_) => true,
            Expr::Operator { left, right, .. } => left.is_none() && right.is_none(),
        }
    }

    /// Number of operator nodes in this subtree.
    pub fn operator_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            if let Expr::Operator { left, right, .. } = expr {
                count += 1;
                pending.extend(*left);
                pending.extend(*right);
            }
        }
        count
    }

    /// Token text of this node: the literal text, or the operator symbol
    /// (`?` when none was assigned).
    pub fn symbol(&self) -> &'a str {
        match self {
            Expr::Operand(literal) => literal.text,
            Expr::Operator { op: Some(op), .. } => op.symbol(),
            Expr::Operator { op: None, .. } => "?",
        }
    }
}

/// Integer literal. The text is kept verbatim so `007` renders as `007`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
    pub text: &'a str,
    pub value: i32,
}

impl<'a> Literal<'a> {
    /// The operand synthesized by unary-minus normalization.
    pub const MINUS_ONE: Literal<'static> = Literal {
        text: "-1",
        value: -1,
    };
}

//! Infix and postfix renderings of an expression tree.
//!
//! Both traversals are lazy iterators over token strings and never touch an
//! evaluation stack, so they can be used to check the shape of a tree
//! independently of arithmetic.

use crate::parser::Expr;

fn children<'a>(expr: &'a Expr<'a>) -> (Option<&'a Expr<'a>>, Option<&'a Expr<'a>>) {
    match expr {
        Expr::Operand(_) => (None, None),
        Expr::Operator { left, right, .. } => (*left, *right),
    }
}

/// Left, self, right.
pub fn infix<'a>(expr: &'a Expr<'a>) -> Infix<'a> {
    Infix {
        pending: Vec::new(),
        next: Some(expr),
    }
}

/// Left, right, self. This is the order in which the evaluator resolves nodes.
pub fn postfix<'a>(expr: &'a Expr<'a>) -> Postfix<'a> {
    Postfix {
        stack: vec![(expr, false)],
    }
}

/// Space-separated infix form, e.g. `2 + 3 * 4`.
pub fn render_infix(expr: &Expr<'_>) -> String {
    infix(expr).collect::<Vec<_>>().join(" ")
}

/// Space-separated postfix form, e.g. `2 3 4 * +`.
pub fn render_postfix(expr: &Expr<'_>) -> String {
    postfix(expr).collect::<Vec<_>>().join(" ")
}

/// One node per line, children indented under their parent, left first.
///
/// ```text
/// +
///   2
///   *
///     3
///     4
/// ```
pub fn render_outline(expr: &Expr<'_>) -> String {
    let mut out = String::new();
    let mut pending = vec![(expr, 0)];
    while let Some((node, depth)) = pending.pop() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&"  ".repeat(depth));
        out.push_str(node.symbol());
        let (left, right) = children(node);
        pending.extend(right.map(|child| (child, depth + 1)));
        pending.extend(left.map(|child| (child, depth + 1)));
    }
    out
}

pub struct Infix<'a> {
    pending: Vec<&'a Expr<'a>>,
    next: Option<&'a Expr<'a>>,
}

impl<'a> Iterator for Infix<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.next.take() {
            self.pending.push(node);
            self.next = children(node).0;
        }
        let node = self.pending.pop()?;
        self.next = children(node).1;
        Some(node.symbol())
    }
}

pub struct Postfix<'a> {
    // (node, children already scheduled)
    stack: Vec<(&'a Expr<'a>, bool)>,
}

impl<'a> Iterator for Postfix<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded || node.is_leaf() {
                return Some(node.symbol());
            }
            self.stack.push((node, true));
            let (left, right) = children(node);
            if let Some(right) = right {
                self.stack.push((right, false));
            }
            if let Some(left) = left {
                self.stack.push((left, false));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Literal, Operator, ParserOptions, Span, parse, parse_with_options};
    use bumpalo::Bump;
    use pretty_assertions::assert_eq;

    fn forms(source: &str) -> (String, String) {
        let arena = Bump::new();
        let source: &str = arena.alloc_str(source);
        let parsed = parse(&arena, source).unwrap_or_else(|e| panic!("{}: {}", source, e));
        (render_infix(parsed.expr), render_postfix(parsed.expr))
    }

    #[test]
    fn test_precedence_shape() {
        assert_eq!(
            forms("2+3*4"),
            ("2 + 3 * 4".to_string(), "2 3 4 * +".to_string())
        );
        assert_eq!(
            forms("2*3+4"),
            ("2 * 3 + 4".to_string(), "2 3 * 4 +".to_string())
        );
    }

    #[test]
    fn test_left_associative_chain() {
        assert_eq!(forms("10-2-3").1, "10 2 - 3 -");
        assert_eq!(forms("8/4/2").1, "8 4 / 2 /");
    }

    #[test]
    fn test_unary_minus_rendering() {
        assert_eq!(
            forms("-5+3"),
            ("-1 * 5 + 3".to_string(), "-1 5 * 3 +".to_string())
        );
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(forms("007"), ("007".to_string(), "007".to_string()));
    }

    #[test]
    fn test_mixed_chain() {
        assert_eq!(forms("2-3*4/5+1").1, "2 3 4 * 5 / - 1 +");
        assert_eq!(forms("1*2+3*4").1, "1 2 * 3 4 * +");
    }

    #[test]
    fn test_outline() {
        let arena = Bump::new();
        let parsed = parse(&arena, "2+3*4").unwrap();
        assert_eq!(render_outline(parsed.expr), "+\n  2\n  *\n    3\n    4");
    }

    #[test]
    fn test_deep_chain_renders() {
        let source = format!("{}1", "1+".repeat(5000));
        let arena = Bump::new();
        let options = ParserOptions {
            max_tokens: usize::MAX,
            ..ParserOptions::default()
        };
        let parsed = parse_with_options(&arena, &source, &options).unwrap();
        assert_eq!(render_postfix(parsed.expr).len(), 4 * 5000 + 1);
        assert_eq!(render_outline(parsed.expr).lines().count(), 10001);
    }

    #[test]
    fn test_iterators_are_lazy() {
        let arena = Bump::new();
        let parsed = parse(&arena, "1+2+3+4").unwrap();
        let first: Vec<_> = postfix(parsed.expr).take(2).collect();
        assert_eq!(first, vec!["1", "2"]);
        let first: Vec<_> = infix(parsed.expr).take(3).collect();
        assert_eq!(first, vec!["1", "+", "2"]);
    }

    #[test]
    fn test_incomplete_nodes() {
        let two = Expr::Operand(Literal {
            text: "2",
            value: 2,
        });
        let half = Expr::Operator {
            op: Some(Operator::Add),
            span: Span::new(1, 2),
            left: Some(&two),
            right: None,
        };
        assert_eq!(render_infix(&half), "2 +");
        assert_eq!(render_postfix(&half), "2 +");

        let unassigned = Expr::Operator {
            op: None,
            span: Span::new(0, 0),
            left: Some(&two),
            right: Some(&two),
        };
        assert_eq!(render_postfix(&unassigned), "2 2 ?");
    }
}

//! Incremental expression tree construction.
//!
//! Tokens are inserted one at a time, in source order, and precedence is
//! resolved at insertion time by rotating the tree around the insertion
//! cursor. There is no separate precedence-climbing pass.
//!
//! While the tree is being built its nodes live in an index arena so that
//! rotations are plain moves of child handles. Once the input is exhausted
//! the draft is frozen into immutable [`Expr`] nodes allocated in a
//! [`Bump`] arena.
//!
//! ## Insertion rules
//!
//! - An operand fills the first open slot found by walking down the right
//!   spine from the cursor (left slot first, then right).
//! - A `-` at an empty node is unary minus and becomes `-1 * _`.
//! - An operator at a node holding only a left operand becomes that node's
//!   operator.
//! - An operator arriving when the tree is complete rotates it:
//!   - if it binds tighter than the cursor's operator it takes over the
//!     cursor's right operand (`a + b` then `*` gives `a + (b * _)`);
//!   - otherwise the whole cursor subtree becomes its left operand
//!     (`a + b` then `-` gives `(a + b) - _`).

use bumpalo::Bump;
use tracing::debug;

use crate::parser::{Expr, Literal, Operator, ParseError, ParseErrorKind, Span};

/// Handle of a node in the builder's draft arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A scanned token ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion<'a> {
    Operand { literal: Literal<'a>, span: Span },
    Operator { op: Operator, span: Span },
}

#[derive(Debug, Clone)]
enum DraftNode<'a> {
    Operand(Literal<'a>),
    Operator {
        op: Option<Operator>,
        span: Span,
        left: Option<NodeId>,
        right: Option<NodeId>,
    },
}

impl<'a> DraftNode<'a> {
    fn empty() -> Self {
        DraftNode::Operator {
            op: None,
            span: Span::new(0, 0),
            left: None,
            right: None,
        }
    }
}

/// Where the next operand would go.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Slot {
    Left(NodeId),
    Right(NodeId),
    /// Node holds a left operand but no operator yet.
    NeedsOperator(NodeId),
    /// Every operator along the right spine has both operands.
    Complete,
}

/// Builds an expression tree one token at a time.
pub struct TreeBuilder<'a> {
    source: &'a str,
    nodes: Vec<DraftNode<'a>>,
    root: NodeId,
}

impl<'a> TreeBuilder<'a> {
    /// Create a builder holding a single empty root node.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            nodes: vec![DraftNode::empty()],
            root: NodeId(0),
        }
    }

    /// The node the first token should be inserted at.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Insert a token at `cursor` and return the cursor for the next token.
    pub fn insert(&mut self, cursor: NodeId, token: Insertion<'a>) -> Result<NodeId, ParseError> {
        match token {
            Insertion::Operand { literal, span } => self.insert_operand(cursor, literal, span),
            Insertion::Operator { op, span } => self.insert_operator(cursor, op, span),
        }
    }

    fn insert_operand(
        &mut self,
        cursor: NodeId,
        literal: Literal<'a>,
        span: Span,
    ) -> Result<NodeId, ParseError> {
        let slot = self.open_slot(cursor);
        let leaf = match slot {
            Slot::Left(_) | Slot::Right(_) => self.alloc(DraftNode::Operand(literal)),
            Slot::NeedsOperator(_) | Slot::Complete => {
                return Err(self.error(
                    ParseErrorKind::MissingOperator {
                        text: literal.text.to_string(),
                    },
                    span,
                ));
            }
        };

        match slot {
            Slot::Left(node) => *self.left_mut(node) = Some(leaf),
            Slot::Right(node) => *self.right_mut(node) = Some(leaf),
            Slot::NeedsOperator(_) | Slot::Complete => unreachable!("rejected above"),
        }
        debug!(operand = literal.text, "inserted operand");
        Ok(cursor)
    }

    fn insert_operator(
        &mut self,
        cursor: NodeId,
        incoming: Operator,
        span: Span,
    ) -> Result<NodeId, ParseError> {
        match self.open_slot(cursor) {
            Slot::Left(node) if self.is_empty(node) && incoming == Operator::Sub => {
                // Unary minus: `-x` is rewritten as `-1 * x`.
                let minus_one = self.alloc(DraftNode::Operand(Literal::MINUS_ONE));
                self.nodes[node.0] = DraftNode::Operator {
                    op: Some(Operator::Mul),
                    span,
                    left: Some(minus_one),
                    right: None,
                };
                debug!("normalized unary minus to multiplication by -1");
                Ok(cursor)
            }
            Slot::Left(_) | Slot::Right(_) => Err(self.error(
                ParseErrorKind::MissingOperand {
                    op: incoming.symbol().to_string(),
                },
                span,
            )),
            Slot::NeedsOperator(node) => {
                if let DraftNode::Operator {
                    op, span: op_span, ..
                } = &mut self.nodes[node.0]
                {
                    *op = Some(incoming);
                    *op_span = span;
                }
                debug!(op = incoming.symbol(), "assigned operator");
                Ok(cursor)
            }
            Slot::Complete => self.rotate(cursor, incoming, span),
        }
    }

    /// Restructure a complete tree around `cursor` for an incoming operator.
    fn rotate(&mut self, cursor: NodeId, incoming: Operator, span: Span) -> Result<NodeId, ParseError> {
        let (current, right) = match &self.nodes[cursor.0] {
            DraftNode::Operator {
                op: Some(current),
                right: Some(right),
                ..
            } => (*current, *right),
            _ => {
                return Err(self.error(
                    ParseErrorKind::MissingOperand {
                        op: incoming.symbol().to_string(),
                    },
                    span,
                ));
            }
        };

        if incoming.binds_tighter_than(current) {
            // a + b, *  =>  a + (b * _)
            let adopted = self.alloc(DraftNode::Operator {
                op: Some(incoming),
                span,
                left: Some(right),
                right: None,
            });
            *self.right_mut(cursor) = Some(adopted);
            debug!(
                op = incoming.symbol(),
                under = current.symbol(),
                "right-rotation insert"
            );
        } else {
            // a + b, -  =>  (a + b) - _
            let displaced = core::mem::replace(
                &mut self.nodes[cursor.0],
                DraftNode::Operator {
                    op: Some(incoming),
                    span,
                    left: None,
                    right: None,
                },
            );
            let moved = self.alloc(displaced);
            *self.left_mut(cursor) = Some(moved);
            debug!(
                op = incoming.symbol(),
                over = current.symbol(),
                "left-rotation insert"
            );
        }
        Ok(cursor)
    }

    /// Freeze the draft into arena-allocated nodes.
    pub fn finish(self, arena: &'a Bump) -> Result<&'a Expr<'a>, ParseError> {
        match self.open_slot(self.root) {
            Slot::Complete => self.freeze(arena, self.root),
            Slot::NeedsOperator(node) => {
                // A lone operand is the whole expression.
                let operand = match &self.nodes[node.0] {
                    DraftNode::Operator { left: Some(operand), .. } => *operand,
                    _ => node,
                };
                self.freeze(arena, operand)
            }
            Slot::Left(node) if self.is_empty(node) => Err(self.error(
                ParseErrorKind::EmptyExpression,
                Span::new(self.source.len(), self.source.len()),
            )),
            Slot::Left(node) | Slot::Right(node) => {
                // Report the operator as written: a dangling unary minus is
                // stored as '*' but reads as '-'.
                let (op, span) = match &self.nodes[node.0] {
                    DraftNode::Operator { span, .. } => {
                        (span.str_of(self.source).to_string(), span.clone())
                    }
                    DraftNode::Operand(_) => ("?".to_string(), Span::new(0, 0)),
                };
                Err(self.error(ParseErrorKind::TrailingOperator { op }, span))
            }
        }
    }

    /// Children are frozen before their parent, in post-order, using an
    /// explicit work stack so tree depth never touches the native stack.
    fn freeze(&self, arena: &'a Bump, root: NodeId) -> Result<&'a Expr<'a>, ParseError> {
        let mut frozen: Vec<Option<&'a Expr<'a>>> = vec![None; self.nodes.len()];
        // (node, children already scheduled)
        let mut work = vec![(root, false)];

        while let Some((id, expanded)) = work.pop() {
            let expr = match &self.nodes[id.0] {
                DraftNode::Operand(literal) => Expr::Operand(*literal),
                DraftNode::Operator { left, right, .. } if !expanded => {
                    work.push((id, true));
                    work.extend(right.map(|child| (child, false)));
                    work.extend(left.map(|child| (child, false)));
                    continue;
                }
                DraftNode::Operator {
                    op,
                    span,
                    left,
                    right,
                } => Expr::Operator {
                    op: *op,
                    span: span.clone(),
                    left: left.and_then(|child| frozen[child.0]),
                    right: right.and_then(|child| frozen[child.0]),
                },
            };
            match arena.try_alloc(expr) {
                Ok(expr) => frozen[id.0] = Some(expr),
                Err(_) => {
                    return Err(self.error(ParseErrorKind::AllocationFailed, Span::new(0, 0)));
                }
            }
        }

        match frozen[root.0] {
            Some(expr) => Ok(expr),
            None => unreachable!("the root is frozen last"),
        }
    }

    /// Walk the right spine from `from` to the first place an operand fits.
    fn open_slot(&self, from: NodeId) -> Slot {
        let mut node = from;
        loop {
            match &self.nodes[node.0] {
                DraftNode::Operand(_) => return Slot::Complete,
                DraftNode::Operator { left: None, .. } => return Slot::Left(node),
                DraftNode::Operator { op: None, .. } => return Slot::NeedsOperator(node),
                DraftNode::Operator { right: None, .. } => return Slot::Right(node),
                DraftNode::Operator {
                    right: Some(next), ..
                } => node = *next,
            }
        }
    }

    fn is_empty(&self, node: NodeId) -> bool {
        matches!(
            self.nodes[node.0],
            DraftNode::Operator {
                op: None,
                left: None,
                right: None,
                ..
            }
        )
    }

    fn alloc(&mut self, node: DraftNode<'a>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn left_mut(&mut self, node: NodeId) -> &mut Option<NodeId> {
        match &mut self.nodes[node.0] {
            DraftNode::Operator { left, .. } => left,
            DraftNode::Operand(_) => unreachable!("operands have no children"),
        }
    }

    fn right_mut(&mut self, node: NodeId) -> &mut Option<NodeId> {
        match &mut self.nodes[node.0] {
            DraftNode::Operator { right, .. } => right,
            DraftNode::Operand(_) => unreachable!("operands have no children"),
        }
    }

    fn error(&self, kind: ParseErrorKind, span: Span) -> ParseError {
        ParseError::new(kind, self.source, span)
    }
}

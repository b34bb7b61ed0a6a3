//! Binary operator implementations.

use crate::evaluator::RuntimeError;
use crate::parser::{Operator, Span};

/// One resolved operation: both operand values and the operator to apply.
///
/// Built right before the operation is carried out and dropped right after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statement {
    pub lhs: i32,
    pub rhs: i32,
    pub op: Operator,
}

impl Statement {
    /// Apply the operator.
    ///
    /// Uses wrapping arithmetic to prevent panics on overflow.
    /// Division truncates toward zero; division by zero returns an error
    /// pointing at `span`.
    pub fn calc(&self, span: &Span) -> Result<i32, RuntimeError> {
        match self.op {
            Operator::Add => Ok(self.lhs.wrapping_add(self.rhs)),
            Operator::Sub => Ok(self.lhs.wrapping_sub(self.rhs)),
            Operator::Mul => Ok(self.lhs.wrapping_mul(self.rhs)),
            Operator::Div => {
                if self.rhs == 0 {
                    Err(RuntimeError::DivisionByZero { span: span.clone() })
                } else {
                    // Use wrapping_div to handle i32::MIN / -1 case
                    Ok(self.lhs.wrapping_div(self.rhs))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(lhs: i32, op: Operator, rhs: i32) -> Result<i32, RuntimeError> {
        Statement { lhs, rhs, op }.calc(&Span::new(0, 1))
    }

    #[test]
    fn test_add() {
        assert_eq!(calc(2, Operator::Add, 3).unwrap(), 5);
        assert_eq!(calc(-5, Operator::Add, 3).unwrap(), -2);
    }

    #[test]
    fn test_sub() {
        assert_eq!(calc(10, Operator::Sub, 4).unwrap(), 6);
        assert_eq!(calc(3, Operator::Sub, 10).unwrap(), -7);
    }

    #[test]
    fn test_mul() {
        assert_eq!(calc(3, Operator::Mul, 4).unwrap(), 12);
        assert_eq!(calc(-1, Operator::Mul, 5).unwrap(), -5);
    }

    #[test]
    fn test_div_truncates_toward_zero() {
        assert_eq!(calc(7, Operator::Div, 2).unwrap(), 3);
        assert_eq!(calc(-7, Operator::Div, 2).unwrap(), -3);
        assert_eq!(calc(7, Operator::Div, -2).unwrap(), -3);
    }

    #[test]
    fn test_div_by_zero() {
        let result = Statement {
            lhs: 5,
            rhs: 0,
            op: Operator::Div,
        }
        .calc(&Span::new(1, 2));
        assert_eq!(
            result,
            Err(RuntimeError::DivisionByZero {
                span: Span::new(1, 2)
            })
        );
    }

    #[test]
    fn test_wrapping_overflow() {
        // Test that we wrap on overflow rather than panic
        assert_eq!(calc(i32::MAX, Operator::Add, 1).unwrap(), i32::MIN);
        assert_eq!(calc(i32::MIN, Operator::Sub, 1).unwrap(), i32::MAX);
        assert_eq!(calc(i32::MAX, Operator::Mul, 2).unwrap(), -2);
        assert_eq!(calc(i32::MIN, Operator::Div, -1).unwrap(), i32::MIN);
    }
}

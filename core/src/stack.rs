use core::fmt;

use thiserror::Error;

/// Why a stack operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack overflow: capacity of {capacity} values exceeded")]
    Overflow { capacity: usize },

    #[error("stack underflow: pop on an empty stack")]
    Underflow,
}

/// Push/pop counters collected over the lifetime of a [`Stack`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackStats {
    pub pushes: usize,
    pub pops: usize,
    /// Largest number of values held at once.
    pub peak: usize,
}

/// A bounded LIFO stack.
///
/// Both overflow and underflow are reported as errors; neither ever panics or
/// hands back a stale value.
///
/// # Examples
///
/// ```
/// use shisoku_core::stack::{Stack, StackError};
///
/// let mut stack = Stack::new(2);
/// stack.push(42).unwrap();
/// stack.push(17).unwrap();
/// assert_eq!(stack.push(1), Err(StackError::Overflow { capacity: 2 }));
/// assert_eq!(stack.pop(), Ok(17));
/// assert_eq!(stack.len(), 1);
/// assert_eq!(stack.pop(), Ok(42));
/// ```
pub struct Stack<T> {
    items: Vec<T>,
    max_size: usize,
    stats: StackStats,
}

impl<T> Stack<T> {
    /// Creates an empty stack holding at most `max_size` values.
    pub fn new(max_size: usize) -> Self {
        // Pre-allocate a reasonable amount (min of max_size or 256)
        let initial_capacity = max_size.min(256);

        Self {
            items: Vec::with_capacity(initial_capacity),
            max_size,
            stats: StackStats::default(),
        }
    }

    /// Pushes a value onto the stack.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.items.len() >= self.max_size {
            return Err(StackError::Overflow {
                capacity: self.max_size,
            });
        }
        self.items.push(value);
        self.stats.pushes += 1;
        self.stats.peak = self.stats.peak.max(self.items.len());
        Ok(())
    }

    /// Removes and returns the top value from the stack.
    #[inline]
    pub fn pop(&mut self) -> Result<T, StackError> {
        let value = self.items.pop().ok_or(StackError::Underflow)?;
        self.stats.pops += 1;
        Ok(value)
    }

    /// Returns the current number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counters for every successful push and pop so far.
    #[inline]
    pub fn stats(&self) -> StackStats {
        self.stats
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("items", &self.items)
            .field("len", &self.items.len())
            .field("capacity", &self.max_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack() {
        let stack: Stack<i32> = Stack::new(100);
        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
        assert_eq!(stack.stats(), StackStats::default());
    }

    #[test]
    fn test_push_pop() {
        let mut stack = Stack::new(100);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(StackError::Underflow));
    }

    #[test]
    fn test_underflow_does_not_reuse_old_values() {
        let mut stack = Stack::new(4);
        stack.push(7).unwrap();
        assert_eq!(stack.pop(), Ok(7));
        // A clamped stack pointer would hand 7 back again here.
        assert_eq!(stack.pop(), Err(StackError::Underflow));
        assert_eq!(stack.pop(), Err(StackError::Underflow));
    }

    #[test]
    fn test_overflow() {
        let mut stack = Stack::new(2);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(stack.push(3), Err(StackError::Overflow { capacity: 2 }));
        // The refused value is not stored.
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Ok(2));
    }

    #[test]
    fn test_zero_capacity() {
        let mut stack = Stack::new(0);
        assert_eq!(stack.push(1), Err(StackError::Overflow { capacity: 0 }));
    }

    #[test]
    fn test_stats() {
        let mut stack = Stack::new(10);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.pop().unwrap();
        stack.push(3).unwrap();
        stack.push(4).unwrap();
        stack.pop().unwrap();
        let _ = stack.pop();
        let _ = stack.pop();
        let _ = stack.pop(); // underflow, not counted

        assert_eq!(
            stack.stats(),
            StackStats {
                pushes: 4,
                pops: 4,
                peak: 3,
            }
        );
    }
}

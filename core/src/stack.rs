use crate::Vec;

/// Error returned when popping from an empty [`Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Stack is empty")]
pub struct StackUnderflow;

/// A LIFO stack of operands.
///
/// The stack does no validation of the values pushed onto it; range checks
/// belong to [`crate::arithmetic::BoundedArithmetic`]. Depth is unbounded.
///
/// # Examples
///
/// ```
/// use bitcalc_core::stack::{Stack, StackUnderflow};
///
/// let mut stack = Stack::new();
/// stack.push(42);
/// stack.push(17);
/// assert_eq!(stack.pop(), Ok(17));
/// assert_eq!(stack.peek(), Some(&42));
/// assert_eq!(stack.len(), 1);
/// stack.pop().unwrap();
/// assert_eq!(stack.pop(), Err(StackUnderflow));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    /// The underlying storage for stack elements, bottom first.
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` values before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes a value onto the top of the stack. Always succeeds.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top value from the stack.
    ///
    /// # Errors
    ///
    /// Returns [`StackUnderflow`] if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, StackUnderflow> {
        self.items.pop().ok_or(StackUnderflow)
    }

    /// Returns a reference to the top value without removing it.
    ///
    /// Returns `None` if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears the stack, removing all values.
    ///
    /// This does not deallocate the underlying storage.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of values the stack can hold before it reallocates.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Releases storage above `min_capacity`. Never drops values.
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.items.shrink_to(min_capacity);
    }

    /// Returns an iterator over references to the stack elements.
    ///
    /// The iterator yields elements from bottom to top.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitcalc_core::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// stack.push(3);
    ///
    /// let items: Vec<_> = stack.iter().copied().collect();
    /// assert_eq!(items, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

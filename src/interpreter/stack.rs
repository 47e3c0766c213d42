/// Returned when popping or peeking an empty [`Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStack;

impl std::fmt::Display for EmptyStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("stack is empty")
    }
}

impl std::error::Error for EmptyStack {}

/// A LIFO sequence with an explicit empty state.
///
/// Used for the operator stack of the converter and the operand stack of
/// the evaluator. Each stack is owned by the single operation that created
/// it and dropped when that operation returns.
///
/// # Example
/// ```
/// use infixer::interpreter::stack::{EmptyStack, Stack};
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// assert_eq!(stack.pop(), Err(EmptyStack));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Result<T, EmptyStack> {
        self.items.pop().ok_or(EmptyStack)
    }

    pub fn peek(&self) -> Result<&T, EmptyStack> {
        self.items.last().ok_or(EmptyStack)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

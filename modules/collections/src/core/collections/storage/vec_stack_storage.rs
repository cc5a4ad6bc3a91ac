use alloc::vec::Vec;

use super::StackStorage;


/// Contiguous stack storage backed by `alloc::vec::Vec`.
///
/// The top of the stack is the last element of the vector, so push and pop are O(1).
pub struct VecStackStorage<T> {
  data: Vec<T>,
}

impl<T> VecStackStorage<T> {
  /// Creates an empty storage.
  #[must_use]
  pub const fn new() -> Self {
    Self { data: Vec::new() }
  }

  /// Creates an empty storage with room for `capacity` elements before reallocating.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { data: Vec::with_capacity(capacity) }
  }

  /// Returns the number of elements the storage holds without reallocating.
  #[must_use]
  pub fn allocated(&self) -> usize {
    self.data.capacity()
  }
}

impl<T> Default for VecStackStorage<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> StackStorage<T> for VecStackStorage<T> {
  const NAME: &'static str = "ArrayStack";

  fn push(&mut self, value: T) {
    self.data.push(value);
  }

  fn pop(&mut self) -> Option<T> {
    self.data.pop()
  }

  fn peek(&self) -> Option<&T> {
    self.data.last()
  }

  fn len(&self) -> usize {
    self.data.len()
  }

  fn clear(&mut self) {
    self.data = Vec::new();
  }

  fn snapshot(&self) -> Vec<T>
  where
    T: Clone, {
    self.data.iter().rev().cloned().collect()
  }
}

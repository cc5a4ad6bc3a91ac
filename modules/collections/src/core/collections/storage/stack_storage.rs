use alloc::vec::Vec;

/// Single-threaded storage engine with last-in, first-out access.
pub trait StackStorage<T>: Default {
  /// Name used when rendering a stack over this storage.
  const NAME: &'static str;

  /// Places an element on top.
  fn push(&mut self, value: T);

  /// Removes the top element.
  fn pop(&mut self) -> Option<T>;

  /// Returns a reference to the top element.
  fn peek(&self) -> Option<&T>;

  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Indicates whether the storage holds no elements.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Drops every element, leaving the storage reusable.
  fn clear(&mut self);

  /// Copies the elements, top first.
  fn snapshot(&self) -> Vec<T>
  where
    T: Clone;
}

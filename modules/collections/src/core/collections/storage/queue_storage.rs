use alloc::vec::Vec;

/// Single-threaded storage engine with first-in, first-out access.
pub trait QueueStorage<T>: Default {
  /// Name used when rendering a queue over this storage.
  const NAME: &'static str;

  /// Appends an element at the back.
  fn enqueue(&mut self, value: T);

  /// Removes the front element.
  fn dequeue(&mut self) -> Option<T>;

  /// Returns a reference to the front element.
  fn front(&self) -> Option<&T>;

  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Indicates whether the storage holds no elements.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Drops every element, leaving the storage reusable.
  fn clear(&mut self);

  /// Copies the elements, front first.
  fn snapshot(&self) -> Vec<T>
  where
    T: Clone;
}

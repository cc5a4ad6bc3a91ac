use alloc::{collections::VecDeque, vec::Vec};

use super::QueueStorage;

#[cfg(test)]
mod tests;

/// Contiguous queue storage backed by a [`VecDeque`] ring buffer.
///
/// Both ends are O(1) amortized: dequeue advances the ring head instead of shifting the
/// remaining elements, so sustained enqueue/dequeue traffic never degrades to O(n) per call.
pub struct VecQueueStorage<T> {
  buffer: VecDeque<T>,
}

impl<T> VecQueueStorage<T> {
  /// Creates an empty storage.
  #[must_use]
  pub const fn new() -> Self {
    Self { buffer: VecDeque::new() }
  }

  /// Creates an empty storage with room for `capacity` elements before reallocating.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { buffer: VecDeque::with_capacity(capacity) }
  }
}

impl<T> Default for VecQueueStorage<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> QueueStorage<T> for VecQueueStorage<T> {
  const NAME: &'static str = "ArrayQueue";

  fn enqueue(&mut self, value: T) {
    self.buffer.push_back(value);
  }

  fn dequeue(&mut self) -> Option<T> {
    self.buffer.pop_front()
  }

  fn front(&self) -> Option<&T> {
    self.buffer.front()
  }

  fn len(&self) -> usize {
    self.buffer.len()
  }

  fn clear(&mut self) {
    self.buffer = VecDeque::new();
  }

  fn snapshot(&self) -> Vec<T>
  where
    T: Clone, {
    self.buffer.iter().cloned().collect()
  }
}

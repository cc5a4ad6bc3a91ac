/// Element count and fixed capacity tracked by [`Bounded`](super::Bounded).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityCounter {
  count:    usize,
  capacity: usize,
}

impl CapacityCounter {
  /// Creates a counter holding `count` elements out of `capacity`.
  #[must_use]
  pub const fn new(count: usize, capacity: usize) -> Self {
    Self { count, capacity }
  }

  /// Returns the tracked element count.
  #[must_use]
  pub const fn count(&self) -> usize {
    self.count
  }

  /// Returns the fixed capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns how many more elements fit.
  #[must_use]
  pub const fn remaining(&self) -> usize {
    self.capacity.saturating_sub(self.count)
  }

  /// Indicates whether the count reached the capacity.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    self.count >= self.capacity
  }

  /// Indicates whether the count is zero.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.count == 0
  }

  pub(crate) fn increment(&mut self) {
    debug_assert!(self.count < self.capacity);
    self.count += 1;
  }

  pub(crate) fn advance(&mut self, by: usize) {
    debug_assert!(by <= self.remaining());
    self.count += by;
  }

  pub(crate) fn decrement(&mut self) {
    debug_assert!(self.count > 0);
    self.count -= 1;
  }

  pub(crate) fn clear(&mut self) {
    self.count = 0;
  }
}

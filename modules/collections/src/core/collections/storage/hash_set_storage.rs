use alloc::vec::Vec;
use core::hash::Hash;

use ahash::RandomState;
use hashbrown::HashSet;

#[cfg(test)]
mod tests;

/// Set storage backed by [`hashbrown::HashSet`] with the `ahash` hasher.
pub struct HashSetStorage<T> {
  items: HashSet<T, RandomState>,
}

impl<T> HashSetStorage<T> {
  /// Creates an empty storage.
  #[must_use]
  pub fn new() -> Self {
    Self { items: HashSet::with_hasher(RandomState::new()) }
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Indicates whether the storage holds no elements.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Drops every element, keeping the allocated table for reuse.
  pub fn clear(&mut self) {
    self.items.clear();
  }

  /// Copies the elements in iteration order.
  #[must_use]
  pub fn snapshot(&self) -> Vec<T>
  where
    T: Clone, {
    self.items.iter().cloned().collect()
  }
}

impl<T: Eq + Hash> HashSetStorage<T> {
  /// Inserts `value`, returning `true` when it was not present before.
  pub fn insert(&mut self, value: T) -> bool {
    self.items.insert(value)
  }

  /// Indicates whether `value` is stored.
  #[must_use]
  pub fn contains(&self, value: &T) -> bool {
    self.items.contains(value)
  }
}

impl<T> Default for HashSetStorage<T> {
  fn default() -> Self {
    Self::new()
  }
}

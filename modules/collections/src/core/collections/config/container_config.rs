use alloc::boxed::Box;

use super::{SharedQueue, SharedStack, StorageKind};
use crate::core::collections::{ArrayQueue, ArrayStack, Bounded, LinkedQueue, LinkedStack, RefusableStack};

/// Container configuration selecting the storage strategy and an optional capacity bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContainerConfig {
  storage:  StorageKind,
  capacity: Option<usize>,
}

impl ContainerConfig {
  /// Creates an unbounded configuration over the given storage.
  #[must_use]
  pub const fn new(storage: StorageKind) -> Self {
    Self { storage, capacity: None }
  }

  /// Returns the storage strategy.
  #[must_use]
  pub const fn storage(&self) -> StorageKind {
    self.storage
  }

  /// Returns the capacity bound, if any.
  #[must_use]
  pub const fn capacity(&self) -> Option<usize> {
    self.capacity
  }

  /// Updates the storage strategy.
  #[must_use]
  pub const fn with_storage(mut self, storage: StorageKind) -> Self {
    self.storage = storage;
    self
  }

  /// Updates the capacity bound. `None` removes it.
  #[must_use]
  pub const fn with_capacity(mut self, capacity: Option<usize>) -> Self {
    self.capacity = capacity;
    self
  }

  /// Builds an empty stack matching the configuration.
  #[must_use]
  pub fn build_stack<T>(&self) -> SharedStack<T>
  where
    T: Send + Sync + 'static, {
    match (self.storage, self.capacity) {
      | (StorageKind::Array, None) => Box::new(ArrayStack::<T>::new()),
      | (StorageKind::Linked, None) => Box::new(LinkedStack::<T>::new()),
      | (StorageKind::Array, Some(capacity)) => Box::new(Bounded::<ArrayStack<T>>::with_capacity(capacity)),
      | (StorageKind::Linked, Some(capacity)) => Box::new(Bounded::<LinkedStack<T>>::with_capacity(capacity)),
    }
  }

  /// Builds an empty queue matching the configuration.
  #[must_use]
  pub fn build_queue<T>(&self) -> SharedQueue<T>
  where
    T: Send + Sync + 'static, {
    match (self.storage, self.capacity) {
      | (StorageKind::Array, None) => Box::new(ArrayQueue::<T>::new()),
      | (StorageKind::Linked, None) => Box::new(LinkedQueue::<T>::new()),
      | (StorageKind::Array, Some(capacity)) => Box::new(Bounded::<ArrayQueue<T>>::with_capacity(capacity)),
      | (StorageKind::Linked, Some(capacity)) => Box::new(Bounded::<LinkedQueue<T>>::with_capacity(capacity)),
    }
  }

  /// Builds a refusable stack over a stack matching the configuration.
  ///
  /// The capacity bound, when present, sits under the transaction so that a refuse which
  /// would overflow it stops with [`CollectionError::Full`](crate::core::collections::CollectionError::Full).
  #[must_use]
  pub fn build_refusable_stack<T>(&self) -> RefusableStack<T, SharedStack<T>>
  where
    T: Clone + Send + Sync + 'static, {
    RefusableStack::new(self.build_stack())
  }
}

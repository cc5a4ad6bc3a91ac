use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use crate::core::{
  collections::{
    Collection, CollectionError, Resettable, Stack, render::write_sequence, storage::StackStorage,
  },
  sync::{SpinSyncRwLock, SyncRwLockLike},
};

/// Stack API parameterised by element type, storage engine, and read-write lock.
///
/// Reads (`is_empty`, `len`, `peek`, `to_vec`) take the shared lock; `push`, `pop`, `add` and
/// `reset` take the exclusive lock. The lock guards the storage and nothing else.
pub struct SyncStack<T, S, L = SpinSyncRwLock<S>>
where
  S: StackStorage<T>,
  L: SyncRwLockLike<S>, {
  storage: L,
  _pd:     PhantomData<(T, S)>,
}

impl<T, S, L> SyncStack<T, S, L>
where
  S: StackStorage<T>,
  L: SyncRwLockLike<S>,
{
  /// Creates an empty stack.
  #[must_use]
  pub fn new() -> Self {
    Self::from_storage(S::default())
  }

  /// Creates a stack over an existing storage engine.
  #[must_use]
  pub fn from_storage(storage: S) -> Self {
    Self { storage: L::new(storage), _pd: PhantomData }
  }

  /// Consumes the stack and returns its storage engine.
  pub fn into_storage(self) -> S {
    self.storage.into_inner()
  }
}

impl<T, S, L> Default for SyncStack<T, S, L>
where
  S: StackStorage<T>,
  L: SyncRwLockLike<S>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, S, L> FromIterator<T> for SyncStack<T, S, L>
where
  S: StackStorage<T>,
  L: SyncRwLockLike<S>,
{
  /// Pushes the items in iteration order, so the last item ends on top.
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut storage = S::default();
    for item in iter {
      storage.push(item);
    }
    Self::from_storage(storage)
  }
}

impl<T, S, L> Resettable for SyncStack<T, S, L>
where
  S: StackStorage<T>,
  L: SyncRwLockLike<S>,
{
  fn reset(&self) -> Result<(), CollectionError> {
    let mut storage = self.storage.write();
    if !storage.is_empty() {
      storage.clear();
    }
    Ok(())
  }
}

impl<T, S, L> Collection<T> for SyncStack<T, S, L>
where
  S: StackStorage<T>,
  L: SyncRwLockLike<S>,
{
  fn is_empty(&self) -> bool {
    self.storage.read().is_empty()
  }

  fn len(&self) -> usize {
    self.storage.read().len()
  }

  fn to_vec(&self) -> Vec<T>
  where
    T: Clone, {
    self.storage.read().snapshot()
  }

  fn add(&self, elem: T) -> Result<(), CollectionError> {
    self.push(elem)
  }
}

impl<T, S, L> Stack<T> for SyncStack<T, S, L>
where
  S: StackStorage<T>,
  L: SyncRwLockLike<S>,
{
  fn push(&self, elem: T) -> Result<(), CollectionError> {
    self.storage.write().push(elem);
    Ok(())
  }

  fn pop(&self) -> Result<T, CollectionError> {
    self.storage.write().pop().ok_or(CollectionError::Empty)
  }

  fn peek(&self) -> Result<T, CollectionError>
  where
    T: Clone, {
    self.storage.read().peek().cloned().ok_or(CollectionError::Empty)
  }
}

impl<T, S, L> fmt::Display for SyncStack<T, S, L>
where
  T: fmt::Display + Clone,
  S: StackStorage<T>,
  L: SyncRwLockLike<S>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_sequence(f, S::NAME, &self.to_vec())
  }
}

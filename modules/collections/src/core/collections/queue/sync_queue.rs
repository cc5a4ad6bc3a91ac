use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use crate::core::{
  collections::{
    Collection, CollectionError, Queue, Resettable, render::write_sequence, storage::QueueStorage,
  },
  sync::{SpinSyncRwLock, SyncRwLockLike},
};

/// Queue API parameterised by element type, storage engine, and read-write lock.
pub struct SyncQueue<T, S, L = SpinSyncRwLock<S>>
where
  S: QueueStorage<T>,
  L: SyncRwLockLike<S>, {
  storage: L,
  _pd:     PhantomData<(T, S)>,
}

impl<T, S, L> SyncQueue<T, S, L>
where
  S: QueueStorage<T>,
  L: SyncRwLockLike<S>,
{
  /// Creates an empty queue.
  #[must_use]
  pub fn new() -> Self {
    Self::from_storage(S::default())
  }

  /// Creates a queue over an existing storage engine.
  #[must_use]
  pub fn from_storage(storage: S) -> Self {
    Self { storage: L::new(storage), _pd: PhantomData }
  }

  /// Consumes the queue and returns its storage engine.
  pub fn into_storage(self) -> S {
    self.storage.into_inner()
  }
}

impl<T, S, L> Default for SyncQueue<T, S, L>
where
  S: QueueStorage<T>,
  L: SyncRwLockLike<S>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, S, L> FromIterator<T> for SyncQueue<T, S, L>
where
  S: QueueStorage<T>,
  L: SyncRwLockLike<S>,
{
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut storage = S::default();
    for item in iter {
      storage.enqueue(item);
    }
    Self::from_storage(storage)
  }
}

impl<T, S, L> Resettable for SyncQueue<T, S, L>
where
  S: QueueStorage<T>,
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

impl<T, S, L> Collection<T> for SyncQueue<T, S, L>
where
  S: QueueStorage<T>,
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
    self.enqueue(elem)
  }
}

impl<T, S, L> Queue<T> for SyncQueue<T, S, L>
where
  S: QueueStorage<T>,
  L: SyncRwLockLike<S>,
{
  fn enqueue(&self, elem: T) -> Result<(), CollectionError> {
    self.storage.write().enqueue(elem);
    Ok(())
  }

  fn dequeue(&self) -> Result<T, CollectionError> {
    self.storage.write().dequeue().ok_or(CollectionError::Empty)
  }

  fn front(&self) -> Result<T, CollectionError>
  where
    T: Clone, {
    self.storage.read().front().cloned().ok_or(CollectionError::Empty)
  }
}

impl<T, S, L> fmt::Display for SyncQueue<T, S, L>
where
  T: fmt::Display + Clone,
  S: QueueStorage<T>,
  L: SyncRwLockLike<S>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_sequence(f, S::NAME, &self.to_vec())
  }
}

use alloc::vec::Vec;
use core::{fmt, hash::Hash, marker::PhantomData};

use crate::core::{
  collections::{
    Collection, CollectionError, Resettable, Set, render::write_sequence, storage::HashSetStorage,
  },
  sync::{SpinSyncRwLock, SyncRwLockLike},
};

/// Hash set guarded by a read-write lock.
///
/// `add` and [`Set::insert`] share one code path; inserting an element the set already holds
/// succeeds without growing it.
pub struct SyncSet<T, L = SpinSyncRwLock<HashSetStorage<T>>>
where
  L: SyncRwLockLike<HashSetStorage<T>>, {
  storage: L,
  _pd:     PhantomData<T>,
}

impl<T, L> SyncSet<T, L>
where
  L: SyncRwLockLike<HashSetStorage<T>>,
{
  /// Creates an empty set.
  #[must_use]
  pub fn new() -> Self {
    Self { storage: L::new(HashSetStorage::new()), _pd: PhantomData }
  }

  /// Consumes the set and returns its storage.
  pub fn into_storage(self) -> HashSetStorage<T> {
    self.storage.into_inner()
  }
}

impl<T, L> Default for SyncSet<T, L>
where
  L: SyncRwLockLike<HashSetStorage<T>>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, L> FromIterator<T> for SyncSet<T, L>
where
  T: Eq + Hash,
  L: SyncRwLockLike<HashSetStorage<T>>,
{
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut storage = HashSetStorage::new();
    for item in iter {
      storage.insert(item);
    }
    Self { storage: L::new(storage), _pd: PhantomData }
  }
}

impl<T, L> Resettable for SyncSet<T, L>
where
  L: SyncRwLockLike<HashSetStorage<T>>,
{
  fn reset(&self) -> Result<(), CollectionError> {
    self.storage.write().clear();
    Ok(())
  }
}

impl<T, L> Collection<T> for SyncSet<T, L>
where
  T: Eq + Hash,
  L: SyncRwLockLike<HashSetStorage<T>>,
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
    self.add_tracked(elem).map(|_| ())
  }

  fn add_tracked(&self, elem: T) -> Result<bool, CollectionError> {
    Ok(self.storage.write().insert(elem))
  }
}

impl<T, L> Set<T> for SyncSet<T, L>
where
  T: Eq + Hash,
  L: SyncRwLockLike<HashSetStorage<T>>,
{
  fn contains(&self, elem: &T) -> bool {
    self.storage.read().contains(elem)
  }

  fn insert(&self, elem: T) -> Result<bool, CollectionError> {
    self.add_tracked(elem)
  }
}

impl<T, L> fmt::Display for SyncSet<T, L>
where
  T: fmt::Display + Clone + Eq + Hash,
  L: SyncRwLockLike<HashSetStorage<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_sequence(f, "HashSet", &self.to_vec())
  }
}

use spin::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::sync::sync_rwlock_like::SyncRwLockLike;


/// Busy-waiting lock used by every container unless another backend is named.
///
/// Works without `std`; contention spins rather than parks, which suits the short critical
/// sections of storage calls.
pub struct SpinSyncRwLock<T>(RwLock<T>);

impl<T> SpinSyncRwLock<T> {
  /// Wraps `value`.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(RwLock::new(value))
  }

  /// Unwraps the protected value.
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }

  /// Takes shared access if no writer holds the lock.
  #[must_use]
  pub fn try_read(&self) -> Option<RwLockReadGuard<'_, T>> {
    self.0.try_read()
  }

  /// Takes exclusive access if nobody holds the lock.
  #[must_use]
  pub fn try_write(&self) -> Option<RwLockWriteGuard<'_, T>> {
    self.0.try_write()
  }

  /// Returns how many readers currently share the lock.
  #[must_use]
  pub fn reader_count(&self) -> usize {
    self.0.reader_count()
  }
}

impl<T: Default> Default for SpinSyncRwLock<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T> SyncRwLockLike<T> for SpinSyncRwLock<T> {
  type ReadGuard<'a>
    = RwLockReadGuard<'a, T>
  where
    Self: 'a,
    T: 'a;
  type WriteGuard<'a>
    = RwLockWriteGuard<'a, T>
  where
    Self: 'a,
    T: 'a;

  fn new(value: T) -> Self {
    Self::new(value)
  }

  fn into_inner(self) -> T {
    self.0.into_inner()
  }

  fn read(&self) -> Self::ReadGuard<'_> {
    self.0.read()
  }

  fn write(&self) -> Self::WriteGuard<'_> {
    self.0.write()
  }
}

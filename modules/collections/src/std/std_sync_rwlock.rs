extern crate std;

use std::sync::{PoisonError, RwLock, TryLockError};

use tracing::warn;

use super::{StdSyncRwLockReadGuard, StdSyncRwLockWriteGuard};
use crate::core::sync::SyncRwLockLike;


/// Parking lock for containers shared between OS threads.
///
/// A writer that panics poisons the lock. Containers keep their invariants across each
/// individual storage call, so the next access takes the value back, clears the poison flag
/// and logs a warning instead of failing.
pub struct StdSyncRwLock<T>(RwLock<T>);

impl<T> StdSyncRwLock<T> {
  /// Wraps `value`.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(RwLock::new(value))
  }

  /// Unwraps the protected value, poisoned or not.
  pub fn into_inner(self) -> T {
    self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
  }

  /// Indicates whether a panicking writer left the lock poisoned and no access has recovered
  /// it since.
  #[must_use]
  pub fn is_poisoned(&self) -> bool {
    self.0.is_poisoned()
  }

  /// Takes shared access if no writer holds the lock.
  #[must_use]
  pub fn try_read(&self) -> Option<StdSyncRwLockReadGuard<'_, T>> {
    match self.0.try_read() {
      | Ok(guard) => Some(StdSyncRwLockReadGuard::new(guard)),
      | Err(TryLockError::Poisoned(poisoned)) => Some(StdSyncRwLockReadGuard::new(self.recover(poisoned))),
      | Err(TryLockError::WouldBlock) => None,
    }
  }

  /// Takes exclusive access if nobody holds the lock.
  #[must_use]
  pub fn try_write(&self) -> Option<StdSyncRwLockWriteGuard<'_, T>> {
    match self.0.try_write() {
      | Ok(guard) => Some(StdSyncRwLockWriteGuard::new(guard)),
      | Err(TryLockError::Poisoned(poisoned)) => Some(StdSyncRwLockWriteGuard::new(self.recover(poisoned))),
      | Err(TryLockError::WouldBlock) => None,
    }
  }

  fn recover<G>(&self, poisoned: PoisonError<G>) -> G {
    warn!("recovering a lock poisoned by a panicking writer");
    self.0.clear_poison();
    poisoned.into_inner()
  }
}

impl<T: Default> Default for StdSyncRwLock<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T> SyncRwLockLike<T> for StdSyncRwLock<T> {
  type ReadGuard<'a>
    = StdSyncRwLockReadGuard<'a, T>
  where
    Self: 'a,
    T: 'a;
  type WriteGuard<'a>
    = StdSyncRwLockWriteGuard<'a, T>
  where
    Self: 'a,
    T: 'a;

  fn new(value: T) -> Self {
    Self::new(value)
  }

  fn into_inner(self) -> T {
    self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
  }

  fn read(&self) -> Self::ReadGuard<'_> {
    let guard = self.0.read().unwrap_or_else(|poisoned| self.recover(poisoned));
    StdSyncRwLockReadGuard::new(guard)
  }

  fn write(&self) -> Self::WriteGuard<'_> {
    let guard = self.0.write().unwrap_or_else(|poisoned| self.recover(poisoned));
    StdSyncRwLockWriteGuard::new(guard)
  }
}

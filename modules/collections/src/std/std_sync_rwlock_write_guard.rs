extern crate std;

use core::{
  fmt,
  ops::{Deref, DerefMut},
};
use std::sync::RwLockWriteGuard;

/// Exclusive view of a value behind a [`StdSyncRwLock`](super::StdSyncRwLock).
///
/// Releases the lock when dropped; panicking while it is alive poisons the lock.
pub struct StdSyncRwLockWriteGuard<'a, T>(RwLockWriteGuard<'a, T>);

impl<'a, T> StdSyncRwLockWriteGuard<'a, T> {
  pub(super) const fn new(guard: RwLockWriteGuard<'a, T>) -> Self {
    Self(guard)
  }
}

impl<T> Deref for StdSyncRwLockWriteGuard<'_, T> {
  type Target = T;

  fn deref(&self) -> &T {
    &self.0
  }
}

impl<T> DerefMut for StdSyncRwLockWriteGuard<'_, T> {
  fn deref_mut(&mut self) -> &mut T {
    &mut self.0
  }
}

impl<T: fmt::Debug> fmt::Debug for StdSyncRwLockWriteGuard<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("StdSyncRwLockWriteGuard").field(&**self).finish()
  }
}

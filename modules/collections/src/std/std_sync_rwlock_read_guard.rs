extern crate std;

use core::{fmt, ops::Deref};
use std::sync::RwLockReadGuard;

/// Shared view of a value behind a [`StdSyncRwLock`](super::StdSyncRwLock).
///
/// Releases the lock when dropped.
pub struct StdSyncRwLockReadGuard<'a, T>(RwLockReadGuard<'a, T>);

impl<'a, T> StdSyncRwLockReadGuard<'a, T> {
  pub(super) const fn new(guard: RwLockReadGuard<'a, T>) -> Self {
    Self(guard)
  }
}

impl<T> Deref for StdSyncRwLockReadGuard<'_, T> {
  type Target = T;

  fn deref(&self) -> &T {
    &self.0
  }
}

impl<T: fmt::Debug> fmt::Debug for StdSyncRwLockReadGuard<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("StdSyncRwLockReadGuard").field(&**self).finish()
  }
}

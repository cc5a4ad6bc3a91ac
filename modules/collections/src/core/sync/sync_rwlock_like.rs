//! Read-write lock abstraction shared by storage engines and decorators.

use core::ops::{Deref, DerefMut};

mod spin_sync_rwlock;

pub use spin_sync_rwlock::SpinSyncRwLock;

/// Generic read-write lock abstraction for runtime-agnostic code.
///
/// Every container layer owns exactly one value implementing this trait. Read-only operations
/// go through [`SyncRwLockLike::read`], mutations through [`SyncRwLockLike::write`].
pub trait SyncRwLockLike<T> {
  /// Guard type returned by [`SyncRwLockLike::read`].
  type ReadGuard<'a>: Deref<Target = T>
  where
    Self: 'a,
    T: 'a;

  /// Guard type returned by [`SyncRwLockLike::write`].
  type WriteGuard<'a>: Deref<Target = T> + DerefMut
  where
    Self: 'a,
    T: 'a;

  /// Creates a new lock instance wrapping the provided value.
  fn new(value: T) -> Self;

  /// Consumes the lock and returns the inner value.
  fn into_inner(self) -> T;

  /// Acquires shared access to the protected value.
  fn read(&self) -> Self::ReadGuard<'_>;

  /// Acquires exclusive access to the protected value.
  fn write(&self) -> Self::WriteGuard<'_>;
}

//! Standard-library lock backend and the containers built on it.

extern crate std;

mod aliases;
mod std_sync_rwlock;
mod std_sync_rwlock_read_guard;
mod std_sync_rwlock_write_guard;

pub use aliases::{StdArrayQueue, StdArrayStack, StdBounded, StdLinkedQueue, StdLinkedStack, StdRefusableStack, StdSyncSet};
pub use std_sync_rwlock::StdSyncRwLock;
pub use std_sync_rwlock_read_guard::StdSyncRwLockReadGuard;
pub use std_sync_rwlock_write_guard::StdSyncRwLockWriteGuard;

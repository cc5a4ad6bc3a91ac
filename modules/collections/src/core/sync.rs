pub mod sync_rwlock_like;

pub use sync_rwlock_like::{SpinSyncRwLock, SyncRwLockLike};

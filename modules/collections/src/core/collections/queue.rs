//! Lock-guarded queues over array and linked storage.

mod sync_queue;

pub use sync_queue::SyncQueue;

use crate::core::collections::storage::{LinkedQueueStorage, VecQueueStorage};

/// Queue over a ring buffer, guarded by a spin read-write lock.
pub type ArrayQueue<T> = SyncQueue<T, VecQueueStorage<T>>;

/// Queue over a linked node chain, guarded by a spin read-write lock.
///
/// Head and tail of the chain sit under the same lock, so `len`, `is_empty` and `to_vec`
/// never observe a half-applied enqueue or dequeue.
pub type LinkedQueue<T> = SyncQueue<T, LinkedQueueStorage<T>>;

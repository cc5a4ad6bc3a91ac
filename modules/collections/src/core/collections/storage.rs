//! Storage engines behind the lock-guarded containers.
//!
//! Storages are plain single-threaded data structures; [`SyncStack`](super::SyncStack),
//! [`SyncQueue`](super::SyncQueue) and [`SyncSet`](super::SyncSet) add the locking.

mod hash_set_storage;
mod linked_queue_storage;
mod linked_stack_storage;
mod node;
mod queue_storage;
mod stack_storage;
mod vec_queue_storage;
mod vec_stack_storage;

pub use hash_set_storage::HashSetStorage;
pub use linked_queue_storage::LinkedQueueStorage;
pub use linked_stack_storage::LinkedStackStorage;
pub use node::Node;
pub use queue_storage::QueueStorage;
pub use stack_storage::StackStorage;
pub use vec_queue_storage::VecQueueStorage;
pub use vec_stack_storage::VecStackStorage;

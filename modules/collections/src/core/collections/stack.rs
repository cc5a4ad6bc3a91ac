//! Lock-guarded stacks over array and linked storage.

mod sync_stack;

pub use sync_stack::SyncStack;

use crate::core::collections::storage::{LinkedStackStorage, VecStackStorage};

/// Stack over contiguous storage, guarded by a spin read-write lock.
pub type ArrayStack<T> = SyncStack<T, VecStackStorage<T>>;

/// Stack over a linked node chain, guarded by a spin read-write lock.
pub type LinkedStack<T> = SyncStack<T, LinkedStackStorage<T>>;

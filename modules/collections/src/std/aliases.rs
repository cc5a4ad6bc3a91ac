use alloc::vec::Vec;

use super::StdSyncRwLock;
use crate::core::collections::{
  Bounded, CapacityCounter, RefusableStack, SyncQueue, SyncSet, SyncStack,
  storage::{HashSetStorage, LinkedQueueStorage, LinkedStackStorage, VecQueueStorage, VecStackStorage},
};

#[cfg(test)]
mod tests;

/// Array stack guarded by [`StdSyncRwLock`].
pub type StdArrayStack<T> = SyncStack<T, VecStackStorage<T>, StdSyncRwLock<VecStackStorage<T>>>;

/// Linked stack guarded by [`StdSyncRwLock`].
pub type StdLinkedStack<T> = SyncStack<T, LinkedStackStorage<T>, StdSyncRwLock<LinkedStackStorage<T>>>;

/// Array queue guarded by [`StdSyncRwLock`].
pub type StdArrayQueue<T> = SyncQueue<T, VecQueueStorage<T>, StdSyncRwLock<VecQueueStorage<T>>>;

/// Linked queue guarded by [`StdSyncRwLock`].
pub type StdLinkedQueue<T> = SyncQueue<T, LinkedQueueStorage<T>, StdSyncRwLock<LinkedQueueStorage<T>>>;

/// Hash set guarded by [`StdSyncRwLock`].
pub type StdSyncSet<T> = SyncSet<T, StdSyncRwLock<HashSetStorage<T>>>;

/// Capacity decorator whose counter sits behind [`StdSyncRwLock`].
pub type StdBounded<C> = Bounded<C, StdSyncRwLock<CapacityCounter>>;

/// Refusable stack over a [`StdArrayStack`] with its pop buffer behind [`StdSyncRwLock`].
pub type StdRefusableStack<T> = RefusableStack<T, StdArrayStack<T>, StdSyncRwLock<Vec<T>>>;

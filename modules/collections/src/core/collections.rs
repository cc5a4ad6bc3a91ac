//! Stack, queue and set containers together with their decorators.
//!
//! Base containers ([`SyncStack`], [`SyncQueue`], [`SyncSet`]) each guard their storage with a
//! single read-write lock. Decorators ([`Bounded`], [`RefusableStack`]) wrap any implementation
//! of the same contract, take their own lock, and reach the wrapped container only through its
//! public trait methods.

mod batch;
mod batch_error;
mod bounded;
mod collection_error;
mod config;
mod queue;
mod refusable;
mod render;
mod set;
mod stack;
pub mod storage;
pub mod traits;

pub use batch::{add_all, enqueue_all, insert_all, push_all};
pub use batch_error::BatchError;
pub use bounded::{Bounded, CapacityCounter};
pub use collection_error::CollectionError;
pub use config::{ContainerConfig, SharedQueue, SharedStack, StorageKind};
pub use queue::{ArrayQueue, LinkedQueue, SyncQueue};
pub use refusable::{RefusableStack, TransactionState};
pub use render::describe;
pub use set::SyncSet;
pub use stack::{ArrayStack, LinkedStack, SyncStack};
pub use traits::{Collection, Queue, Resettable, Set, Stack};

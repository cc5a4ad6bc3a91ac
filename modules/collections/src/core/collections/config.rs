//! Runtime selection of storage strategy and capacity bound.

mod container_config;
mod storage_kind;

use alloc::boxed::Box;

pub use container_config::ContainerConfig;
pub use storage_kind::StorageKind;

use crate::core::collections::{Queue, Stack};

/// Type-erased stack handle produced by [`ContainerConfig::build_stack`].
pub type SharedStack<T> = Box<dyn Stack<T> + Send + Sync>;

/// Type-erased queue handle produced by [`ContainerConfig::build_queue`].
pub type SharedQueue<T> = Box<dyn Queue<T> + Send + Sync>;

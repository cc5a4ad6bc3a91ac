//! Contracts shared by every container and decorator.
//!
//! Each trait is also implemented for `Box<C>`, `Arc<C>` and `Option<C>`. The `Option`
//! implementations carry the absent-receiver convention: reads on `None` report an empty
//! container, everything else fails with
//! [`CollectionError::NilReceiver`](crate::core::collections::CollectionError::NilReceiver).
//! `Option` has an inherent `insert`, so reach [`Set::insert`] on an optional set with
//! fully qualified syntax.

mod collection;
mod queue;
mod resettable;
mod set;
mod stack;


pub use collection::Collection;
pub use queue::Queue;
pub use resettable::Resettable;
pub use set::Set;
pub use stack::Stack;

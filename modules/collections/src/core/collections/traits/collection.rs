use alloc::{boxed::Box, sync::Arc, vec::Vec};

use super::Resettable;
use crate::core::collections::CollectionError;

/// Capability set shared by every container: emptiness, size, reset, snapshot and insertion.
///
/// All methods take `&self`; implementations synchronize internally.
pub trait Collection<T>: Resettable {
  /// Indicates whether the collection holds no elements.
  fn is_empty(&self) -> bool;

  /// Returns the number of stored elements.
  fn len(&self) -> usize;

  /// Returns an independent copy of the elements.
  ///
  /// The order is defined by the concrete type: stacks list the top first, queues the front
  /// first, sets in no particular order. Mutating the returned vector never affects the
  /// collection.
  fn to_vec(&self) -> Vec<T>
  where
    T: Clone;

  /// Inserts one element using the collection's natural insertion (push, enqueue, insert).
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::NilReceiver`] on an absent collection and
  /// [`CollectionError::Full`] when a capacity bound rejects the element.
  fn add(&self, elem: T) -> Result<(), CollectionError>;

  /// Inserts one element and reports whether the element count grew.
  ///
  /// Sequences always grow; a set answers `false` for an element it already holds. Capacity
  /// accounting goes through this method. A capacity bound that is exhausted rejects it before
  /// the set is consulted, so a full bounded set answers `Full` here where
  /// [`Set::insert`](super::Set::insert) answers `Ok(false)`.
  ///
  /// # Errors
  ///
  /// Same as [`Collection::add`].
  fn add_tracked(&self, elem: T) -> Result<bool, CollectionError> {
    self.add(elem).map(|()| true)
  }
}

impl<T, C: Collection<T> + ?Sized> Collection<T> for Box<C> {
  fn is_empty(&self) -> bool {
    (**self).is_empty()
  }

  fn len(&self) -> usize {
    (**self).len()
  }

  fn to_vec(&self) -> Vec<T>
  where
    T: Clone, {
    (**self).to_vec()
  }

  fn add(&self, elem: T) -> Result<(), CollectionError> {
    (**self).add(elem)
  }

  fn add_tracked(&self, elem: T) -> Result<bool, CollectionError> {
    (**self).add_tracked(elem)
  }
}

impl<T, C: Collection<T> + ?Sized> Collection<T> for Arc<C> {
  fn is_empty(&self) -> bool {
    (**self).is_empty()
  }

  fn len(&self) -> usize {
    (**self).len()
  }

  fn to_vec(&self) -> Vec<T>
  where
    T: Clone, {
    (**self).to_vec()
  }

  fn add(&self, elem: T) -> Result<(), CollectionError> {
    (**self).add(elem)
  }

  fn add_tracked(&self, elem: T) -> Result<bool, CollectionError> {
    (**self).add_tracked(elem)
  }
}

impl<T, C: Collection<T>> Collection<T> for Option<C> {
  fn is_empty(&self) -> bool {
    self.as_ref().map_or(true, |inner| inner.is_empty())
  }

  fn len(&self) -> usize {
    self.as_ref().map_or(0, |inner| inner.len())
  }

  fn to_vec(&self) -> Vec<T>
  where
    T: Clone, {
    self.as_ref().map_or_else(Vec::new, |inner| inner.to_vec())
  }

  fn add(&self, elem: T) -> Result<(), CollectionError> {
    self.as_ref().ok_or(CollectionError::NilReceiver)?.add(elem)
  }

  fn add_tracked(&self, elem: T) -> Result<bool, CollectionError> {
    self.as_ref().ok_or(CollectionError::NilReceiver)?.add_tracked(elem)
  }
}

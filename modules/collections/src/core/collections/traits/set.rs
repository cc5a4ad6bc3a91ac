use alloc::{boxed::Box, sync::Arc};

use super::Collection;
use crate::core::collections::CollectionError;

/// Membership view over a [`Collection`] holding each element at most once.
pub trait Set<T>: Collection<T> {
  /// Indicates whether the set holds `elem`. An absent set holds nothing.
  fn contains(&self, elem: &T) -> bool;

  /// Inserts `elem`, returning `true` when it was not present before.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::NilReceiver`] on an absent set and [`CollectionError::Full`]
  /// when a capacity bound rejects a new element.
  fn insert(&self, elem: T) -> Result<bool, CollectionError>;
}

impl<T, S: Set<T> + ?Sized> Set<T> for Box<S> {
  fn contains(&self, elem: &T) -> bool {
    (**self).contains(elem)
  }

  fn insert(&self, elem: T) -> Result<bool, CollectionError> {
    (**self).insert(elem)
  }
}

impl<T, S: Set<T> + ?Sized> Set<T> for Arc<S> {
  fn contains(&self, elem: &T) -> bool {
    (**self).contains(elem)
  }

  fn insert(&self, elem: T) -> Result<bool, CollectionError> {
    (**self).insert(elem)
  }
}

impl<T, S: Set<T>> Set<T> for Option<S> {
  fn contains(&self, elem: &T) -> bool {
    self.as_ref().is_some_and(|inner| inner.contains(elem))
  }

  fn insert(&self, elem: T) -> Result<bool, CollectionError> {
    self.as_ref().ok_or(CollectionError::NilReceiver)?.insert(elem)
  }
}

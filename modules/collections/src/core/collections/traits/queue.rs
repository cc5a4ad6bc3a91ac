use alloc::{boxed::Box, sync::Arc};

use super::Collection;
use crate::core::collections::CollectionError;

/// First-in, first-out view over a [`Collection`].
pub trait Queue<T>: Collection<T> {
  /// Appends an element at the back of the queue.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::NilReceiver`] on an absent queue and [`CollectionError::Full`]
  /// when a capacity bound rejects the element.
  fn enqueue(&self, elem: T) -> Result<(), CollectionError>;

  /// Removes and returns the front element.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the queue holds no elements and
  /// [`CollectionError::NilReceiver`] on an absent queue.
  fn dequeue(&self) -> Result<T, CollectionError>;

  /// Returns a copy of the front element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the queue holds no elements and
  /// [`CollectionError::NilReceiver`] on an absent queue.
  fn front(&self) -> Result<T, CollectionError>
  where
    T: Clone;
}

impl<T, Q: Queue<T> + ?Sized> Queue<T> for Box<Q> {
  fn enqueue(&self, elem: T) -> Result<(), CollectionError> {
    (**self).enqueue(elem)
  }

  fn dequeue(&self) -> Result<T, CollectionError> {
    (**self).dequeue()
  }

  fn front(&self) -> Result<T, CollectionError>
  where
    T: Clone, {
    (**self).front()
  }
}

impl<T, Q: Queue<T> + ?Sized> Queue<T> for Arc<Q> {
  fn enqueue(&self, elem: T) -> Result<(), CollectionError> {
    (**self).enqueue(elem)
  }

  fn dequeue(&self) -> Result<T, CollectionError> {
    (**self).dequeue()
  }

  fn front(&self) -> Result<T, CollectionError>
  where
    T: Clone, {
    (**self).front()
  }
}

impl<T, Q: Queue<T>> Queue<T> for Option<Q> {
  fn enqueue(&self, elem: T) -> Result<(), CollectionError> {
    self.as_ref().ok_or(CollectionError::NilReceiver)?.enqueue(elem)
  }

  fn dequeue(&self) -> Result<T, CollectionError> {
    self.as_ref().ok_or(CollectionError::NilReceiver)?.dequeue()
  }

  fn front(&self) -> Result<T, CollectionError>
  where
    T: Clone, {
    self.as_ref().ok_or(CollectionError::NilReceiver)?.front()
  }
}

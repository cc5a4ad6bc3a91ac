use alloc::{boxed::Box, sync::Arc};

use super::Collection;
use crate::core::collections::CollectionError;

/// Last-in, first-out view over a [`Collection`].
pub trait Stack<T>: Collection<T> {
  /// Pushes an element onto the top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::NilReceiver`] on an absent stack and [`CollectionError::Full`]
  /// when a capacity bound rejects the element.
  fn push(&self, elem: T) -> Result<(), CollectionError>;

  /// Removes and returns the top element.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the stack holds no elements and
  /// [`CollectionError::NilReceiver`] on an absent stack.
  fn pop(&self) -> Result<T, CollectionError>;

  /// Returns a copy of the top element without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Empty`] when the stack holds no elements and
  /// [`CollectionError::NilReceiver`] on an absent stack.
  fn peek(&self) -> Result<T, CollectionError>
  where
    T: Clone;
}

impl<T, S: Stack<T> + ?Sized> Stack<T> for Box<S> {
  fn push(&self, elem: T) -> Result<(), CollectionError> {
    (**self).push(elem)
  }

  fn pop(&self) -> Result<T, CollectionError> {
    (**self).pop()
  }

  fn peek(&self) -> Result<T, CollectionError>
  where
    T: Clone, {
    (**self).peek()
  }
}

impl<T, S: Stack<T> + ?Sized> Stack<T> for Arc<S> {
  fn push(&self, elem: T) -> Result<(), CollectionError> {
    (**self).push(elem)
  }

  fn pop(&self) -> Result<T, CollectionError> {
    (**self).pop()
  }

  fn peek(&self) -> Result<T, CollectionError>
  where
    T: Clone, {
    (**self).peek()
  }
}

impl<T, S: Stack<T>> Stack<T> for Option<S> {
  fn push(&self, elem: T) -> Result<(), CollectionError> {
    self.as_ref().ok_or(CollectionError::NilReceiver)?.push(elem)
  }

  fn pop(&self) -> Result<T, CollectionError> {
    self.as_ref().ok_or(CollectionError::NilReceiver)?.pop()
  }

  fn peek(&self) -> Result<T, CollectionError>
  where
    T: Clone, {
    self.as_ref().ok_or(CollectionError::NilReceiver)?.peek()
  }
}

use alloc::{boxed::Box, sync::Arc};

use crate::core::collections::CollectionError;

/// Capability of returning to the initial, reusable state.
///
/// Containers implement it through [`Collection`](super::Collection); collaborating
/// structures stored inside containers may implement it on its own.
pub trait Resettable {
  /// Resets the value so that it can be used again.
  ///
  /// Resetting an already empty value is a no-op.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::NilReceiver`] when the receiver is absent. Wrapping
  /// implementations also propagate the error of the value they wrap.
  fn reset(&self) -> Result<(), CollectionError>;
}

impl<R: Resettable + ?Sized> Resettable for Box<R> {
  fn reset(&self) -> Result<(), CollectionError> {
    (**self).reset()
  }
}

impl<R: Resettable + ?Sized> Resettable for Arc<R> {
  fn reset(&self) -> Result<(), CollectionError> {
    (**self).reset()
  }
}

impl<R: Resettable> Resettable for Option<R> {
  fn reset(&self) -> Result<(), CollectionError> {
    match self {
      | Some(inner) => inner.reset(),
      | None => Err(CollectionError::NilReceiver),
    }
  }
}

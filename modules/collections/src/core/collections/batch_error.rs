use core::fmt;

use crate::core::collections::CollectionError;

/// Failure of a batch insertion, carrying the partial progress made before it.
///
/// `added` is exact: the first `added` elements of the batch are in the container, the element
/// at index `added` was rejected with `error`, and nothing after it was attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchError {
  /// Number of elements successfully inserted before the failure.
  pub added: usize,
  /// Error that stopped the batch.
  pub error: CollectionError,
}

impl BatchError {
  /// Creates a batch error for a failure after `added` successful insertions.
  #[must_use]
  pub const fn new(added: usize, error: CollectionError) -> Self {
    Self { added, error }
  }
}

impl fmt::Display for BatchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "batch stopped after {} element(s): {}", self.added, self.error)
  }
}

impl core::error::Error for BatchError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    Some(&self.error)
  }
}

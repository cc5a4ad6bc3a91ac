use core::fmt;


/// Errors reported by container operations.
///
/// Every variant is a plain value compared structurally; callers match on the variant instead
/// of comparing against shared sentinel instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionError {
  /// The operation was invoked on an absent container.
  NilReceiver,
  /// A read or removal was attempted on a container holding no elements.
  Empty,
  /// An insertion was attempted on a capacity-bounded container at its limit.
  Full,
  /// A required argument was absent. Carries the parameter name.
  BadParameter(&'static str),
}

impl fmt::Display for CollectionError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | CollectionError::NilReceiver => write!(f, "receiver is nil"),
      | CollectionError::Empty => write!(f, "collection is empty"),
      | CollectionError::Full => write!(f, "collection is full"),
      | CollectionError::BadParameter(name) => write!(f, "parameter `{name}` must not be nil"),
    }
  }
}

impl core::error::Error for CollectionError {}

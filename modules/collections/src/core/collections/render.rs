//! Diagnostic rendering shared by the containers' `Display` implementations.

use alloc::{
  format,
  string::{String, ToString},
  vec::Vec,
};
use core::fmt;

use crate::core::collections::Collection;

#[cfg(test)]
mod tests;

/// Writes `name[e0, e1, ...]`.
pub(crate) fn write_sequence<T: fmt::Display>(f: &mut fmt::Formatter<'_>, name: &str, items: &[T]) -> fmt::Result {
  write!(f, "{name}[")?;
  for (index, item) in items.iter().enumerate() {
    if index > 0 {
      f.write_str(", ")?;
    }
    write!(f, "{item}")?;
  }
  f.write_str("]")
}

/// Renders any collection as `name[e0, e1, ...]` in `to_vec` order, or `<nil>` when absent.
#[must_use]
pub fn describe<T, C>(name: &str, collection: Option<&C>) -> String
where
  T: fmt::Display + Clone,
  C: Collection<T> + ?Sized, {
  match collection {
    | Some(collection) => format!("{}", Sequence { name, items: collection.to_vec() }),
    | None => "<nil>".to_string(),
  }
}

struct Sequence<'a, T> {
  name:  &'a str,
  items: Vec<T>,
}

impl<T: fmt::Display> fmt::Display for Sequence<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write_sequence(f, self.name, &self.items)
  }
}

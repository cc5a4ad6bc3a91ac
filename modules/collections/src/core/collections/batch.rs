//! Element-at-a-time batch insertion with exact partial counts.
//!
//! Every helper stops at the first rejected element. On failure the returned
//! [`BatchError`] reports how many elements went in before it; nothing is rolled back.

use crate::core::collections::{BatchError, Collection, CollectionError, Queue, Set, Stack};


fn require<'a, C: ?Sized>(target: Option<&'a C>, name: &'static str) -> Result<&'a C, BatchError> {
  target.ok_or(BatchError::new(0, CollectionError::BadParameter(name)))
}

fn drive<T>(
  elems: impl IntoIterator<Item = T>,
  mut insert: impl FnMut(T) -> Result<(), CollectionError>,
) -> Result<usize, BatchError> {
  let mut added = 0;
  for elem in elems {
    insert(elem).map_err(|error| BatchError::new(added, error))?;
    added += 1;
  }
  Ok(added)
}

/// Adds every element through [`Collection::add`] and returns how many were added.
///
/// # Errors
///
/// Returns `BadParameter("collection")` with `added == 0` when `collection` is absent, and
/// otherwise the first insertion error together with the number of elements added before it.
pub fn add_all<T, C>(collection: Option<&C>, elems: impl IntoIterator<Item = T>) -> Result<usize, BatchError>
where
  C: Collection<T> + ?Sized, {
  let collection = require(collection, "collection")?;
  drive(elems, |elem| collection.add(elem))
}

/// Pushes the elements so that the first one ends on top of the stack.
///
/// Elements are pushed from last to first. When a push fails, `added` counts the trailing
/// elements that made it onto the stack.
///
/// # Errors
///
/// Returns `BadParameter("stack")` when `stack` is absent, and otherwise the first push error
/// together with the number of elements pushed before it.
pub fn push_all<T, S, I>(stack: Option<&S>, elems: I) -> Result<usize, BatchError>
where
  S: Stack<T> + ?Sized,
  I: IntoIterator<Item = T>,
  I::IntoIter: DoubleEndedIterator, {
  let stack = require(stack, "stack")?;
  drive(elems.into_iter().rev(), |elem| stack.push(elem))
}

/// Enqueues the elements in order.
///
/// # Errors
///
/// Returns `BadParameter("queue")` when `queue` is absent, and otherwise the first enqueue
/// error together with the number of elements enqueued before it.
pub fn enqueue_all<T, Q>(queue: Option<&Q>, elems: impl IntoIterator<Item = T>) -> Result<usize, BatchError>
where
  Q: Queue<T> + ?Sized, {
  let queue = require(queue, "queue")?;
  drive(elems, |elem| queue.enqueue(elem))
}

/// Inserts the elements in order and returns how many were processed, duplicates included.
///
/// # Errors
///
/// Returns `BadParameter("set")` when `set` is absent, and otherwise the first insertion error
/// together with the number of elements processed before it.
pub fn insert_all<T, S>(set: Option<&S>, elems: impl IntoIterator<Item = T>) -> Result<usize, BatchError>
where
  S: Set<T> + ?Sized, {
  let set = require(set, "set")?;
  drive(elems, |elem| set.insert(elem).map(|_| ()))
}

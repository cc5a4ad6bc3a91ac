use alloc::{boxed::Box, vec::Vec};

use tracing::trace;

use super::{Node, StackStorage};

#[cfg(test)]
mod tests;

/// Stack storage built from a singly linked chain of [`Node`]s.
///
/// `head` is the top of the stack and is `None` exactly when the storage is empty. The
/// element count is cached so that `len` does not walk the chain.
pub struct LinkedStackStorage<T> {
  head: Option<Box<Node<T>>>,
  len:  usize,
}

impl<T> LinkedStackStorage<T> {
  /// Creates an empty storage.
  #[must_use]
  pub const fn new() -> Self {
    Self { head: None, len: 0 }
  }

  fn release(&mut self) {
    if let Some(head) = self.head.take() {
      let released = head.release();
      trace!(released, "released linked stack chain");
    }
    self.len = 0;
  }
}

impl<T> Default for LinkedStackStorage<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> StackStorage<T> for LinkedStackStorage<T> {
  const NAME: &'static str = "LinkedStack";

  fn push(&mut self, value: T) {
    let mut node = Box::new(Node::new(value));
    if let Some(previous) = self.head.take() {
      node.link(previous);
    }
    self.head = Some(node);
    self.len += 1;
  }

  fn pop(&mut self) -> Option<T> {
    let mut top = self.head.take()?;
    // Detach before handing out the value so the popped node never keeps the rest reachable.
    self.head = top.unlink();
    self.len -= 1;
    Some(top.into_value())
  }

  fn peek(&self) -> Option<&T> {
    self.head.as_deref().map(Node::value)
  }

  fn len(&self) -> usize {
    self.len
  }

  fn clear(&mut self) {
    self.release();
  }

  fn snapshot(&self) -> Vec<T>
  where
    T: Clone, {
    let mut elems = Vec::with_capacity(self.len);
    let mut cursor = self.head.as_deref();
    while let Some(node) = cursor {
      elems.push(node.value().clone());
      cursor = node.next();
    }
    elems
  }
}

impl<T> Drop for LinkedStackStorage<T> {
  fn drop(&mut self) {
    self.release();
  }
}

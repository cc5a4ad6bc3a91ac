use alloc::{boxed::Box, vec::Vec};
use core::{marker::PhantomData, ptr::NonNull};

use tracing::trace;

use super::QueueStorage;

mod queue_node;

use queue_node::QueueNode;

/// Queue storage built from a singly linked chain with head and tail tracking.
///
/// Every node is allocated with `Box`, leaked into a `NonNull`, and reclaimed with
/// `Box::from_raw` when it is dequeued or released. `head` and `tail` are plain pointers into
/// that chain, so no `Box` ever moves while `tail` aliases the last node. Both change together
/// inside `&mut self` methods; `head` is `None` exactly when `tail` is `None`.
pub struct LinkedQueueStorage<T> {
  head:  Option<NonNull<QueueNode<T>>>,
  tail:  Option<NonNull<QueueNode<T>>>,
  len:   usize,
  _owns: PhantomData<Box<QueueNode<T>>>,
}

// SAFETY: the storage exclusively owns every node reachable from `head`; no pointer to a node
// escapes it, so sending the storage sends the `T`s it owns.
unsafe impl<T: Send> Send for LinkedQueueStorage<T> {}
// SAFETY: `&self` methods only read node values through `head`; all pointer writes need
// `&mut self`.
unsafe impl<T: Sync> Sync for LinkedQueueStorage<T> {}

impl<T> LinkedQueueStorage<T> {
  /// Creates an empty storage.
  #[must_use]
  pub const fn new() -> Self {
    Self { head: None, tail: None, len: 0, _owns: PhantomData }
  }

  fn nodes(&self) -> impl Iterator<Item = &QueueNode<T>> {
    // SAFETY: every pointer in the chain refers to a live node owned by `self`, and `&self`
    // rules out concurrent mutation for the iterator's lifetime.
    core::iter::successors(self.head.map(|head| unsafe { head.as_ref() }), |node| {
      node.next.map(|next| unsafe { next.as_ref() })
    })
  }

  fn release(&mut self) {
    self.tail = None;
    let mut released = 0_usize;
    let mut cursor = self.head.take();
    while let Some(node) = cursor {
      // SAFETY: `node` came from `Box::leak` in `enqueue` and is unlinked from the chain right
      // here, so it is reclaimed exactly once.
      let boxed = unsafe { Box::from_raw(node.as_ptr()) };
      cursor = boxed.next;
      released += 1;
    }
    self.len = 0;
    if released > 0 {
      trace!(released, "released linked queue chain");
    }
  }
}

impl<T> Default for LinkedQueueStorage<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> QueueStorage<T> for LinkedQueueStorage<T> {
  const NAME: &'static str = "LinkedQueue";

  fn enqueue(&mut self, value: T) {
    let node = NonNull::from(Box::leak(Box::new(QueueNode::new(value))));
    match self.tail {
      // SAFETY: `tail` is the last live node of the chain owned by `self`; `&mut self` makes
      // this the only access to it.
      | Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
      | None => self.head = Some(node),
    }
    self.tail = Some(node);
    self.len += 1;
  }

  fn dequeue(&mut self) -> Option<T> {
    let head = self.head?;
    // SAFETY: `head` came from `Box::leak` in `enqueue`; advancing `head` below removes the
    // last pointer to it, so ownership returns to the box exactly once.
    let node = unsafe { Box::from_raw(head.as_ptr()) };
    self.head = node.next;
    if self.head.is_none() {
      self.tail = None;
    }
    self.len -= 1;
    Some(node.value)
  }

  fn front(&self) -> Option<&T> {
    self.nodes().next().map(|node| &node.value)
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
    elems.extend(self.nodes().map(|node| node.value.clone()));
    elems
  }
}

impl<T> Drop for LinkedQueueStorage<T> {
  fn drop(&mut self) {
    self.release();
  }
}

use alloc::boxed::Box;


/// One slot of a linked storage chain.
///
/// A node owns its value and, through `link`, every node after it. Ownership is strictly
/// linear, so a node can never link to itself.
pub struct Node<T> {
  value: T,
  link:  Option<Box<Node<T>>>,
}

impl<T> Node<T> {
  /// Creates an unlinked node holding `value`.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self { value, link: None }
  }

  /// Returns a reference to the held value.
  #[must_use]
  pub const fn value(&self) -> &T {
    &self.value
  }

  /// Returns the linked neighbour, if any.
  #[must_use]
  pub fn next(&self) -> Option<&Node<T>> {
    self.link.as_deref()
  }

  /// Indicates whether the node links to a neighbour.
  #[must_use]
  pub const fn is_linked(&self) -> bool {
    self.link.is_some()
  }

  /// Links `next` behind this node and returns a mutable reference to it in its final place.
  ///
  /// The node must be unlinked; linking over an existing neighbour would drop the rest of the
  /// chain recursively.
  pub fn link(&mut self, next: Box<Node<T>>) -> &mut Node<T> {
    debug_assert!(self.link.is_none(), "linking over an existing neighbour");
    self.link.insert(next)
  }

  /// Detaches and returns the linked neighbour, leaving this node unlinked.
  pub fn unlink(&mut self) -> Option<Box<Node<T>>> {
    self.link.take()
  }

  /// Consumes an unlinked node and returns its value.
  pub fn into_value(self) -> T {
    debug_assert!(self.link.is_none(), "node still owns a neighbour");
    self.value
  }

  /// Releases this node and every node linked after it, returning how many were freed.
  ///
  /// The walk is iterative: each node is unlinked before it is dropped, so releasing a chain
  /// uses constant stack depth regardless of its length.
  pub fn release(self: Box<Self>) -> usize {
    let mut released = 0;
    let mut cursor = Some(self);
    while let Some(mut node) = cursor {
      cursor = node.unlink();
      released += 1;
      drop(node);
    }
    released
  }
}

use core::ptr::NonNull;

/// Queue chain slot. Every slot is reached only through raw pointers owned by
/// [`LinkedQueueStorage`](super::LinkedQueueStorage).
pub(super) struct QueueNode<T> {
  pub(super) value: T,
  pub(super) next:  Option<NonNull<QueueNode<T>>>,
}

impl<T> QueueNode<T> {
  pub(super) const fn new(value: T) -> Self {
    Self { value, next: None }
  }
}

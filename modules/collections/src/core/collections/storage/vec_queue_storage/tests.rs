use super::VecQueueStorage;
use crate::core::collections::storage::QueueStorage;

#[test]
fn dequeue_follows_enqueue_order() {
  let mut storage = VecQueueStorage::with_capacity(2);
  storage.enqueue(1);
  storage.enqueue(2);
  storage.enqueue(3);
  assert_eq!(storage.front(), Some(&1));
  assert_eq!(storage.dequeue(), Some(1));
  assert_eq!(storage.dequeue(), Some(2));
  assert_eq!(storage.len(), 1);
}

#[test]
fn wraparound_keeps_order() {
  let mut storage = VecQueueStorage::with_capacity(4);
  for round in 0..10 {
    storage.enqueue(round * 2);
    storage.enqueue(round * 2 + 1);
    assert_eq!(storage.dequeue(), Some(round));
  }
  assert_eq!(storage.snapshot(), (10..20).collect::<alloc::vec::Vec<_>>());
}

#[test]
fn clear_empties_storage() {
  let mut storage = VecQueueStorage::new();
  storage.enqueue('x');
  storage.clear();
  assert!(storage.is_empty());
  assert_eq!(storage.front(), None);
}

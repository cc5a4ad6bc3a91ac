use alloc::{string::String, vec::Vec};

use super::LinkedStackStorage;
use crate::core::collections::storage::StackStorage;

#[test]
fn push_pop_is_lifo() {
  let mut storage = LinkedStackStorage::new();
  for value in 0..5 {
    storage.push(value);
  }
  assert_eq!(storage.len(), 5);
  let popped: Vec<_> = core::iter::from_fn(|| storage.pop()).collect();
  assert_eq!(popped, [4, 3, 2, 1, 0]);
  assert!(storage.is_empty());
  assert_eq!(storage.pop(), None);
}

#[test]
fn snapshot_walks_from_head() {
  let mut storage = LinkedStackStorage::new();
  storage.push(String::from("bottom"));
  storage.push(String::from("top"));
  assert_eq!(storage.peek().map(String::as_str), Some("top"));
  assert_eq!(storage.snapshot(), ["top", "bottom"]);
  assert_eq!(storage.len(), 2);
}

#[test]
fn clear_is_idempotent() {
  let mut storage = LinkedStackStorage::new();
  storage.push(1);
  storage.clear();
  storage.clear();
  assert!(storage.is_empty());
  storage.push(2);
  assert_eq!(storage.peek(), Some(&2));
}

#[test]
fn clear_releases_long_chain_iteratively() {
  let mut storage = LinkedStackStorage::new();
  for value in 0..500_000_u32 {
    storage.push(value);
  }
  storage.clear();
  assert_eq!(storage.len(), 0);
  assert_eq!(storage.peek(), None);
}

#[test]
fn drop_releases_long_chain_iteratively() {
  let mut storage = LinkedStackStorage::new();
  for value in 0..500_000_u32 {
    storage.push(value);
  }
  drop(storage);
}

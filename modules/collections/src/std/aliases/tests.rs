extern crate std;

use std::{sync::Arc, thread, vec::Vec};

use super::{StdArrayQueue, StdArrayStack, StdBounded, StdLinkedQueue, StdLinkedStack, StdRefusableStack, StdSyncSet};
use crate::core::collections::{Collection, CollectionError, Queue, Set, Stack};

#[test]
fn std_stacks_keep_lifo_order() {
  let array = StdArrayStack::new();
  let linked = StdLinkedStack::new();
  for value in 0..4 {
    array.push(value).unwrap();
    linked.push(value).unwrap();
  }
  assert_eq!(array.to_vec(), [3, 2, 1, 0]);
  assert_eq!(linked.to_vec(), [3, 2, 1, 0]);
}

#[test]
fn std_queues_keep_fifo_order() {
  let array: StdArrayQueue<_> = (0..4).collect();
  let linked: StdLinkedQueue<_> = (0..4).collect();
  assert_eq!(array.dequeue(), Ok(0));
  assert_eq!(linked.dequeue(), Ok(0));
  assert_eq!(array.to_vec(), [1, 2, 3]);
  assert_eq!(linked.to_vec(), [1, 2, 3]);
}

#[test]
fn std_set_and_bound_compose() {
  let set: StdBounded<StdSyncSet<&str>> = StdBounded::with_capacity(1);
  assert_eq!(set.insert("a"), Ok(true));
  assert_eq!(set.insert("a"), Ok(false));
  assert_eq!(set.insert("b"), Err(CollectionError::Full));
}

#[test]
fn std_refusable_stack_restores_pops() {
  let stack: StdRefusableStack<u8> = StdRefusableStack::default();
  stack.push(1).unwrap();
  stack.push(2).unwrap();
  stack.pop().unwrap();
  stack.refuse().unwrap();
  assert_eq!(stack.to_vec(), [2, 1]);
}

#[test]
fn std_linked_queue_is_shared_across_threads() {
  let queue = Arc::new(StdLinkedQueue::new());
  let producers: Vec<_> = (0..4_u32)
    .map(|id| {
      let queue = Arc::clone(&queue);
      thread::spawn(move || {
        for seq in 0..250 {
          queue.enqueue(id * 1000 + seq).unwrap();
        }
      })
    })
    .collect();
  for producer in producers {
    producer.join().unwrap();
  }
  assert_eq!(queue.len(), 1000);

  let mut last_seen = [None::<u32>; 4];
  while let Ok(value) = queue.dequeue() {
    let id = (value / 1000) as usize;
    let seq = value % 1000;
    assert!(last_seen[id].map_or(true, |previous| previous < seq));
    last_seen[id] = Some(seq);
  }
  assert!(queue.is_empty());
}

extern crate std;

use std::string::ToString;

use super::{Bounded, CapacityCounter};
use crate::core::collections::{
  ArrayStack, BatchError, Collection, CollectionError, LinkedQueue, LinkedStack, Queue, RefusableStack, Resettable,
  Set, Stack, SyncSet, TransactionState,
};

#[test]
fn counter_reports_remaining_room() {
  let counter = CapacityCounter::new(1, 3);
  assert_eq!(counter.remaining(), 2);
  assert!(!counter.is_full());
  assert!(!counter.is_empty());
  assert!(CapacityCounter::new(3, 3).is_full());
  assert_eq!(CapacityCounter::new(0, 0).remaining(), 0);
}

#[test]
fn push_beyond_capacity_is_rejected_and_recovers_after_pop() {
  let stack: Bounded<ArrayStack<u32>> = Bounded::with_capacity(3);
  for value in 0..3 {
    stack.push(value).unwrap();
  }
  assert!(stack.is_full());
  assert_eq!(stack.push(99), Err(CollectionError::Full));
  assert_eq!(stack.len(), 3);
  assert_eq!(stack.inner().len(), 3);

  assert_eq!(stack.pop(), Ok(2));
  assert_eq!(stack.remaining(), 1);
  stack.push(7).unwrap();
  assert_eq!(stack.to_vec(), [7, 1, 0]);
}

#[test]
fn enqueue_beyond_capacity_is_rejected_and_recovers_after_dequeue() {
  let queue: Bounded<LinkedQueue<&str>> = Bounded::with_capacity(2);
  queue.enqueue("a").unwrap();
  queue.add("b").unwrap();
  assert_eq!(queue.enqueue("c"), Err(CollectionError::Full));
  assert_eq!(queue.add("c"), Err(CollectionError::Full));
  assert_eq!(queue.dequeue(), Ok("a"));
  queue.enqueue("c").unwrap();
  assert_eq!(queue.to_vec(), ["b", "c"]);
}

#[test]
fn removal_and_reads_on_zero_count_report_empty() {
  let stack: Bounded<LinkedStack<i8>> = Bounded::with_capacity(1);
  assert_eq!(stack.pop(), Err(CollectionError::Empty));
  assert_eq!(stack.peek(), Err(CollectionError::Empty));

  let queue: Bounded<LinkedQueue<i8>> = Bounded::with_capacity(1);
  assert_eq!(queue.dequeue(), Err(CollectionError::Empty));
  assert_eq!(queue.front(), Err(CollectionError::Empty));
}

#[test]
fn new_adopts_the_wrapped_size() {
  let inner: ArrayStack<_> = [1, 2].into_iter().collect();
  let stack = Bounded::<ArrayStack<i32>>::new(inner, 3).unwrap();
  assert_eq!(stack.len(), 2);
  assert_eq!(stack.remaining(), 1);
  stack.push(3).unwrap();
  assert_eq!(stack.push(4), Err(CollectionError::Full));
  assert_eq!(stack.peek(), Ok(3));
}

#[test]
fn new_rejects_an_overfull_container() {
  let inner: ArrayStack<_> = (0..5).collect();
  let result = Bounded::<ArrayStack<i32>>::new(inner, 4);
  assert!(matches!(result, Err(CollectionError::Full)));
}

#[test]
fn zero_capacity_rejects_everything() {
  let stack: Bounded<ArrayStack<u8>> = Bounded::default();
  assert_eq!(stack.capacity(), 0);
  assert_eq!(stack.push(1), Err(CollectionError::Full));
  assert!(stack.is_empty());
}

#[test]
fn reset_clears_inner_and_count() {
  let stack: Bounded<ArrayStack<u8>> = Bounded::with_capacity(2);
  stack.push(1).unwrap();
  stack.push(2).unwrap();
  stack.reset().unwrap();
  assert!(stack.is_empty());
  assert!(stack.inner().is_empty());
  assert_eq!(stack.remaining(), 2);
  stack.push(3).unwrap();
  stack.push(4).unwrap();
  assert_eq!(stack.len(), 2);
}

#[test]
fn bounded_set_counts_only_new_elements() {
  let set: Bounded<SyncSet<u16>> = Bounded::with_capacity(2);
  assert_eq!(set.insert(1), Ok(true));
  assert_eq!(set.insert(1), Ok(false));
  assert_eq!(set.len(), 1);
  set.add(2).unwrap();
  assert!(set.is_full());
  assert_eq!(set.insert(2), Ok(false));
  assert_eq!(set.insert(3), Err(CollectionError::Full));
  assert!(set.contains(&2));
  assert!(!set.contains(&3));
}

#[test]
fn add_tracked_on_a_bounded_set_does_not_count_duplicates() {
  let set: Bounded<SyncSet<u16>> = Bounded::with_capacity(3);
  assert_eq!(set.add_tracked(5), Ok(true));
  assert_eq!(set.add_tracked(5), Ok(false));
  assert_eq!(set.remaining(), 2);
}

#[test]
fn display_delegates_to_the_wrapped_container() {
  let stack: Bounded<ArrayStack<u8>> = Bounded::with_capacity(4);
  stack.push(1).unwrap();
  stack.push(2).unwrap();
  assert_eq!(stack.to_string(), "ArrayStack[2, 1]");
}

#[test]
fn full_bounded_set_rejects_generic_add_of_a_held_element() {
  let set: Bounded<SyncSet<u16>> = Bounded::with_capacity(1);
  set.add(9).unwrap();
  assert_eq!(set.add(9), Err(CollectionError::Full));
  assert_eq!(set.add_tracked(9), Err(CollectionError::Full));
  assert_eq!(set.insert(9), Ok(false));
  assert_eq!(set.len(), 1);
}

#[test]
fn refuse_through_the_bound_keeps_the_count_in_step() {
  let stack: Bounded<RefusableStack<char>> = Bounded::with_capacity(2);
  stack.push('a').unwrap();
  stack.push('b').unwrap();
  assert_eq!(stack.pop(), Ok('b'));
  assert_eq!(stack.refuse(), Ok(1));
  assert_eq!(stack.len(), 2);
  assert_eq!(stack.push('c'), Err(CollectionError::Full));
  assert_eq!(stack.inner().len(), 2);
}

#[test]
fn refuse_through_the_bound_stops_at_capacity() {
  let stack: Bounded<RefusableStack<char>> = Bounded::with_capacity(2);
  stack.push('a').unwrap();
  stack.push('b').unwrap();
  stack.pop().unwrap();
  stack.pop().unwrap();
  stack.push('c').unwrap();

  assert_eq!(stack.refuse(), Err(BatchError::new(1, CollectionError::Full)));
  assert_eq!(stack.len(), 2);
  assert_eq!(stack.inner().len(), 2);
  assert_eq!(stack.to_vec(), ['a', 'c']);
  assert_eq!(stack.inner().popped(), ['b']);
  assert_eq!(stack.remaining(), 0);

  assert_eq!(stack.accept(), 1);
  assert_eq!(stack.inner().state(), TransactionState::Clean);
  assert_eq!(stack.len(), 2);
}

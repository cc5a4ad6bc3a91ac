extern crate std;

use std::string::ToString;

use super::{RefusableStack, TransactionState};
use crate::core::collections::{
  ArrayStack, BatchError, Bounded, Collection, CollectionError, LinkedStack, Resettable, Stack,
};

fn abc() -> RefusableStack<char> {
  let stack = RefusableStack::default();
  for elem in ['A', 'B', 'C'] {
    stack.push(elem).unwrap();
  }
  stack
}

#[test]
fn refuse_restores_the_state_before_the_pops() {
  let stack = abc();
  assert_eq!(stack.pop(), Ok('C'));
  assert_eq!(stack.pop(), Ok('B'));
  assert_eq!(stack.state(), TransactionState::Pending);
  assert_eq!(stack.popped(), ['C', 'B']);

  assert_eq!(stack.refuse(), Ok(2));
  assert_eq!(stack.to_vec(), ['C', 'B', 'A']);
  assert_eq!(stack.state(), TransactionState::Clean);
  assert!(stack.popped().is_empty());
}

#[test]
fn accept_keeps_the_pops() {
  let stack = abc();
  stack.pop().unwrap();
  stack.pop().unwrap();
  assert_eq!(stack.accept(), 2);
  assert_eq!(stack.to_vec(), ['A']);
  assert_eq!(stack.state(), TransactionState::Clean);
  assert_eq!(stack.refuse(), Ok(0));
  assert_eq!(stack.to_vec(), ['A']);
}

#[test]
fn accept_and_refuse_on_a_clean_stack_do_nothing() {
  let stack = abc();
  assert_eq!(stack.accept(), 0);
  assert_eq!(stack.refuse(), Ok(0));
  assert_eq!(stack.len(), 3);
}

#[test]
fn failed_pop_leaves_the_buffer_untouched() {
  let stack: RefusableStack<u8> = RefusableStack::default();
  assert_eq!(stack.pop(), Err(CollectionError::Empty));
  assert_eq!(stack.state(), TransactionState::Clean);

  stack.push(1).unwrap();
  stack.pop().unwrap();
  assert_eq!(stack.pop(), Err(CollectionError::Empty));
  assert_eq!(stack.popped(), [1]);
}

#[test]
fn pushes_during_a_transaction_stay_below_the_restored_elements() {
  let stack = abc();
  stack.pop().unwrap();
  stack.push('D').unwrap();
  assert_eq!(stack.state(), TransactionState::Pending);
  stack.refuse().unwrap();
  assert_eq!(stack.to_vec(), ['C', 'D', 'B', 'A']);
}

#[test]
fn peek_and_reads_delegate() {
  let stack = abc();
  assert_eq!(stack.peek(), Ok('C'));
  stack.pop().unwrap();
  assert_eq!(stack.peek(), Ok('B'));
  assert_eq!(stack.len(), 2);
  assert!(!stack.is_empty());
}

#[test]
fn reset_drops_the_buffer_and_empties_the_stack() {
  let stack = abc();
  stack.pop().unwrap();
  stack.reset().unwrap();
  assert!(stack.is_empty());
  assert_eq!(stack.state(), TransactionState::Clean);
  assert_eq!(stack.refuse(), Ok(0));
  assert!(stack.is_empty());
}

#[test]
fn partial_refuse_keeps_unreplayed_elements() {
  let stack: RefusableStack<&str, Bounded<ArrayStack<&str>>> = RefusableStack::new(Bounded::with_capacity(2));
  stack.push("a").unwrap();
  stack.push("b").unwrap();
  assert_eq!(stack.pop(), Ok("b"));
  stack.push("c").unwrap();

  assert_eq!(stack.refuse(), Err(BatchError::new(0, CollectionError::Full)));
  assert_eq!(stack.popped(), ["b"]);
  assert_eq!(stack.state(), TransactionState::Pending);
  assert_eq!(stack.to_vec(), ["c", "a"]);

  assert_eq!(stack.pop(), Ok("c"));
  assert_eq!(stack.popped(), ["b", "c"]);
  assert_eq!(stack.refuse(), Err(BatchError::new(1, CollectionError::Full)));
  assert_eq!(stack.popped(), ["b"]);
  assert_eq!(stack.to_vec(), ["c", "a"]);
  assert_eq!(stack.accept(), 1);
}

#[test]
fn wraps_a_linked_stack() {
  let stack: RefusableStack<u32, LinkedStack<u32>> = RefusableStack::new((1..=4).collect());
  stack.pop().unwrap();
  stack.pop().unwrap();
  stack.refuse().unwrap();
  assert_eq!(stack.to_vec(), [4, 3, 2, 1]);
}

#[test]
fn can_sit_inside_a_capacity_bound() {
  let stack: Bounded<RefusableStack<u8>> = Bounded::with_capacity(2);
  stack.push(1).unwrap();
  stack.push(2).unwrap();
  assert_eq!(stack.push(3), Err(CollectionError::Full));
  assert_eq!(stack.pop(), Ok(2));
  assert_eq!(stack.inner().popped(), [2]);
  assert_eq!(stack.accept(), 1);
  assert_eq!(stack.len(), 1);
}

#[test]
fn display_delegates_to_the_wrapped_stack() {
  let stack = abc();
  stack.pop().unwrap();
  assert_eq!(stack.to_string(), "ArrayStack[B, A]");
}

use super::describe;
use crate::core::collections::{ArrayQueue, ArrayStack, Collection, Stack};

#[test]
fn describe_renders_in_snapshot_order() {
  let stack = ArrayStack::new();
  stack.push('x').unwrap();
  stack.push('y').unwrap();
  assert_eq!(describe("Stack", Some(&stack)), "Stack[y, x]");

  let queue: ArrayQueue<_> = [10, 20].into_iter().collect();
  assert_eq!(describe("Queue", Some(&queue)), "Queue[10, 20]");
}

#[test]
fn describe_renders_empty_and_absent() {
  let stack: ArrayStack<u8> = ArrayStack::new();
  assert_eq!(describe("Stack", Some(&stack)), "Stack[]");
  assert_eq!(describe::<u8, ArrayStack<u8>>("Stack", None), "<nil>");
}

#[test]
fn describe_accepts_trait_objects() {
  let stack: ArrayStack<i32> = (1..=3).collect();
  let erased: &dyn Collection<i32> = &stack;
  assert_eq!(describe("Dyn", Some(erased)), "Dyn[3, 2, 1]");
}

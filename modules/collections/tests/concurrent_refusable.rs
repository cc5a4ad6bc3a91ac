#![cfg(feature = "std")]

use std::{sync::Arc, thread};

use coffer_collections_rs::core::collections::{Collection, RefusableStack, Stack, TransactionState};

#[test]
fn concurrent_pops_then_refuse_restore_every_element() {
  let stack: Arc<RefusableStack<u32>> = Arc::new(RefusableStack::default());
  for value in 0..1_000 {
    stack.push(value).unwrap();
  }
  let before = stack.to_vec();

  let workers: Vec<_> = (0..4)
    .map(|_| {
      let stack = Arc::clone(&stack);
      thread::spawn(move || (0..200).filter(|_| stack.pop().is_ok()).count())
    })
    .collect();
  let popped: usize = workers.into_iter().map(|worker| worker.join().unwrap()).sum();

  assert_eq!(popped, 800);
  assert_eq!(stack.popped().len(), 800);
  assert_eq!(stack.state(), TransactionState::Pending);
  assert_eq!(stack.refuse(), Ok(800));
  assert_eq!(stack.to_vec(), before);
}

#[test]
fn accept_racing_with_pops_never_loses_an_element() {
  let stack: Arc<RefusableStack<u32>> = Arc::new(RefusableStack::default());
  for value in 0..2_000 {
    stack.push(value).unwrap();
  }

  let popper = {
    let stack = Arc::clone(&stack);
    thread::spawn(move || while stack.pop().is_ok() {})
  };
  let acceptor = {
    let stack = Arc::clone(&stack);
    thread::spawn(move || {
      let mut accepted = 0;
      for _ in 0..100 {
        accepted += stack.accept();
        thread::yield_now();
      }
      accepted
    })
  };
  popper.join().unwrap();
  let accepted = acceptor.join().unwrap() + stack.accept();

  assert_eq!(accepted, 2_000);
  assert!(stack.is_empty());
  assert_eq!(stack.state(), TransactionState::Clean);
}

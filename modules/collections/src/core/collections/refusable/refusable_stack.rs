use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use tracing::{debug, warn};

use super::TransactionState;
use crate::core::{
  collections::{ArrayStack, BatchError, Collection, CollectionError, Resettable, Stack},
  sync::{SpinSyncRwLock, SyncRwLockLike},
};

/// Stack decorator whose pops stay speculative until accepted or refused.
///
/// Every successful [`Stack::pop`] records the popped element in a buffer guarded by the
/// decorator's own lock. [`RefusableStack::accept`] forgets the buffer and keeps the pops;
/// [`RefusableStack::refuse`] pushes the buffered elements back so the wrapped stack returns
/// to its state before the first speculative pop.
///
/// `pop` holds the buffer lock while it pops from the wrapped stack, so a concurrent
/// `accept` or `refuse` never observes an element that left the stack but has not reached
/// the buffer yet.
///
/// Under a [`Bounded`](crate::core::collections::Bounded) decorator, finish transactions with
/// [`Bounded::accept`](crate::core::collections::Bounded::accept) and
/// [`Bounded::refuse`](crate::core::collections::Bounded::refuse). Refusing through
/// `Bounded::inner` restores elements the decorator's counter never sees.
pub struct RefusableStack<T, S = ArrayStack<T>, L = SpinSyncRwLock<Vec<T>>>
where
  S: Stack<T>,
  L: SyncRwLockLike<Vec<T>>, {
  inner:  S,
  popped: L,
  _pd:    PhantomData<T>,
}

impl<T, S, L> RefusableStack<T, S, L>
where
  S: Stack<T>,
  L: SyncRwLockLike<Vec<T>>,
{
  /// Wraps an existing stack with an empty pop buffer.
  #[must_use]
  pub fn new(inner: S) -> Self {
    Self { inner, popped: L::new(Vec::new()), _pd: PhantomData }
  }

  /// Finalizes every buffered pop and returns how many there were.
  pub fn accept(&self) -> usize {
    let mut popped = self.popped.write();
    let accepted = popped.len();
    popped.clear();
    if accepted > 0 {
      debug!(accepted, "accepted speculative pops");
    }
    accepted
  }

  /// Pushes the buffered elements back, most recently popped first, and returns how many were
  /// restored.
  ///
  /// # Errors
  ///
  /// Returns a [`BatchError`] when the wrapped stack rejects a push. Replay stops there;
  /// `added` counts the elements restored before the failure and the remaining ones stay in
  /// the buffer, still in pop order, so the caller can retry or inspect them.
  pub fn refuse(&self) -> Result<usize, BatchError>
  where
    T: Clone, {
    self.refuse_within(usize::MAX)
  }

  /// Like [`RefusableStack::refuse`], but restores at most `limit` elements and reports
  /// [`CollectionError::Full`] for the first one beyond it.
  pub(crate) fn refuse_within(&self, limit: usize) -> Result<usize, BatchError>
  where
    T: Clone, {
    let mut popped = self.popped.write();
    let mut replayed = 0;
    while let Some(elem) = popped.last().cloned() {
      let pushed = if replayed < limit { self.inner.push(elem) } else { Err(CollectionError::Full) };
      if let Err(error) = pushed {
        warn!(replayed, pending = popped.len(), %error, "refuse stopped before restoring every pop");
        return Err(BatchError::new(replayed, error));
      }
      popped.pop();
      replayed += 1;
    }
    if replayed > 0 {
      debug!(replayed, "refused speculative pops");
    }
    Ok(replayed)
  }

  /// Returns a copy of the buffered elements in the order they were popped.
  #[must_use]
  pub fn popped(&self) -> Vec<T>
  where
    T: Clone, {
    self.popped.read().clone()
  }

  /// Reports whether pops are waiting for `accept` or `refuse`.
  #[must_use]
  pub fn state(&self) -> TransactionState {
    if self.popped.read().is_empty() {
      TransactionState::Clean
    } else {
      TransactionState::Pending
    }
  }

  /// Returns the wrapped stack.
  #[must_use]
  pub const fn inner(&self) -> &S {
    &self.inner
  }
}

impl<T, S, L> Default for RefusableStack<T, S, L>
where
  S: Stack<T> + Default,
  L: SyncRwLockLike<Vec<T>>,
{
  fn default() -> Self {
    Self::new(S::default())
  }
}

impl<T, S, L> Resettable for RefusableStack<T, S, L>
where
  S: Stack<T>,
  L: SyncRwLockLike<Vec<T>>,
{
  /// Resets the wrapped stack and drops the buffer, whatever state the transaction was in.
  fn reset(&self) -> Result<(), CollectionError> {
    let mut popped = self.popped.write();
    popped.clear();
    self.inner.reset()
  }
}

impl<T, S, L> Collection<T> for RefusableStack<T, S, L>
where
  S: Stack<T>,
  L: SyncRwLockLike<Vec<T>>,
{
  fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  fn len(&self) -> usize {
    self.inner.len()
  }

  fn to_vec(&self) -> Vec<T>
  where
    T: Clone, {
    self.inner.to_vec()
  }

  fn add(&self, elem: T) -> Result<(), CollectionError> {
    self.inner.push(elem)
  }
}

impl<T, S, L> Stack<T> for RefusableStack<T, S, L>
where
  T: Clone,
  S: Stack<T>,
  L: SyncRwLockLike<Vec<T>>,
{
  fn push(&self, elem: T) -> Result<(), CollectionError> {
    self.inner.push(elem)
  }

  fn pop(&self) -> Result<T, CollectionError> {
    let mut popped = self.popped.write();
    let elem = self.inner.pop()?;
    popped.push(elem.clone());
    Ok(elem)
  }

  fn peek(&self) -> Result<T, CollectionError>
  where
    T: Clone, {
    self.inner.peek()
  }
}

impl<T, S, L> fmt::Display for RefusableStack<T, S, L>
where
  S: Stack<T> + fmt::Display,
  L: SyncRwLockLike<Vec<T>>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.inner, f)
  }
}

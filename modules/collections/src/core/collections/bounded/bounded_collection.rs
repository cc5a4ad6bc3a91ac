use alloc::vec::Vec;
use core::fmt;

use tracing::debug;

use super::CapacityCounter;
use crate::core::{
  collections::{BatchError, Collection, CollectionError, Queue, RefusableStack, Resettable, Set, Stack},
  sync::{SpinSyncRwLock, SyncRwLockLike},
};

/// Decorator that caps the number of elements held by the wrapped container.
///
/// The decorator owns its own lock around a [`CapacityCounter`]. Every insertion and removal
/// holds that lock exclusively while it calls into the inner container, so concurrent callers
/// can never push the count past the capacity. The inner container is only ever reached
/// through its public contract.
///
/// `is_empty` and `len` answer from the counter. Removal on a zero count fails with
/// [`CollectionError::Empty`] without touching the inner container.
///
/// A full bound over a set rejects [`Collection::add`] and [`Collection::add_tracked`] with
/// [`CollectionError::Full`] even for an element the set already holds, because the generic
/// path cannot ask the inner container about membership. [`Set::insert`] can, and answers
/// `Ok(false)` for such an element.
pub struct Bounded<C, L = SpinSyncRwLock<CapacityCounter>>
where
  L: SyncRwLockLike<CapacityCounter>, {
  inner:   C,
  counter: L,
}

impl<C, L> Bounded<C, L>
where
  L: SyncRwLockLike<CapacityCounter>,
{
  /// Wraps `inner`, adopting its current size as the initial count.
  ///
  /// # Errors
  ///
  /// Returns [`CollectionError::Full`] when `inner` already holds more than `capacity`
  /// elements.
  pub fn new<T>(inner: C, capacity: usize) -> Result<Self, CollectionError>
  where
    C: Collection<T>, {
    let count = inner.len();
    if count > capacity {
      debug!(count, capacity, "wrapped container already exceeds the capacity bound");
      return Err(CollectionError::Full);
    }
    Ok(Self { inner, counter: L::new(CapacityCounter::new(count, capacity)) })
  }

  /// Creates an empty decorator over `C::default()`.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self
  where
    C: Default, {
    Self { inner: C::default(), counter: L::new(CapacityCounter::new(0, capacity)) }
  }

  /// Returns the fixed capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.counter.read().capacity()
  }

  /// Returns how many more elements fit.
  #[must_use]
  pub fn remaining(&self) -> usize {
    self.counter.read().remaining()
  }

  /// Indicates whether the capacity is exhausted.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.counter.read().is_full()
  }

  /// Returns the wrapped container.
  ///
  /// Mutating it directly bypasses the counter. For a wrapped [`RefusableStack`] that includes
  /// `refuse`; use [`Bounded::refuse`] instead.
  #[must_use]
  pub const fn inner(&self) -> &C {
    &self.inner
  }

  fn admit(&self, insert: impl FnOnce() -> Result<bool, CollectionError>) -> Result<bool, CollectionError> {
    let mut counter = self.counter.write();
    if counter.is_full() {
      debug!(capacity = counter.capacity(), "capacity bound rejected an insertion");
      return Err(CollectionError::Full);
    }
    let grew = insert()?;
    if grew {
      counter.increment();
    }
    Ok(grew)
  }

  fn release<T>(&self, remove: impl FnOnce() -> Result<T, CollectionError>) -> Result<T, CollectionError> {
    let mut counter = self.counter.write();
    if counter.is_empty() {
      return Err(CollectionError::Empty);
    }
    let value = remove()?;
    counter.decrement();
    Ok(value)
  }

  fn inspect<T>(&self, read: impl FnOnce() -> Result<T, CollectionError>) -> Result<T, CollectionError> {
    let counter = self.counter.read();
    if counter.is_empty() {
      return Err(CollectionError::Empty);
    }
    read()
  }
}

impl<T, S, R, L> Bounded<RefusableStack<T, S, R>, L>
where
  T: Clone,
  S: Stack<T>,
  R: SyncRwLockLike<Vec<T>>,
  L: SyncRwLockLike<CapacityCounter>,
{
  /// Finalizes the wrapped stack's buffered pops. The count already dropped when they were
  /// popped.
  pub fn accept(&self) -> usize {
    let _counter = self.counter.write();
    self.inner.accept()
  }

  /// Restores the wrapped stack's buffered pops while keeping the count in step.
  ///
  /// Replay never pushes the count past the capacity.
  ///
  /// # Errors
  ///
  /// Returns a [`BatchError`] carrying [`CollectionError::Full`] when the bound stops the
  /// replay, or the wrapped stack's own push error. `added` counts the restored elements; the
  /// rest stay buffered.
  pub fn refuse(&self) -> Result<usize, BatchError> {
    let mut counter = self.counter.write();
    let result = self.inner.refuse_within(counter.remaining());
    let replayed = match &result {
      | Ok(replayed) => *replayed,
      | Err(error) => error.added,
    };
    counter.advance(replayed);
    result
  }
}

impl<C, L> Default for Bounded<C, L>
where
  C: Default,
  L: SyncRwLockLike<CapacityCounter>,
{
  /// Creates a zero-capacity decorator, which rejects every insertion.
  fn default() -> Self {
    Self::with_capacity(0)
  }
}

impl<C, L> Resettable for Bounded<C, L>
where
  C: Resettable,
  L: SyncRwLockLike<CapacityCounter>,
{
  fn reset(&self) -> Result<(), CollectionError> {
    let mut counter = self.counter.write();
    self.inner.reset()?;
    counter.clear();
    Ok(())
  }
}

impl<T, C, L> Collection<T> for Bounded<C, L>
where
  C: Collection<T>,
  L: SyncRwLockLike<CapacityCounter>,
{
  fn is_empty(&self) -> bool {
    self.counter.read().is_empty()
  }

  fn len(&self) -> usize {
    self.counter.read().count()
  }

  fn to_vec(&self) -> Vec<T>
  where
    T: Clone, {
    self.inner.to_vec()
  }

  fn add(&self, elem: T) -> Result<(), CollectionError> {
    self.add_tracked(elem).map(|_| ())
  }

  /// Rejects with [`CollectionError::Full`] whenever the bound is exhausted, duplicates
  /// included.
  fn add_tracked(&self, elem: T) -> Result<bool, CollectionError> {
    self.admit(|| self.inner.add_tracked(elem))
  }
}

impl<T, C, L> Stack<T> for Bounded<C, L>
where
  C: Stack<T>,
  L: SyncRwLockLike<CapacityCounter>,
{
  fn push(&self, elem: T) -> Result<(), CollectionError> {
    self.admit(|| self.inner.push(elem).map(|()| true)).map(|_| ())
  }

  fn pop(&self) -> Result<T, CollectionError> {
    self.release(|| self.inner.pop())
  }

  fn peek(&self) -> Result<T, CollectionError>
  where
    T: Clone, {
    self.inspect(|| self.inner.peek())
  }
}

impl<T, C, L> Queue<T> for Bounded<C, L>
where
  C: Queue<T>,
  L: SyncRwLockLike<CapacityCounter>,
{
  fn enqueue(&self, elem: T) -> Result<(), CollectionError> {
    self.admit(|| self.inner.enqueue(elem).map(|()| true)).map(|_| ())
  }

  fn dequeue(&self) -> Result<T, CollectionError> {
    self.release(|| self.inner.dequeue())
  }

  fn front(&self) -> Result<T, CollectionError>
  where
    T: Clone, {
    self.inspect(|| self.inner.front())
  }
}

impl<T, C, L> Set<T> for Bounded<C, L>
where
  C: Set<T>,
  L: SyncRwLockLike<CapacityCounter>,
{
  fn contains(&self, elem: &T) -> bool {
    self.inner.contains(elem)
  }

  /// Inserts `elem` unless the bound is exhausted.
  ///
  /// A full set still answers `Ok(false)` for an element it already holds.
  fn insert(&self, elem: T) -> Result<bool, CollectionError> {
    let mut counter = self.counter.write();
    if counter.is_full() {
      if self.inner.contains(&elem) {
        return Ok(false);
      }
      debug!(capacity = counter.capacity(), "capacity bound rejected an insertion");
      return Err(CollectionError::Full);
    }
    let grew = self.inner.insert(elem)?;
    if grew {
      counter.increment();
    }
    Ok(grew)
  }
}

impl<C, L> fmt::Display for Bounded<C, L>
where
  C: fmt::Display,
  L: SyncRwLockLike<CapacityCounter>,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.inner, f)
  }
}
